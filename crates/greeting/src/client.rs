//! Text-generation backends.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{GreetingConfig, SamplingConfig};
use crate::credentials::ApiKey;
use crate::error::GenerationError;

/// Longest error body kept for diagnostics.
const MAX_ERROR_BODY: usize = 512;

/// One generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// Key for the endpoint.
    pub api_key: &'a ApiKey,
    /// Model identifier.
    pub model: &'a str,
    /// Full instruction text.
    pub prompt: &'a str,
    /// Sampling parameters.
    pub sampling: &'a SamplingConfig,
}

/// Something that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation.
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError>;
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
}

impl<'a> GenerateContentRequest<'a> {
    /// Body for a single-turn prompt.
    pub fn new(prompt: &'a str, sampling: &SamplingConfig) -> Self {
        Self {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
            generation_config: WireGenerationConfig {
                temperature: sampling.temperature,
                top_k: sampling.top_k,
                top_p: sampling.top_p,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenate the text parts of the first candidate.
pub fn extract_text(body: &[u8]) -> Result<String, GenerationError> {
    let response: GenerateContentResponse = serde_json::from_slice(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(GenerationError::Empty);
    }
    Ok(text)
}

/// Gemini `generateContent` over HTTPS.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GeminiClient {
    /// Client for the configured endpoint. A timeout is applied only when
    /// `timeout_secs` is set.
    pub fn new(config: &GreetingConfig) -> Result<Self, GenerationError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("noel-luxe/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(GenerationError::Client)?;
        Ok(Self::with_http(http, &config.endpoint))
    }

    /// Client reusing an existing HTTP client.
    pub fn with_http(http: reqwest::Client, endpoint: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for `model`.
    pub fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.endpoint)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        let url = self.url(request.model);
        debug!(%url, "Requesting greeting");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", request.api_key.expose())
            .json(&GenerateContentRequest::new(request.prompt, request.sampling))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            let mut body = String::from_utf8_lossy(&body).into_owned();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_text(&body)
    }
}
