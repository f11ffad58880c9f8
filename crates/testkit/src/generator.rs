//! Scripted stand-ins for the text-generation endpoint.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use noel_luxe_greeting::{
    ApiKey, CredentialSource, GenerationError, GenerationRequest, MissingCredential,
    SamplingConfig, TextGenerator,
};

/// Owned copy of a request seen by [`ScriptedGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Key that was sent.
    pub api_key: String,
    /// Model that was asked.
    pub model: String,
    /// Prompt text.
    pub prompt: String,
    /// Sampling parameters.
    pub sampling: SamplingConfig,
}

/// Replays queued replies in order and records every request.
///
/// Once the queue is drained further calls fail with an empty response.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    /// Generator with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator answering once with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new().then_ok(text)
    }

    /// Generator failing once with `err`.
    pub fn failing(err: GenerationError) -> Self {
        Self::new().then_err(err)
    }

    /// Queue a successful reply.
    pub fn then_ok(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queue a failure.
    pub fn then_err(self, err: GenerationError) -> Self {
        self.push(Err(err));
        self
    }

    fn push(&self, reply: Result<String, GenerationError>) {
        self.replies
            .lock()
            .expect("replies lock poisoned")
            .push_back(reply);
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(RecordedRequest {
                api_key: request.api_key.expose().to_string(),
                model: request.model.to_string(),
                prompt: request.prompt.to_string(),
                sampling: *request.sampling,
            });
        self.replies
            .lock()
            .expect("replies lock poisoned")
            .pop_front()
            .unwrap_or(Err(GenerationError::Empty))
    }
}

/// Fixed credential answer, independent of the process environment.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    key: Option<String>,
    var: String,
}

impl StaticCredentials {
    /// Always yields `key`.
    pub fn present(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            var: "API_KEY".to_string(),
        }
    }

    /// Always reports the key as missing from `API_KEY`.
    pub fn absent() -> Self {
        Self {
            key: None,
            var: "API_KEY".to_string(),
        }
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Result<ApiKey, MissingCredential> {
        self.key
            .clone()
            .and_then(ApiKey::new)
            .ok_or_else(|| MissingCredential::new(self.var.clone()))
    }
}
