//! Greeting request with credential pre-flight and local fallback.

use serde::Serialize;
use tracing::{info, warn};

use crate::client::{GeminiClient, GenerationRequest, TextGenerator};
use crate::config::GreetingConfig;
use crate::credentials::{CredentialSource, EnvCredentials};
use crate::error::{GenerationError, MissingCredential};
use crate::prompt::GreetingPrompt;

/// Shown when the endpoint answers without any text.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "May your holidays be filled with golden moments and emerald dreams.";
/// Shown when the call itself fails.
pub const ERROR_FALLBACK: &str = "Wishing you a season of splendor and majestic joy.";

/// What the greeting panel displays. The text is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum GreetingOutcome {
    /// Text produced by the model.
    Generated(String),
    /// Fixed line substituted after a failed call.
    Fallback(String),
}

impl GreetingOutcome {
    /// Fallback line for a failed call.
    pub fn fallback_for(err: &GenerationError) -> Self {
        let text = if err.is_empty_response() {
            EMPTY_RESPONSE_FALLBACK
        } else {
            ERROR_FALLBACK
        };
        GreetingOutcome::Fallback(text.to_string())
    }

    /// Text to display.
    pub fn text(&self) -> &str {
        match self {
            GreetingOutcome::Generated(text) | GreetingOutcome::Fallback(text) => text,
        }
    }

    /// True when a fallback line was substituted.
    pub fn is_fallback(&self) -> bool {
        matches!(self, GreetingOutcome::Fallback(_))
    }

    /// Consume into the display text.
    pub fn into_text(self) -> String {
        match self {
            GreetingOutcome::Generated(text) | GreetingOutcome::Fallback(text) => text,
        }
    }
}

/// Request a greeting for `name` in the given `theme`.
///
/// The credential is checked first; without one no request is made and
/// [`MissingCredential`] is returned. Every failure after that point is
/// logged and replaced by a fallback line.
pub async fn request_greeting<G, C>(
    generator: &G,
    credentials: &C,
    config: &GreetingConfig,
    name: &str,
    theme: &str,
) -> Result<GreetingOutcome, MissingCredential>
where
    G: TextGenerator + ?Sized,
    C: CredentialSource + ?Sized,
{
    let api_key = credentials.api_key()?;
    let prompt = GreetingPrompt::new(name, theme);
    let prompt_text = prompt.render();
    let request = GenerationRequest {
        api_key: &api_key,
        model: &config.model,
        prompt: &prompt_text,
        sampling: &config.sampling,
    };

    let outcome = match generator.generate(&request).await {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                warn!(model = %config.model, "Greeting response was blank; using fallback");
                GreetingOutcome::fallback_for(&GenerationError::Empty)
            } else {
                GreetingOutcome::Generated(text.to_string())
            }
        }
        Err(err) => {
            warn!(%err, model = %config.model, "Greeting generation failed; using fallback");
            GreetingOutcome::fallback_for(&err)
        }
    };

    info!(
        recipient = prompt.name(),
        theme = prompt.theme(),
        fallback = outcome.is_fallback(),
        "Greeting ready"
    );
    Ok(outcome)
}

/// Generator, credentials and settings bundled for repeated use.
#[derive(Debug, Clone)]
pub struct GreetingService<G, C> {
    generator: G,
    credentials: C,
    config: GreetingConfig,
}

impl GreetingService<GeminiClient, EnvCredentials> {
    /// Gemini-backed service reading the key from the configured variable.
    pub fn from_config(config: GreetingConfig) -> Result<Self, GenerationError> {
        let generator = GeminiClient::new(&config)?;
        let credentials = EnvCredentials::new(config.api_key_env.clone());
        Ok(Self::new(generator, credentials, config))
    }
}

impl<G, C> GreetingService<G, C>
where
    G: TextGenerator,
    C: CredentialSource,
{
    /// Assemble from parts.
    pub fn new(generator: G, credentials: C, config: GreetingConfig) -> Self {
        Self {
            generator,
            credentials,
            config,
        }
    }

    /// Settings in use.
    pub fn config(&self) -> &GreetingConfig {
        &self.config
    }

    /// See [`request_greeting`].
    pub async fn request(
        &self,
        name: &str,
        theme: &str,
    ) -> Result<GreetingOutcome, MissingCredential> {
        request_greeting(&self.generator, &self.credentials, &self.config, name, theme).await
    }
}
