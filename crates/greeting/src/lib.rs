#![warn(missing_docs)]
//! Generated holiday greetings.
//!
//! [`request_greeting`] checks for an API key, sends one prompt to a
//! [`TextGenerator`], and always hands back displayable text: either the
//! model's answer or a fixed fallback line.

mod client;
mod config;
mod credentials;
mod error;
mod prompt;
mod service;

pub use client::{extract_text, GeminiClient, GenerateContentRequest, GenerationRequest, TextGenerator};
pub use config::{
    GreetingConfig, SamplingConfig, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL,
};
pub use credentials::{ApiKey, CredentialSource, EnvCredentials};
pub use error::{GenerationError, MissingCredential};
pub use prompt::{GreetingPrompt, DEFAULT_NAME, DEFAULT_THEME, THEME_PRESETS, WORD_LIMIT};
pub use service::{
    request_greeting, GreetingOutcome, GreetingService, EMPTY_RESPONSE_FALLBACK, ERROR_FALLBACK,
};
