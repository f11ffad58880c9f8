//! Greeting request settings.

use serde::{Deserialize, Serialize};

/// Default Gemini REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Softmax temperature.
    pub temperature: f32,
    /// Top-k cutoff.
    pub top_k: u32,
    /// Nucleus cutoff.
    pub top_p: f32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_k: 40,
            top_p: 0.95,
        }
    }
}

/// Where and how greetings are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Model identifier.
    pub model: String,
    /// Base URL, without the `/v1beta/...` path.
    pub endpoint: String,
    /// Environment variable read for the API key at call time.
    pub api_key_env: String,
    /// Whole-request timeout in seconds; unset leaves the transport default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Sampling parameters.
    pub sampling: SamplingConfig,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: None,
            sampling: SamplingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_settings() {
        let config = GreetingConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_key_env, "API_KEY");
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.sampling.top_k, 40);
    }

    #[test]
    fn timeout_is_omitted_from_json_when_unset() {
        let value = serde_json::to_value(GreetingConfig::default()).expect("serialize");
        assert!(value.get("timeout_secs").is_none());

        let config: GreetingConfig =
            serde_json::from_str(r#"{"timeout_secs": 5}"#).expect("deserialize");
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
