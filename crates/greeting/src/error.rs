//! Greeting error types.

use thiserror::Error;

/// No API key was available; raised before any request is sent.
///
/// The `Display` form is the notice shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API Key missing. Please set the {var} env variable.")]
pub struct MissingCredential {
    /// Environment variable the key was expected in.
    pub var: String,
}

impl MissingCredential {
    /// Missing key for the named variable.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

/// Anything that went wrong during or after the generation call.
///
/// These never reach the end user; the service swaps in a fallback line.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    /// Connection, TLS or timeout failure while talking to the endpoint.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },
    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The response carried no text.
    #[error("response contained no text")]
    Empty,
}

impl GenerationError {
    /// True for the empty-response case, which gets its own fallback line.
    pub fn is_empty_response(&self) -> bool {
        matches!(self, GenerationError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_notice_names_variable() {
        let err = MissingCredential::new("API_KEY");
        assert_eq!(
            err.to_string(),
            "API Key missing. Please set the API_KEY env variable."
        );
    }

    #[test]
    fn status_error_mentions_code() {
        let err = GenerationError::Status {
            status: 403,
            body: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "endpoint returned HTTP 403: denied");
        assert!(!err.is_empty_response());
        assert!(GenerationError::Empty.is_empty_response());
    }

    #[test]
    fn client_build_failure_is_its_own_kind() {
        let build_err = reqwest::Client::builder()
            .user_agent("bad\nagent")
            .build()
            .expect_err("newline is not a valid header value");
        let err = GenerationError::Client(build_err);
        assert!(err.to_string().starts_with("failed to build HTTP client"));
        assert!(!err.is_empty_response());
    }
}
