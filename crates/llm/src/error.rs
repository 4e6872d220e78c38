//! Typed error enum for the LLM crate.

use thiserror::Error;

/// Errors from the chat-completions call.
///
/// Every variant is terminal: the synthesizer makes exactly one attempt.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty response: model returned no content")]
    EmptyResponse,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl LlmError {
    /// HTTP status reported by the provider, if the call got that far.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}
