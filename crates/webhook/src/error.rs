//! Typed error enum for the webhook gateway.

use thiserror::Error;

/// Errors from the external webhook call.
///
/// These never reach an end user as an exception: the chat transcript
/// has no error channel, so callers render [`WebhookError::fallback_reply`]
/// into the message stream instead.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl WebhookError {
    /// The fixed transcript line shown when the gateway fails.
    #[must_use]
    pub const fn fallback_reply() -> &'static str {
        "I'm experiencing some technical difficulties accessing the AI systems. \
         Please try again in a moment, or contact support if the issue persists."
    }
}
