//! Typed error enum for the service layer.

use persona_chat_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage failures with the validation
/// and credential failures this layer introduces.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided a missing or malformed required field.
    #[error("{0}")]
    InvalidInput(String),

    /// Unique-key conflict surfaced with a caller-facing message.
    #[error("{0}")]
    Conflict(String),

    /// Bad login. One generic message covers both an unknown email and
    /// a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Bearer token failed verification or expired.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }

    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Conflict(_))
            || matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}
