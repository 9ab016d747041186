//! Typed error enum for the storage layer.
//!
//! Lets the service layer distinguish the failures it handles specially
//! (a missing trait document, a duplicate email at registration) from
//! plain database trouble, without downcasting opaque boxes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for an expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique-constraint violation. The only unique key in the schema is
    /// the user email; the payload is the driver's constraint message.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A JSONB trait list in a row could not be decoded into its
    /// domain type.
    #[error("corrupt row data: {context}")]
    CorruptRow {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Startup migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Custom `From<sqlx::Error>` — NOT blanket `#[from]`.
///
/// SQLSTATE 23505 becomes [`StorageError::Duplicate`] so the auth gate
/// can answer a registration race with a conflict instead of a 500.
/// `RowNotFound` maps to a generic `NotFound`; call sites that know the
/// entity remap it with context.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::CorruptRow { context: "trait list JSON", source: err }
    }
}
