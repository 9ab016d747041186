use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted request/response pair.
///
/// A row is immutable once written: there is no update or delete path
/// anywhere in the system. `timestamp` is assigned by the storage layer
/// at insert time, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    /// Id of the [`crate::User`] who sent the message.
    pub user: String,
    /// Persona identifier. A plain string, not a foreign key.
    pub persona: String,
    /// Explicit session id, or empty for rows written before sessions existed.
    pub session_id: String,
    pub user_message: String,
    pub ai_response: String,
    pub timestamp: DateTime<Utc>,
}

/// Fields the caller supplies when appending a chat exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChatMessage {
    pub user: String,
    pub persona: String,
    pub session_id: String,
    pub user_message: String,
    pub ai_response: String,
}
