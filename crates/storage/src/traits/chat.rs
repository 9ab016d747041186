use async_trait::async_trait;
use persona_chat_core::{ChatMessage, NewChatMessage};

use crate::error::StorageError;

/// Append-only chat exchange persistence.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Insert one request/response pair. The store assigns the id and
    /// the timestamp; the returned row is the persisted value.
    async fn append_chat(&self, new: &NewChatMessage) -> Result<ChatMessage, StorageError>;

    /// All messages for a user, timestamp ascending. `None` filters are
    /// disabled; an empty result is not an error.
    async fn chats_by_user(
        &self,
        user: &str,
        persona: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Vec<ChatMessage>, StorageError>;
}
