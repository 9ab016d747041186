use std::sync::Arc;

use persona_chat_core::{
    group_into_sessions, summarize_sessions, ChatMessage, NewChatMessage, SessionSummary,
    FILTER_ALL,
};
use persona_chat_storage::traits::ChatStore;

use crate::error::ServiceError;

/// Chat history append/read logic over the append-only store.
pub struct ChatService {
    storage: Arc<dyn ChatStore>,
}

impl ChatService {
    #[must_use]
    pub fn new(storage: Arc<dyn ChatStore>) -> Self {
        Self { storage }
    }

    /// Persist one request/response pair. Every field is required.
    pub async fn append(&self, new: NewChatMessage) -> Result<ChatMessage, ServiceError> {
        for (value, field) in [
            (&new.user, "user"),
            (&new.persona, "persona"),
            (&new.session_id, "session_id"),
            (&new.user_message, "user_message"),
            (&new.ai_response, "ai_response"),
        ] {
            if value.trim().is_empty() {
                return Err(ServiceError::InvalidInput(format!(
                    "Missing required field: {field}"
                )));
            }
        }
        Ok(self.storage.append_chat(&new).await?)
    }

    /// A user's messages, timestamp ascending. `persona` / `session_id`
    /// equal to `"all"` (or absent) disable that filter.
    pub async fn history(
        &self,
        user: &str,
        persona: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Vec<ChatMessage>, ServiceError> {
        if user.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Missing required query parameter: user".to_owned(),
            ));
        }
        let persona = active_filter(persona);
        let session_id = active_filter(session_id);
        Ok(self.storage.chats_by_user(user, persona, session_id).await?)
    }

    /// Reconstruct the user's conversations from the flat history.
    pub async fn sessions(
        &self,
        user: &str,
        persona: Option<&str>,
    ) -> Result<Vec<SessionSummary>, ServiceError> {
        let messages = self.history(user, persona, None).await?;
        Ok(summarize_sessions(group_into_sessions(&messages)))
    }
}

/// Resolve a query filter: absent, blank, or the `"all"` sentinel all
/// mean "no filter".
fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty() && *v != FILTER_ALL)
}

#[cfg(test)]
mod filter_tests {
    use super::active_filter;

    #[test]
    fn test_all_sentinel_disables_filter() {
        assert_eq!(active_filter(Some("all")), None);
        assert_eq!(active_filter(Some("")), None);
        assert_eq!(active_filter(None), None);
        assert_eq!(active_filter(Some("2")), Some("2"));
    }
}
