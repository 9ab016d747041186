//! ChatStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;
use persona_chat_core::NewChatMessage;

use crate::traits::ChatStore;

const CHAT_COLUMNS: &str = "id, user_id, persona, session_id, user_message, ai_response, timestamp";

#[async_trait]
impl ChatStore for PgStorage {
    async fn append_chat(&self, new: &NewChatMessage) -> Result<ChatMessage, StorageError> {
        let message = ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            user: new.user.clone(),
            persona: new.persona.clone(),
            session_id: new.session_id.clone(),
            user_message: new.user_message.clone(),
            ai_response: new.ai_response.clone(),
            timestamp: Utc::now(),
        };
        sqlx::query(&format!(
            "INSERT INTO chat_messages ({CHAT_COLUMNS}) VALUES ($1,$2,$3,$4,$5,$6,$7)"
        ))
        .bind(&message.id)
        .bind(&message.user)
        .bind(&message.persona)
        .bind(&message.session_id)
        .bind(&message.user_message)
        .bind(&message.ai_response)
        .bind(message.timestamp)
        .execute(&self.pool)
        .await?;
        tracing::debug!(user = %message.user, persona = %message.persona, "chat appended");
        Ok(message)
    }

    async fn chats_by_user(
        &self,
        user: &str,
        persona: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Vec<ChatMessage>, StorageError> {
        let mut conditions = vec!["user_id = $1".to_owned()];
        let mut bind_strings: Vec<String> = Vec::new();
        let mut param_idx: usize = 2;

        if let Some(p) = persona {
            conditions.push(format!("persona = ${param_idx}"));
            param_idx += 1;
            bind_strings.push(p.to_owned());
        }
        if let Some(s) = session_id {
            conditions.push(format!("session_id = ${param_idx}"));
            bind_strings.push(s.to_owned());
        }

        let sql = format!(
            "SELECT {CHAT_COLUMNS} FROM chat_messages
             WHERE {}
             ORDER BY timestamp ASC, id ASC",
            conditions.join(" AND ")
        );

        let mut query = sqlx::query(&sql).bind(user);
        for value in &bind_strings {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_chat_message).collect()
    }
}
