//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod chats;
mod personas;
mod users;

use chrono::{DateTime, Utc};
use persona_chat_core::{
    ChatMessage, FlatTrait, PersonaTrait, User, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::migrations::run_migrations;

/// Pooled PostgreSQL storage. Constructed once at startup with the
/// injected database URL; handlers share it behind `Arc`.
#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn parse_json_list(val: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(val.clone()).unwrap_or_default()
}

pub(crate) fn row_to_chat_message(row: &sqlx::postgres::PgRow) -> Result<ChatMessage, StorageError> {
    let timestamp: DateTime<Utc> = row.try_get("timestamp")?;
    Ok(ChatMessage {
        id: row.try_get("id")?,
        user: row.try_get("user_id")?,
        persona: row.try_get("persona")?,
        session_id: row.try_get("session_id")?,
        user_message: row.try_get("user_message")?,
        ai_response: row.try_get("ai_response")?,
        timestamp,
    })
}

pub(crate) fn row_to_persona_trait(
    row: &sqlx::postgres::PgRow,
) -> Result<PersonaTrait, StorageError> {
    let core_expertise: serde_json::Value = row.try_get("core_expertise")?;
    let traits: serde_json::Value = row.try_get("traits")?;
    let pain_points: serde_json::Value = row.try_get("pain_points")?;
    let key_responsibilities: serde_json::Value = row.try_get("key_responsibilities")?;
    Ok(PersonaTrait {
        persona_id: row.try_get("persona_id")?,
        about: row.try_get("about")?,
        core_expertise: parse_json_list(&core_expertise),
        communication_style: row.try_get("communication_style")?,
        traits: parse_json_list(&traits),
        pain_points: parse_json_list(&pain_points),
        key_responsibilities: parse_json_list(&key_responsibilities),
        timestamp: row.try_get("timestamp")?,
    })
}

pub(crate) fn row_to_flat_trait(row: &sqlx::postgres::PgRow) -> Result<FlatTrait, StorageError> {
    Ok(FlatTrait {
        title: row.try_get("title")?,
        category: row.try_get("category")?,
        description: row.try_get("description")?,
    })
}

pub(crate) fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, StorageError> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: row.try_get("created_at")?,
    })
}
