//! Storage layer for persona-chat
//!
//! PostgreSQL over a pooled sqlx connection. One table per entity:
//! users, chat messages, normalized persona traits, legacy flat traits,
//! and the per-persona formatted profiles.

mod error;
mod migrations;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use pg_storage::PgStorage;
