//! Shared constants for persona-chat.
//!
//! Centralizes values that would otherwise be duplicated across crates.

/// Query-string sentinel that disables a filter on the chat history read path.
pub const FILTER_ALL: &str = "all";

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Request timeout for the external webhook client, in seconds.
pub const WEBHOOK_TIMEOUT_SECS: u64 = 30;

/// Artificial delay before a canned offline-persona reply, in milliseconds.
pub const OFFLINE_REPLY_DELAY_MS: u64 = 1200;

/// Bearer token lifetime in seconds (7 days).
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Iteration count for the salted password hash.
pub const PASSWORD_HASH_ITERATIONS: u32 = 100_000;
