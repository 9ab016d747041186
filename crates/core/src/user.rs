use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered account. Created at registration, read at login,
/// never mutated elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Encoded salted hash. Never serialized into API responses —
    /// handlers only ever expose [`PublicUser`].
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The projection of a [`User`] that is safe to return to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self { id: user.id, name: user.name, email: user.email }
    }
}
