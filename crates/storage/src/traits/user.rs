use async_trait::async_trait;
use persona_chat_core::User;

use crate::error::StorageError;

/// Account persistence. Accounts are created at registration and read
/// at login; nothing mutates them afterwards.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account. A duplicate email yields
    /// [`StorageError::Duplicate`].
    async fn create_user(&self, user: &User) -> Result<(), StorageError>;

    /// Look up an account by email.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;
}
