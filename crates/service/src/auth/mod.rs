//! The auth gate: registration, login, and bearer token issuance.

mod password;
mod token;

use std::sync::Arc;

use chrono::Utc;
use persona_chat_core::{PublicUser, User, TOKEN_TTL_SECS};
use persona_chat_storage::traits::UserStore;
use persona_chat_storage::StorageError;

use crate::error::ServiceError;

pub use token::TokenClaims;

/// Registers and authenticates accounts. The signing secret is injected
/// at construction; password hashes never leave this type.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    secret: Vec<u8>,
}

impl AuthService {
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, secret: String) -> Self {
        Self { users, secret: secret.into_bytes() }
    }

    /// Create an account. Neither the password nor its hash is returned.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        for (value, field) in [(name, "name"), (email, "email"), (password, "password")] {
            if value.trim().is_empty() {
                return Err(ServiceError::InvalidInput(format!(
                    "Missing required field: {field}"
                )));
            }
        }
        if !looks_like_email(email) {
            return Err(ServiceError::InvalidInput("Invalid email address".to_owned()));
        }

        if self.users.get_user_by_email(email).await?.is_some() {
            return Err(ServiceError::Conflict("Email already registered".to_owned()));
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: password::hash_password(password),
            created_at: Utc::now(),
        };
        match self.users.create_user(&user).await {
            Ok(()) => {
                tracing::info!(user = %user.id, "account registered");
                Ok(())
            },
            // Lost a race with a concurrent registration for the same email.
            Err(StorageError::Duplicate(_)) => {
                Err(ServiceError::Conflict("Email already registered".to_owned()))
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Authenticate and issue a signed bearer token. Unknown email and
    /// wrong password are indistinguishable to the caller.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, PublicUser), ServiceError> {
        let Some(user) = self.users.get_user_by_email(email).await? else {
            return Err(ServiceError::InvalidCredentials);
        };
        if !password::verify_password(password, &user.password_hash) {
            return Err(ServiceError::InvalidCredentials);
        }

        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };
        let token = token::sign(&self.secret, &claims)
            .map_err(|_| ServiceError::InvalidToken("claims serialization failed"))?;
        Ok((token, user.into()))
    }

    /// Decode and verify a token issued by [`AuthService::login`].
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, ServiceError> {
        token::verify(&self.secret, token, Utc::now().timestamp())
            .map_err(ServiceError::InvalidToken)
    }
}

/// Minimal address shape check: one `@` with non-empty local part and a
/// dotted domain.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod email_tests {
    use super::looks_like_email;

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("ada@example.com"));
        assert!(!looks_like_email("ada"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("ada@.com"));
        assert!(!looks_like_email("ada@example."));
    }
}
