//! UserStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;

use crate::traits::UserStore;

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at";

#[async_trait]
impl UserStore for PgStorage {
    async fn create_user(&self, user: &User) -> Result<(), StorageError> {
        sqlx::query(&format!("INSERT INTO users ({USER_COLUMNS}) VALUES ($1,$2,$3,$4,$5)"))
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_user(&r)).transpose()
    }
}
