use async_trait::async_trait;
use sqlx::PgPool;

use super::dto::CreateUserRequest;
use super::password::{hash_password, verify_password};
use super::repo_types::{NewUser, User};
use crate::error::RepoError;
use crate::repo::{self, Entity, NewEntity};

impl Entity for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, username, email, password";
}

#[async_trait]
impl NewEntity for NewUser {
    type Output = User;

    async fn insert(self, db: &PgPool) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password
            "#,
        )
        .bind(self.username)
        .bind(self.email)
        .bind(self.password)
        .fetch_one(db)
        .await
    }
}

impl User {
    /// Hashes the plaintext password, then inserts. A taken email is `Conflict`.
    pub async fn create(
        db: &PgPool,
        req: CreateUserRequest,
        salt: &str,
    ) -> Result<User, RepoError> {
        let password = hash_password(&req.password, salt)?;
        repo::create(
            db,
            NewUser {
                username: req.username,
                email: req.email,
                password,
            },
        )
        .await
    }

    /// Compares a candidate password, mixed with `salt`, against the stored digest.
    pub fn check_password(&self, raw: &str, salt: &str) -> bool {
        verify_password(raw, salt, &self.password)
    }
}
