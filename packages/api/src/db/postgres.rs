//! PostgreSQL-backed [`Store`].
//!
//! One parameterized statement per operation, executed straight against the
//! pool. No transactions: concurrent writes to the same row are ordered by
//! PostgreSQL's row locks and the last writer wins.

use async_trait::async_trait;
use sqlx::{Connection, PgPool};

use super::store::{Store, StoreError};
use crate::models::{NewProfile, NewUser, Profile, User};

/// [`Store`] over a shared [`PgPool`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<i64, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, name) VALUES ($1, $2) RETURNING id",
        )
        .bind(&user.email)
        .bind(&user.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user: Option<User> =
            sqlx::query_as("SELECT id, email, name, created_at FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    async fn rename_user(&self, id: i64, name: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE users SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_user(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<i64, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO profiles (user_id, bio, age) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(profile.user_id)
        .bind(&profile.bio)
        .bind(profile.age)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_profile(&self, id: i64) -> Result<Option<Profile>, StoreError> {
        let profile: Option<Profile> =
            sqlx::query_as("SELECT id, user_id, bio, age FROM profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(profile)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }
}
