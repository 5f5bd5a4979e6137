use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewProfile, NewUser, Profile, User};

/// Failure of a storage operation. Callers do not distinguish between variants.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("storage unavailable")]
    Unavailable,
}

/// Async storage for users and profiles.
///
/// Every method is a single round-trip to the backend. Mutations report the
/// number of rows they touched; zero means the identity did not match.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a user and return its new identity.
    async fn create_user(&self, user: NewUser) -> Result<i64, StoreError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Set the name of a user. Returns rows affected.
    async fn rename_user(&self, id: i64, name: &str) -> Result<u64, StoreError>;

    /// Delete a user. Profiles pointing at it are left alone. Returns rows affected.
    async fn delete_user(&self, id: i64) -> Result<u64, StoreError>;

    /// Insert a profile and return its new identity.
    async fn create_profile(&self, profile: NewProfile) -> Result<i64, StoreError>;

    async fn find_profile(&self, id: i64) -> Result<Option<Profile>, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
