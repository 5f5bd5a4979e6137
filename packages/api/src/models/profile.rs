//! Profile model.
//!
//! A profile points at a user through `user_id`, but the reference is never
//! checked: profiles can be created for users that do not exist and survive
//! the deletion of the user they point at.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full profile record from the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub bio: String,
    pub age: i32,
}

/// Body of `POST /profiles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProfile {
    pub user_id: i64,
    pub bio: String,
    pub age: i32,
}
