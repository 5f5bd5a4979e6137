//! # User model
//!
//! [`User`] is the full row of the `users` table. `id` and `created_at` are
//! assigned by the database on insert and never change afterwards. Nothing in
//! the application checks email format or uniqueness; whatever constraints
//! exist live in the schema.
//!
//! [`NewUser`] and [`UserUpdate`] are the request bodies of `POST /users` and
//! `PUT /users/{id}`. Missing fields decode as empty strings so that `{}` is a
//! well-formed body; the handlers decide what an empty value means.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user record from the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

/// Body of `PUT /users/{id}`. Only the name can change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserUpdate {
    pub name: String,
}
