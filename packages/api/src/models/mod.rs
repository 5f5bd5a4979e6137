//! Data models for the application.

mod profile;
mod user;

pub use profile::{NewProfile, Profile};
pub use user::{NewUser, User, UserUpdate};

use serde::{Deserialize, Serialize};

/// Body of a `201 Created` response: the identity the database assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: i64,
}
