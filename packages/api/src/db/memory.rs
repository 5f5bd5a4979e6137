use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::store::{Store, StoreError};
use crate::models::{NewProfile, NewUser, Profile, User};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    profiles: BTreeMap<i64, Profile>,
    // Last identity handed out per table, like a Postgres sequence.
    user_seq: i64,
    profile_seq: i64,
}

/// In-memory [`Store`] for testing.
///
/// Identities start at 1 and are never reused. Clones share the same tables.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every operation fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<i64, StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().await;
        tables.user_seq += 1;
        let id = tables.user_seq;
        tables.users.insert(
            id,
            User {
                id,
                email: user.email,
                name: user.name,
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.check()?;
        Ok(self.tables.lock().await.users.get(&id).cloned())
    }

    async fn rename_user(&self, id: i64, name: &str) -> Result<u64, StoreError> {
        self.check()?;
        match self.tables.lock().await.users.get_mut(&id) {
            Some(user) => {
                user.name = name.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_user(&self, id: i64) -> Result<u64, StoreError> {
        self.check()?;
        let removed = self.tables.lock().await.users.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<i64, StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().await;
        tables.profile_seq += 1;
        let id = tables.profile_seq;
        tables.profiles.insert(
            id,
            Profile {
                id,
                user_id: profile.user_id,
                bio: profile.bio,
                age: profile.age,
            },
        );
        Ok(id)
    }

    async fn find_profile(&self, id: i64) -> Result<Option<Profile>, StoreError> {
        self.check()?;
        Ok(self.tables.lock().await.profiles.get(&id).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, name: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let store = MemoryStore::new();

        assert!(store.find_user(1).await.unwrap().is_none());

        let id = store.create_user(new_user("ada@example.com", "Ada")).await.unwrap();
        assert_eq!(id, 1);

        let user = store.find_user(id).await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, "Ada");
    }

    #[tokio::test]
    async fn test_identities_are_not_reused() {
        let store = MemoryStore::new();

        let first = store.create_user(new_user("a@example.com", "A")).await.unwrap();
        assert_eq!(store.delete_user(first).await.unwrap(), 1);

        let second = store.create_user(new_user("b@example.com", "B")).await.unwrap();
        assert_eq!(second, first + 1);
    }

    #[tokio::test]
    async fn test_rename_and_delete_report_rows_affected() {
        let store = MemoryStore::new();
        let id = store.create_user(new_user("a@example.com", "A")).await.unwrap();

        assert_eq!(store.rename_user(id, "Alan").await.unwrap(), 1);
        assert_eq!(store.find_user(id).await.unwrap().unwrap().name, "Alan");
        assert_eq!(store.rename_user(id + 1, "Nobody").await.unwrap(), 0);

        assert_eq!(store.delete_user(id).await.unwrap(), 1);
        assert_eq!(store.delete_user(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_profiles_survive_user_deletion() {
        let store = MemoryStore::new();
        let user_id = store.create_user(new_user("a@example.com", "A")).await.unwrap();
        let profile_id = store
            .create_profile(NewProfile {
                user_id,
                bio: "hello".to_string(),
                age: 30,
            })
            .await
            .unwrap();

        store.delete_user(user_id).await.unwrap();

        let profile = store.find_profile(profile_id).await.unwrap().unwrap();
        assert_eq!(profile.user_id, user_id);
        assert_eq!(profile.bio, "hello");
        assert_eq!(profile.age, 30);
    }

    #[tokio::test]
    async fn test_unavailable_fails_every_operation() {
        let store = MemoryStore::new();
        store.set_unavailable(true);

        assert!(matches!(store.ping().await, Err(StoreError::Unavailable)));
        assert!(store.create_user(NewUser::default()).await.is_err());
        assert!(store.find_profile(1).await.is_err());

        store.set_unavailable(false);
        assert!(store.ping().await.is_ok());
    }
}
