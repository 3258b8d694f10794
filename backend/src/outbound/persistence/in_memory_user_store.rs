//! In-memory record store adapter.
//!
//! Backs the `UserStore` port with a `BTreeMap` behind an async `RwLock`.
//! Identifier assignment, timestamps, and email uniqueness live here, the
//! way a relational adapter would own its sequence and unique index.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{UserDraft, UserId, UserRecord};

#[derive(Debug, Default)]
struct Shelf {
    next_id: i64,
    rows: BTreeMap<i64, UserRecord>,
}

impl Shelf {
    /// Reject a draft whose email is already held by a different record.
    fn check_email_unique(
        &self,
        draft: &UserDraft,
        exclude: Option<UserId>,
    ) -> Result<(), UserStoreError> {
        let key = draft.email.comparison_key();
        let taken = self
            .rows
            .values()
            .filter(|row| Some(row.id) != exclude)
            .any(|row| row.email.comparison_key() == key);
        if taken {
            return Err(UserStoreError::DuplicateEmail {
                email: draft.email.as_ref().to_owned(),
            });
        }
        Ok(())
    }
}

/// Process-local [`UserStore`] implementation.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    shelf: RwLock<Shelf>,
}

impl InMemoryUserStore {
    /// An empty store whose first record will get id 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<UserRecord>, UserStoreError> {
        let shelf = self.shelf.read().await;
        Ok(shelf.rows.values().cloned().collect())
    }

    async fn find(&self, id: UserId) -> Result<Option<UserRecord>, UserStoreError> {
        let shelf = self.shelf.read().await;
        Ok(shelf.rows.get(&id.get()).cloned())
    }

    async fn create(&self, draft: UserDraft) -> Result<UserRecord, UserStoreError> {
        let mut shelf = self.shelf.write().await;
        shelf.check_email_unique(&draft, None)?;

        shelf.next_id += 1;
        let id = UserId::new(shelf.next_id);
        let record = UserRecord::from_draft(id, draft, Utc::now());
        shelf.rows.insert(id.get(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> Result<UserRecord, UserStoreError> {
        let mut shelf = self.shelf.write().await;
        if !shelf.rows.contains_key(&id.get()) {
            return Err(UserStoreError::NotFound { id: id.get() });
        }
        shelf.check_email_unique(&draft, Some(id))?;

        let now = Utc::now();
        let record = shelf
            .rows
            .get_mut(&id.get())
            .ok_or(UserStoreError::NotFound { id: id.get() })?;
        record.apply(draft, now);
        Ok(record.clone())
    }

    async fn delete(&self, id: UserId) -> Result<UserRecord, UserStoreError> {
        let mut shelf = self.shelf.write().await;
        shelf
            .rows
            .remove(&id.get())
            .ok_or(UserStoreError::NotFound { id: id.get() })
    }
}
