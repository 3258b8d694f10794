//! Outbound port for user record persistence.

use async_trait::async_trait;

use crate::domain::{UserDraft, UserId, UserRecord};

/// Failures raised by record store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Another record already holds this email address.
    #[error("a user with email {email} already exists")]
    DuplicateEmail {
        /// The conflicting address as submitted.
        email: String,
    },
    /// No record exists for the identifier.
    #[error("no user with id {id}")]
    NotFound {
        /// The missing identifier.
        id: i64,
    },
    /// The adapter itself failed.
    #[error("user store failure: {message}")]
    Storage {
        /// Adapter-specific description.
        message: String,
    },
}

/// Record store port: owns persistence, identifier assignment, timestamps,
/// and email uniqueness.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All records, ordered by identifier.
    async fn list(&self) -> Result<Vec<UserRecord>, UserStoreError>;

    /// Fetch one record, `None` when the identifier is unknown.
    async fn find(&self, id: UserId) -> Result<Option<UserRecord>, UserStoreError>;

    /// Persist a new record, assigning its identifier and timestamps.
    async fn create(&self, draft: UserDraft) -> Result<UserRecord, UserStoreError>;

    /// Overwrite an existing record's fields from a draft.
    async fn update(&self, id: UserId, draft: UserDraft) -> Result<UserRecord, UserStoreError>;

    /// Remove a record, returning it as it was stored.
    async fn delete(&self, id: UserId) -> Result<UserRecord, UserStoreError>;
}
