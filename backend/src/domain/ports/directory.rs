//! Driving ports consumed by inbound adapters.
//!
//! HTTP handlers depend on these use-case traits rather than on the store
//! port, so adapters stay testable with deterministic implementations.

use async_trait::async_trait;

use crate::domain::{Error, UserDraft, UserId, UserRecord};

/// Read side of the directory: listing and fetching users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// The full record set.
    async fn list_users(&self) -> Result<Vec<UserRecord>, Error>;

    /// One user, or a not-found error.
    async fn get_user(&self, id: UserId) -> Result<UserRecord, Error>;
}

/// Write side of the directory: create, update, delete.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a new user.
    async fn create_user(&self, draft: UserDraft) -> Result<UserRecord, Error>;

    /// Replace an existing user's fields.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<UserRecord, Error>;

    /// Remove a user, returning the deleted record.
    async fn delete_user(&self, id: UserId) -> Result<UserRecord, Error>;
}
