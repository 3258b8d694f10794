//! Directory use-cases over a record store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{UserStore, UserStoreError, UsersCommand, UsersQuery};
use crate::domain::{Error, UserDraft, UserId, UserRecord};

/// Implements the directory's driving ports by delegating to a record store
/// and translating its failures into domain errors.
#[derive(Clone)]
pub struct DirectoryService<S> {
    store: Arc<S>,
}

impl<S> DirectoryService<S> {
    /// Create a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: UserStore> DirectoryService<S> {
    fn map_store_error(error: UserStoreError) -> Error {
        match error {
            UserStoreError::DuplicateEmail { email } => Error::conflict("Email already in use")
                .with_details(json!({
                    "field": "email",
                    "code": "duplicate_email",
                    "email": email,
                })),
            UserStoreError::NotFound { id } => {
                Error::not_found("User not found").with_details(json!({
                    "id": id,
                    "code": "user_not_found",
                }))
            }
            UserStoreError::Storage { message } => {
                Error::internal(format!("user store failure: {message}"))
            }
        }
    }

    fn user_not_found(id: UserId) -> Error {
        Self::map_store_error(UserStoreError::NotFound { id: id.get() })
    }
}

#[async_trait]
impl<S: UserStore> UsersQuery for DirectoryService<S> {
    async fn list_users(&self) -> Result<Vec<UserRecord>, Error> {
        self.store.list().await.map_err(Self::map_store_error)
    }

    async fn get_user(&self, id: UserId) -> Result<UserRecord, Error> {
        self.store
            .find(id)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Self::user_not_found(id))
    }
}

#[async_trait]
impl<S: UserStore> UsersCommand for DirectoryService<S> {
    async fn create_user(&self, draft: UserDraft) -> Result<UserRecord, Error> {
        self.store
            .create(draft)
            .await
            .map_err(Self::map_store_error)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<UserRecord, Error> {
        self.store
            .update(id, draft)
            .await
            .map_err(Self::map_store_error)
    }

    async fn delete_user(&self, id: UserId) -> Result<UserRecord, Error> {
        self.store
            .delete(id)
            .await
            .map_err(Self::map_store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    /// Store stub that fails every call with a canned error.
    struct FailingStore(UserStoreError);

    #[async_trait]
    impl UserStore for FailingStore {
        async fn list(&self) -> Result<Vec<UserRecord>, UserStoreError> {
            Err(self.0.clone())
        }

        async fn find(&self, _id: UserId) -> Result<Option<UserRecord>, UserStoreError> {
            Err(self.0.clone())
        }

        async fn create(&self, _draft: UserDraft) -> Result<UserRecord, UserStoreError> {
            Err(self.0.clone())
        }

        async fn update(
            &self,
            _id: UserId,
            _draft: UserDraft,
        ) -> Result<UserRecord, UserStoreError> {
            Err(self.0.clone())
        }

        async fn delete(&self, _id: UserId) -> Result<UserRecord, UserStoreError> {
            Err(self.0.clone())
        }
    }

    fn draft() -> UserDraft {
        UserDraft::try_from_parts("Ada", "ada@example.com", "0812345678", "Technology", true)
            .expect("valid draft")
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_conflict_with_field_details() {
        let service = DirectoryService::new(Arc::new(FailingStore(
            UserStoreError::DuplicateEmail {
                email: "ada@example.com".to_owned(),
            },
        )));

        let err = service.create_user(draft()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "Email already in use");
        let details = err.details().expect("conflict details");
        assert_eq!(details["field"], "email");
        assert_eq!(details["code"], "duplicate_email");
    }

    #[tokio::test]
    async fn missing_record_maps_to_not_found() {
        let service = DirectoryService::new(Arc::new(FailingStore(UserStoreError::NotFound {
            id: 42,
        })));

        let err = service.delete_user(UserId::new(42)).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.details().expect("details")["id"], 42);
    }

    #[tokio::test]
    async fn storage_failures_map_to_internal() {
        let service = DirectoryService::new(Arc::new(FailingStore(UserStoreError::Storage {
            message: "disk on fire".to_owned(),
        })));

        let err = service.list_users().await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
