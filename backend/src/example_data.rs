//! Deterministic example records for demos and tests.

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::UserDraft;

/// How many records [`seed_users`] inserts.
pub const SEED_COUNT: usize = 20;

/// One deterministic seed draft; `index` runs from 1 to [`SEED_COUNT`].
///
/// Even indices land in Technology, odd ones in HR, and every third record
/// is inactive so the status filter has something to bite on.
pub fn seed_draft(index: usize) -> Result<UserDraft, UserStoreError> {
    UserDraft::try_from_parts(
        &format!("User {index}"),
        &format!("user{index}@example.com"),
        &format!("0812345678{index:02}"),
        if index % 2 == 0 { "Technology" } else { "HR" },
        index % 3 != 0,
    )
    .map_err(|err| UserStoreError::Storage {
        message: format!("invalid seed record {index}: {err}"),
    })
}

/// Populate a store with [`SEED_COUNT`] example users.
pub async fn seed_users<S: UserStore>(store: &S) -> Result<(), UserStoreError> {
    for index in 1..=SEED_COUNT {
        store.create(seed_draft(index)?).await?;
    }
    Ok(())
}
