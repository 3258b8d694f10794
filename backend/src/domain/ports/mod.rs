//! Port abstractions between the domain and its adapters.

mod directory;
mod user_store;

pub use directory::{UsersCommand, UsersQuery};
pub use user_store::{UserStore, UserStoreError};
