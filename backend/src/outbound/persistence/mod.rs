//! Record store adapters.

mod in_memory_user_store;

pub use in_memory_user_store::InMemoryUserStore;
