//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, depending only on the
//! driving ports so they stay testable against stub implementations.

use std::sync::Arc;

use crate::domain::DirectoryService;
use crate::domain::ports::{UserStore, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the directory.
    pub users_query: Arc<dyn UsersQuery>,
    /// Write side of the directory.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(users_query: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users_query,
            users_command,
        }
    }

    /// Wire both ports to a [`DirectoryService`] over the given store.
    pub fn with_store<S: UserStore + 'static>(store: Arc<S>) -> Self {
        let service = Arc::new(DirectoryService::new(store));
        Self {
            users_query: service.clone(),
            users_command: service,
        }
    }
}
