//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;

use actix_web::web;

pub use error::ApiResult;
pub use state::HttpState;

/// Register the user endpoints and their shared state on an app.
///
/// Health probes and the OpenAPI UI are wired separately by the binary;
/// this is the part integration tests need.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::App;
/// use backend::inbound::http::{self, HttpState};
/// use backend::outbound::persistence::InMemoryUserStore;
///
/// let state = HttpState::with_store(Arc::new(InMemoryUserStore::new()));
/// let app = App::new().configure(|cfg| http::configure(cfg, state));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig, state: HttpState) {
    cfg.app_data(web::Data::new(state))
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user);
}
