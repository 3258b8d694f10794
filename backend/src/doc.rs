//! OpenAPI documentation for the REST API.
//!
//! Served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, UserRecord};
use crate::inbound::http::users::{DeletedUser, UserForm};

/// OpenAPI document for the user directory API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "CRUD interface over the user directory plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserRecord, UserForm, DeletedUser, Error, ErrorCode)),
    tags(
        (name = "users", description = "User directory records"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;
