//! User directory REST handlers.
//!
//! ```text
//! GET    /users        list every record
//! GET    /users/{id}   fetch one record
//! POST   /users        create a record
//! PUT    /users/{id}   replace a record's fields
//! DELETE /users/{id}   remove a record
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, UserDraft, UserId, UserRecord, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Example JSON:
/// `{"name":"Ada","email":"ada@example.com","phone":"0812345678","department":"Technology"}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    /// Display name; must be non-empty.
    pub name: String,
    /// Email address; must be unique across the directory.
    pub email: String,
    /// Phone number: optional `+`, then 10 to 15 digits.
    pub phone: String,
    /// Department label; must be non-empty.
    pub department: String,
    /// Active flag, `true` when omitted.
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl TryFrom<UserForm> for UserDraft {
    type Error = UserValidationError;

    fn try_from(value: UserForm) -> Result<Self, Self::Error> {
        UserDraft::try_from_parts(
            &value.name,
            &value.email,
            &value.phone,
            &value.department,
            value.active,
        )
    }
}

fn map_user_validation_error(err: UserValidationError) -> Error {
    let (field, code) = match err {
        UserValidationError::EmptyName => ("name", "empty_name"),
        UserValidationError::InvalidEmail => ("email", "invalid_email"),
        UserValidationError::InvalidPhone => ("phone", "invalid_phone"),
        UserValidationError::EmptyDepartment => ("department", "empty_department"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": code,
    }))
}

/// Response body for `DELETE /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUser {
    /// Confirmation message.
    #[schema(example = "User deleted successfully")]
    pub message: String,
    /// The record as it was stored before deletion.
    pub user: UserRecord,
}

/// List every user record.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All user records", body = [UserRecord]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecord>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user record.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user record", body = UserRecord),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserRecord>> {
    let id = UserId::new(path.into_inner());
    let user = state.users_query.get_user(id).await?;
    Ok(web::Json(user))
}

/// Create a user record.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserForm,
    responses(
        (status = 201, description = "Created record", body = UserRecord),
        (status = 400, description = "Validation failed", body = Error),
        (status = 409, description = "Email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserForm>,
) -> ApiResult<HttpResponse> {
    let draft = UserDraft::try_from(payload.into_inner()).map_err(map_user_validation_error)?;
    let user = state.users_command.create_user(draft).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Replace a user record's fields.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserForm,
    responses(
        (status = 200, description = "Updated record", body = UserRecord),
        (status = 400, description = "Validation failed", body = Error),
        (status = 404, description = "No such user", body = Error),
        (status = 409, description = "Email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserForm>,
) -> ApiResult<web::Json<UserRecord>> {
    let id = UserId::new(path.into_inner());
    let draft = UserDraft::try_from(payload.into_inner()).map_err(map_user_validation_error)?;
    let user = state.users_command.update_user(id, draft).await?;
    Ok(web::Json(user))
}

/// Remove a user record.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deleted record", body = DeletedUser),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DeletedUser>> {
    let id = UserId::new(path.into_inner());
    let user = state.users_command.delete_user(id).await?;
    Ok(web::Json(DeletedUser {
        message: "User deleted successfully".to_owned(),
        user,
    }))
}
