use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::user_dto::{
    ChangePasswordRequest, CreateUserRequest, LoginRequest, RefreshTokenRequest, UpdateUserFlagsRequest,
};
use crate::handler::parse_path_id;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn login_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let response = service.login(payload.email, payload.password).await?;
    Ok(Json(response))
}

pub async fn refresh_token_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let tokens = service.refresh_token(payload.refresh_token).await?;
    Ok(Json(tokens))
}

pub async fn create_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_user(payload.name, payload.email).await?;
    Ok(Json(created))
}

pub async fn list_users_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

pub async fn update_user_flags_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateUserFlagsRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "user")?;
    let updated = service.update_flags(id, payload.active, payload.blocked).await?;
    Ok(Json(updated))
}

/// Changes the caller's own password; the subject comes from the token
/// claims the auth middleware attached, never from the body.
pub async fn change_password_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    service
        .change_password(&claims.sub, payload.current_password, payload.new_password)
        .await?;
    Ok(Json(serde_json::json!({ "message": "Password changed" })))
}
