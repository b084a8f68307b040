use axum::{middleware, routing::{post, put}, Router};
use std::sync::Arc;

use crate::handler::user_handler::{
    change_password_handler, create_user_handler, list_users_handler, login_handler,
    refresh_token_handler, update_user_flags_handler,
};
use crate::middlewares::admin_middleware::{admin_auth, require_auth, AdminAuthState};
use crate::service::user_service::UserServiceImpl;

pub fn user_router(service: Arc<UserServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    let public = Router::new()
        .route("/users/login", post(login_handler))
        .route("/users/refresh-token", post(refresh_token_handler));

    // Password change is self-service: any live authenticated account.
    let authenticated = Router::new()
        .route("/users/password", put(change_password_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), require_auth));

    let admin = Router::new()
        .route("/users", post(create_user_handler).get(list_users_handler))
        .route("/users/{id}/flags", put(update_user_flags_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth));

    public.merge(authenticated).merge(admin).with_state(service)
}
