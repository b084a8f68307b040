use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::warn;

use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::ServiceError;
use crate::util::jwt::{Claims, JwtTokenUtils, JwtTokenUtilsImpl};

pub struct AdminAuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
    pub user_service: Arc<UserServiceImpl>,
}

fn bearer_claims(state: &AdminAuthState, req: &Request<Body>) -> Result<Claims, StatusCode> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = state
        .jwt_utils
        .extract_token_from_header(auth_header)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    state
        .jwt_utils
        .validate_access_token(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)
}

/// Re-checks the account behind a validated token, so blocking or
/// deactivating a user takes effect before their token expires.
async fn ensure_account_usable(state: &AdminAuthState, claims: &Claims) -> Result<(), StatusCode> {
    if let Err(e) = state.user_service.verify_active(&claims.sub).await {
        warn!("Rejected token for unusable account {}: {}", claims.sub, e);
        return Err(match e {
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        });
    }
    Ok(())
}

/// Guards admin routes: Bearer token, admin role, live account.
pub async fn admin_auth(
    State(state): State<Arc<AdminAuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let claims = bearer_claims(&state, &req)?;
    if claims.role != "admin" {
        return Err(StatusCode::FORBIDDEN);
    }
    ensure_account_usable(&state, &claims).await?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Guards self-service routes: any live account with a valid token,
/// regardless of role.
pub async fn require_auth(
    State(state): State<Arc<AdminAuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let claims = bearer_claims(&state, &req)?;
    ensure_account_usable(&state, &claims).await?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
