use axum::{middleware, routing::{delete, get, post, put}, Router};
use std::sync::Arc;

use crate::handler::proposal_handler::{
    create_proposal_handler, delete_proposal_handler, get_proposal_handler,
    list_quote_proposals_handler, update_proposal_handler,
};
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::proposal_service::ProposalServiceImpl;

pub fn proposal_router(service: Arc<ProposalServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    Router::new()
        .route("/proposals", post(create_proposal_handler))
        .route("/proposals/{id}", get(get_proposal_handler))
        .route("/proposals/{id}", put(update_proposal_handler))
        .route("/proposals/{id}", delete(delete_proposal_handler))
        .route("/quotes/{id}/proposals", get(list_quote_proposals_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth))
        .with_state(service)
}
