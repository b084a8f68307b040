use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::handler::document_handler::{proposal_pdf_handler, quote_pdf_handler};
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::document_service::DocumentServiceImpl;

pub fn document_router(service: Arc<DocumentServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    Router::new()
        .route("/quotes/{id}/pdf", get(quote_pdf_handler))
        .route("/proposals/{id}/pdf", get(proposal_pdf_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth))
        .with_state(service)
}
