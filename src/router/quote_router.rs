use axum::{middleware, routing::{get, post, put}, Router};
use std::sync::Arc;

use crate::handler::quote_handler::{
    create_quote_handler, get_quote_handler, list_quotes_handler, update_quote_handler,
};
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::quote_service::QuoteServiceImpl;

pub fn quote_router(service: Arc<QuoteServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    // The submission form is the one public write endpoint.
    let public = Router::new().route("/quotes", post(create_quote_handler));

    let admin = Router::new()
        .route("/quotes", get(list_quotes_handler))
        .route("/quotes/{id}", get(get_quote_handler))
        .route("/quotes/{id}", put(update_quote_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth));

    public.merge(admin).with_state(service)
}
