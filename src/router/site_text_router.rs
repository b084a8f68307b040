use axum::{middleware, routing::{get, put}, Router};
use std::sync::Arc;

use crate::handler::site_text_handler::{
    get_site_text_handler, list_site_texts_handler, upsert_site_text_handler,
};
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::site_text_service::SiteTextServiceImpl;

pub fn site_text_router(service: Arc<SiteTextServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    let public = Router::new()
        .route("/site-texts", get(list_site_texts_handler))
        .route("/site-texts/{key}", get(get_site_text_handler));

    let admin = Router::new()
        .route("/site-texts", put(upsert_site_text_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth));

    public.merge(admin).with_state(service)
}
