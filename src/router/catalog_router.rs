use axum::{middleware, routing::{delete, get, post, put}, Router};
use std::sync::Arc;

use crate::handler::catalog_handler::{
    create_glass_type_handler, create_service_handler, delete_glass_type_handler,
    delete_service_handler, list_all_services_handler, list_glass_types_handler,
    list_public_services_handler, update_glass_type_handler, update_service_handler,
    upload_service_photo_handler,
};
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::catalog_service::CatalogServiceImpl;

pub fn catalog_router(service: Arc<CatalogServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    // Only active services are exposed to the site.
    let public = Router::new().route("/services", get(list_public_services_handler));

    let admin = Router::new()
        .route("/glass-types", post(create_glass_type_handler))
        .route("/glass-types", get(list_glass_types_handler))
        .route("/glass-types/{id}", put(update_glass_type_handler))
        .route("/glass-types/{id}", delete(delete_glass_type_handler))
        .route("/services", post(create_service_handler))
        .route("/services/all", get(list_all_services_handler))
        .route("/services/{id}", put(update_service_handler))
        .route("/services/{id}", delete(delete_service_handler))
        .route("/services/{id}/photo", post(upload_service_photo_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth));

    public.merge(admin).with_state(service)
}
