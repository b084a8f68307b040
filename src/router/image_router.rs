use axum::{middleware, routing::{delete, get, post}, Router};
use std::sync::Arc;

use crate::handler::image_handler::{delete_image_handler, list_images_handler, upload_image_handler};
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::image_service::ImageServiceImpl;

pub fn image_router(service: Arc<ImageServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    // The site gallery reads the image list anonymously.
    let public = Router::new().route("/images", get(list_images_handler));

    let admin = Router::new()
        .route("/images", post(upload_image_handler))
        .route("/images/{id}", delete(delete_image_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state.clone(), admin_auth));

    public.merge(admin).with_state(service)
}
