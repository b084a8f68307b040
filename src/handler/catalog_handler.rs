use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use validator::Validate;

use crate::dto::catalog_dto::{
    CreateGlassTypeRequest, CreateServiceRequest, UpdateGlassTypeRequest, UpdateServiceRequest,
};
use crate::handler::{parse_path_id, read_file_field};
use crate::service::catalog_service::{CatalogService, CatalogServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_glass_type_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<CreateGlassTypeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_glass_type(payload).await?;
    Ok(Json(created))
}

pub async fn update_glass_type_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateGlassTypeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "glass type")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let updated = service.update_glass_type(id, payload).await?;
    Ok(Json(updated))
}

pub async fn delete_glass_type_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "glass type")?;
    service.delete_glass_type(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_glass_types_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let glass_types = service.list_glass_types().await?;
    Ok(Json(glass_types))
}

pub async fn create_service_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_service(payload).await?;
    Ok(Json(created))
}

pub async fn update_service_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "service")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let updated = service.update_service(id, payload).await?;
    Ok(Json(updated))
}

pub async fn delete_service_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "service")?;
    service.delete_service(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Public catalog: only active services are shown on the site.
pub async fn list_public_services_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let services = service.list_services(true).await?;
    Ok(Json(services))
}

pub async fn list_all_services_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let services = service.list_services(false).await?;
    Ok(Json(services))
}

/// Multipart upload of a service reference photo (single `file` field).
pub async fn upload_service_photo_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path((id,)): Path<(String,)>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "service")?;

    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HandlerError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() == Some("file") {
            file = Some(read_file_field(field).await?);
        }
    }
    let file = file.ok_or_else(|| HandlerError::bad_request("Missing file field"))?;

    let updated = service.set_service_photo(id, file).await?;
    Ok(Json(updated))
}
