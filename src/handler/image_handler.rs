use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::handler::{parse_path_id, read_file_field};
use crate::model::image_asset::ImageKind;
use crate::service::image_service::{ImageService, ImageServiceImpl};
use crate::util::error::HandlerError;

fn parse_kind(raw: &str) -> Result<ImageKind, HandlerError> {
    match raw {
        "gallery" => Ok(ImageKind::Gallery),
        "header_logo" => Ok(ImageKind::HeaderLogo),
        "hero" => Ok(ImageKind::Hero),
        other => Err(HandlerError::bad_request(format!("Unknown image kind: {}", other))),
    }
}

/// Multipart upload: a `kind` field, an optional `description` field and
/// one `file` field.
pub async fn upload_image_handler(
    State(service): State<Arc<ImageServiceImpl>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let mut kind = None;
    let mut description = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HandlerError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        match field.name() {
            Some("kind") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| HandlerError::bad_request(format!("Failed to read kind field: {}", e)))?;
                kind = Some(parse_kind(raw.trim())?);
            }
            Some("description") => {
                let raw = field.text().await.map_err(|e| {
                    HandlerError::bad_request(format!("Failed to read description field: {}", e))
                })?;
                if !raw.is_empty() {
                    description = Some(raw);
                }
            }
            Some("file") => {
                file = Some(read_file_field(field).await?);
            }
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| HandlerError::bad_request("Missing kind field"))?;
    let file = file.ok_or_else(|| HandlerError::bad_request("Missing file field"))?;

    let created = service.upload(kind, description, file).await?;
    Ok(Json(created))
}

pub async fn list_images_handler(
    State(service): State<Arc<ImageServiceImpl>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let kind = params.get("kind").map(|raw| parse_kind(raw)).transpose()?;
    let images = service.list(kind).await?;
    Ok(Json(images))
}

pub async fn delete_image_handler(
    State(service): State<Arc<ImageServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "image")?;
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
