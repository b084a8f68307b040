use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use validator::Validate;

use crate::dto::site_text_dto::UpsertSiteTextRequest;
use crate::service::site_text_service::{SiteTextService, SiteTextServiceImpl};
use crate::util::error::HandlerError;

pub async fn upsert_site_text_handler(
    State(service): State<Arc<SiteTextServiceImpl>>,
    Json(payload): Json<UpsertSiteTextRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let text = service.upsert(payload.key, payload.value).await?;
    Ok(Json(text))
}

pub async fn get_site_text_handler(
    State(service): State<Arc<SiteTextServiceImpl>>,
    Path((key,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let text = service.get(&key).await?;
    Ok(Json(text))
}

pub async fn list_site_texts_handler(
    State(service): State<Arc<SiteTextServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let texts = service.list().await?;
    Ok(Json(texts))
}
