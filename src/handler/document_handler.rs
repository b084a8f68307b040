use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::handler::parse_path_id;
use crate::service::document_service::{DocumentService, DocumentServiceImpl, RenderedDocument};
use crate::util::error::HandlerError;

fn pdf_response(document: RenderedDocument) -> impl IntoResponse {
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.file_name),
        ),
    ];
    (headers, document.bytes)
}

pub async fn quote_pdf_handler(
    State(service): State<Arc<DocumentServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "quote")?;
    let document = service.render_quote_pdf(id).await?;
    Ok(pdf_response(document))
}

pub async fn proposal_pdf_handler(
    State(service): State<Arc<DocumentServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "proposal")?;
    let document = service.render_proposal_pdf(id).await?;
    Ok(pdf_response(document))
}
