use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use validator::Validate;

use crate::dto::proposal_dto::{CreateProposalRequest, UpdateProposalRequest};
use crate::handler::parse_path_id;
use crate::service::proposal_service::{ProposalService, ProposalServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_proposal_handler(
    State(service): State<Arc<ProposalServiceImpl>>,
    Json(payload): Json<CreateProposalRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_proposal(payload).await?;
    Ok(Json(created))
}

pub async fn get_proposal_handler(
    State(service): State<Arc<ProposalServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "proposal")?;
    let proposal = service.get_proposal(id).await?;
    Ok(Json(proposal))
}

pub async fn update_proposal_handler(
    State(service): State<Arc<ProposalServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateProposalRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "proposal")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let updated = service.update_proposal(id, payload).await?;
    Ok(Json(updated))
}

pub async fn delete_proposal_handler(
    State(service): State<Arc<ProposalServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_path_id(&id, "proposal")?;
    service.delete_proposal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_quote_proposals_handler(
    State(service): State<Arc<ProposalServiceImpl>>,
    Path((quote_id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let quote_id = parse_path_id(&quote_id, "quote")?;
    let proposals = service.list_for_quote(quote_id).await?;
    Ok(Json(proposals))
}
