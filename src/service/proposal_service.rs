use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::proposal_dto::{CreateProposalRequest, UpdateProposalRequest};
use crate::model::proposal::Proposal;
use crate::repository::proposal_repo::{MongoProposalRepository, ProposalRepository};
use crate::repository::quote_repo::{MongoQuoteRepository, QuoteRepository};
use crate::service::parse_object_id;
use crate::util::error::ServiceError;
use crate::util::money::parse_brl;

#[async_trait]
pub trait ProposalService: Send + Sync {
    async fn create_proposal(&self, request: CreateProposalRequest) -> Result<Proposal, ServiceError>;
    async fn get_proposal(&self, id: ObjectId) -> Result<Proposal, ServiceError>;
    async fn update_proposal(&self, id: ObjectId, request: UpdateProposalRequest) -> Result<Proposal, ServiceError>;
    async fn delete_proposal(&self, id: ObjectId) -> Result<(), ServiceError>;
    /// Newest first.
    async fn list_for_quote(&self, quote_id: ObjectId) -> Result<Vec<Proposal>, ServiceError>;
}

pub struct ProposalServiceImpl {
    pub proposal_repo: Arc<MongoProposalRepository>,
    pub quote_repo: Arc<MongoQuoteRepository>,
}

impl ProposalServiceImpl {
    pub fn new(proposal_repo: Arc<MongoProposalRepository>, quote_repo: Arc<MongoQuoteRepository>) -> Self {
        Self { proposal_repo, quote_repo }
    }
}

fn parse_price(raw: &str) -> Result<Option<i64>, ServiceError> {
    if raw.chars().any(|c| c.is_ascii_digit()) {
        parse_brl(raw)
            .map(Some)
            .map_err(|e| ServiceError::InvalidInput(format!("Invalid price: {}", e)))
    } else {
        Ok(None)
    }
}

#[async_trait]
impl ProposalService for ProposalServiceImpl {
    #[instrument(skip(self, request), fields(quote_id = %request.quote_id))]
    async fn create_proposal(&self, request: CreateProposalRequest) -> Result<Proposal, ServiceError> {
        info!("Creating proposal");
        let quote_id = parse_object_id(&request.quote_id, "quote")?;
        // Snapshot the quote: absent request fields inherit its values.
        let quote = self.quote_repo.get_by_id(quote_id).await?;

        let service_id = match &request.service_id {
            Some(raw) => Some(parse_object_id(raw, "service")?),
            None => quote.service_id,
        };
        let glass_type_id = match &request.glass_type_id {
            Some(raw) => Some(parse_object_id(raw, "glass type")?),
            None => quote.glass_type_id,
        };
        let price_cents = match &request.price {
            Some(raw) => parse_price(raw)?,
            None => quote.final_price_cents,
        };

        let proposal = Proposal {
            id: None,
            quote_id,
            service_id,
            glass_type_id,
            height_cm: request.height_cm.or(quote.height_cm),
            width_cm: request.width_cm.or(quote.width_cm),
            description: request.description.or(quote.description),
            admin_note: request.admin_note,
            price_cents,
            created_at: None,
            updated_at: None,
        };
        let created = self.proposal_repo.create(proposal).await?;
        info!("Proposal created");
        Ok(created)
    }

    async fn get_proposal(&self, id: ObjectId) -> Result<Proposal, ServiceError> {
        Ok(self.proposal_repo.get_by_id(id).await?)
    }

    #[instrument(skip(self, request), fields(proposal_id = %id))]
    async fn update_proposal(
        &self,
        id: ObjectId,
        request: UpdateProposalRequest,
    ) -> Result<Proposal, ServiceError> {
        info!("Updating proposal");
        let mut proposal = self.proposal_repo.get_by_id(id).await?;

        if let Some(raw) = &request.service_id {
            proposal.service_id = Some(parse_object_id(raw, "service")?);
        }
        if let Some(raw) = &request.glass_type_id {
            proposal.glass_type_id = Some(parse_object_id(raw, "glass type")?);
        }
        if let Some(height) = request.height_cm {
            proposal.height_cm = Some(height);
        }
        if let Some(width) = request.width_cm {
            proposal.width_cm = Some(width);
        }
        if let Some(description) = request.description {
            proposal.description = Some(description);
        }
        if let Some(note) = request.admin_note {
            proposal.admin_note = Some(note);
        }
        if let Some(raw) = &request.price {
            proposal.price_cents = parse_price(raw)?;
        }

        let updated = self.proposal_repo.update(id, proposal).await?;
        info!("Proposal updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(proposal_id = %id))]
    async fn delete_proposal(&self, id: ObjectId) -> Result<(), ServiceError> {
        info!("Deleting proposal");
        Ok(self.proposal_repo.delete(id).await?)
    }

    async fn list_for_quote(&self, quote_id: ObjectId) -> Result<Vec<Proposal>, ServiceError> {
        Ok(self.proposal_repo.list_by_quote(quote_id).await?)
    }
}
