use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument, warn};

use crate::dto::quote_dto::{CreateQuoteRequest, QuoteListResponse, UpdateQuoteRequest};
use crate::model::quote::{Quote, QuoteStatus};
use crate::repository::quote_repo::{MongoQuoteRepository, QuoteRepository};
use crate::service::parse_object_id;
use crate::util::error::ServiceError;
use crate::util::money::parse_brl;

#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn submit_quote(&self, request: CreateQuoteRequest) -> Result<Quote, ServiceError>;
    async fn get_quote(&self, id: ObjectId) -> Result<Quote, ServiceError>;
    async fn update_quote(&self, id: ObjectId, request: UpdateQuoteRequest) -> Result<Quote, ServiceError>;
    async fn list_quotes(&self, page: u32, limit: u32) -> Result<QuoteListResponse, ServiceError>;
}

pub struct QuoteServiceImpl {
    pub quote_repo: Arc<MongoQuoteRepository>,
}

impl QuoteServiceImpl {
    pub fn new(quote_repo: Arc<MongoQuoteRepository>) -> Self {
        Self { quote_repo }
    }
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, request), fields(customer = %request.customer_name))]
    async fn submit_quote(&self, request: CreateQuoteRequest) -> Result<Quote, ServiceError> {
        info!("Public quote submission");
        let service_id = request
            .service_id
            .as_deref()
            .map(|raw| parse_object_id(raw, "service"))
            .transpose()?;
        let glass_type_id = request
            .glass_type_id
            .as_deref()
            .map(|raw| parse_object_id(raw, "glass type"))
            .transpose()?;

        let quote = Quote {
            id: None,
            customer_name: request.customer_name,
            email: request.email,
            phone: request.phone,
            service_id,
            glass_type_id,
            height_cm: request.height_cm,
            width_cm: request.width_cm,
            description: request.description,
            admin_note: None,
            scheduled_at: None,
            status: QuoteStatus::New,
            final_price_cents: None,
            created_at: None,
            updated_at: None,
        };
        let created = self.quote_repo.create(quote).await?;
        info!("Quote created");
        Ok(created)
    }

    async fn get_quote(&self, id: ObjectId) -> Result<Quote, ServiceError> {
        Ok(self.quote_repo.get_by_id(id).await?)
    }

    #[instrument(skip(self, request), fields(quote_id = %id))]
    async fn update_quote(&self, id: ObjectId, request: UpdateQuoteRequest) -> Result<Quote, ServiceError> {
        info!("Updating quote");
        let mut quote = self.quote_repo.get_by_id(id).await?;

        // A closed quote is read-only; the only edit still accepted is
        // moving it back out of Done.
        let reopening = matches!(request.status, Some(s) if s != QuoteStatus::Done);
        if quote.status == QuoteStatus::Done && !reopening {
            warn!("Rejected edit of a closed quote");
            return Err(ServiceError::InvalidInput(
                "Quote is marked done and can no longer be edited".to_string(),
            ));
        }

        if let Some(status) = request.status {
            quote.status = status;
        }
        if let Some(raw) = &request.service_id {
            quote.service_id = Some(parse_object_id(raw, "service")?);
        }
        if let Some(raw) = &request.glass_type_id {
            quote.glass_type_id = Some(parse_object_id(raw, "glass type")?);
        }
        if let Some(height) = request.height_cm {
            quote.height_cm = Some(height);
        }
        if let Some(width) = request.width_cm {
            quote.width_cm = Some(width);
        }
        if let Some(note) = request.admin_note {
            quote.admin_note = Some(note);
        }
        if let Some(scheduled_at) = request.scheduled_at {
            quote.scheduled_at = if scheduled_at.is_empty() { None } else { Some(scheduled_at) };
        }
        if let Some(raw) = &request.final_price {
            quote.final_price_cents = if raw.chars().any(|c| c.is_ascii_digit()) {
                Some(parse_brl(raw).map_err(|e| {
                    ServiceError::InvalidInput(format!("Invalid final price: {}", e))
                })?)
            } else {
                None
            };
        }

        let updated = self.quote_repo.update(id, quote).await?;
        info!("Quote updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn list_quotes(&self, page: u32, limit: u32) -> Result<QuoteListResponse, ServiceError> {
        let quotes = self.quote_repo.list(page, limit).await?;
        let total = self.quote_repo.count().await?;
        Ok(QuoteListResponse { quotes, total, page: page.max(1), limit })
    }
}
