use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{error, info, instrument, warn};

use crate::config::AssetsConfig;
use crate::model::image_asset::ImageKind;
use crate::model::quote::Quote;
use crate::pdf::{render, DocumentData};
use crate::repository::glass_type_repo::{GlassTypeRepository, MongoGlassTypeRepository};
use crate::repository::image_repo::{ImageRepository, MongoImageRepository};
use crate::repository::proposal_repo::{MongoProposalRepository, ProposalRepository};
use crate::repository::quote_repo::{MongoQuoteRepository, QuoteRepository};
use crate::repository::service_repo::{MongoServiceRepository, ServiceRepository};
use crate::util::error::ServiceError;

const QUOTE_TITLE: &str = "Orçamento - Vidraçaria";
const PROPOSAL_TITLE: &str = "Proposta de Orçamento - Vidraçaria";

/// Finished document ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// On-demand PDF generation. Documents are rendered from current data on
/// every request and never stored.
#[async_trait]
pub trait DocumentService: Send + Sync {
    async fn render_quote_pdf(&self, quote_id: ObjectId) -> Result<RenderedDocument, ServiceError>;
    async fn render_proposal_pdf(&self, proposal_id: ObjectId) -> Result<RenderedDocument, ServiceError>;
}

pub struct DocumentServiceImpl {
    pub quote_repo: Arc<MongoQuoteRepository>,
    pub proposal_repo: Arc<MongoProposalRepository>,
    pub service_repo: Arc<MongoServiceRepository>,
    pub glass_type_repo: Arc<MongoGlassTypeRepository>,
    pub image_repo: Arc<MongoImageRepository>,
    pub assets: AssetsConfig,
}

impl DocumentServiceImpl {
    pub fn new(
        quote_repo: Arc<MongoQuoteRepository>,
        proposal_repo: Arc<MongoProposalRepository>,
        service_repo: Arc<MongoServiceRepository>,
        glass_type_repo: Arc<MongoGlassTypeRepository>,
        image_repo: Arc<MongoImageRepository>,
        assets: AssetsConfig,
    ) -> Self {
        Self { quote_repo, proposal_repo, service_repo, glass_type_repo, image_repo, assets }
    }

    /// Reads an asset file, degrading to `None` with a warning when it
    /// is missing or unreadable.
    async fn read_asset(&self, file_name: &str) -> Option<Vec<u8>> {
        match tokio::fs::read(self.assets.path_for(file_name)).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("Asset {} unavailable, rendering without it: {}", file_name, e);
                None
            }
        }
    }

    async fn load_watermark(&self) -> Option<Vec<u8>> {
        let asset = match self.image_repo.find_latest_by_kind(ImageKind::HeaderLogo).await {
            Ok(asset) => asset?,
            Err(e) => {
                warn!("Watermark lookup failed, rendering without it: {}", e);
                return None;
            }
        };
        self.read_asset(&asset.file_path).await
    }

    /// Resolves catalog references and assets for a document sharing the
    /// quote's customer identity. Missing references degrade to `None`.
    async fn resolve(
        &self,
        title: &str,
        quote: &Quote,
        service_id: Option<ObjectId>,
        glass_type_id: Option<ObjectId>,
        height_cm: Option<f64>,
        width_cm: Option<f64>,
        description: Option<String>,
        admin_note: Option<String>,
        price_cents: Option<i64>,
    ) -> Result<DocumentData, ServiceError> {
        let service = match service_id {
            Some(id) => self.service_repo.find_by_id(id).await?,
            None => None,
        };
        let glass_type = match glass_type_id {
            Some(id) => self.glass_type_repo.find_by_id(id).await?,
            None => None,
        };

        let photo = match service.as_ref().and_then(|s| s.photo_path.clone()) {
            Some(path) => self.read_asset(&path).await,
            None => None,
        };
        let watermark = self.load_watermark().await;

        Ok(DocumentData {
            title: title.to_string(),
            customer_name: quote.customer_name.clone(),
            email: quote.email.clone(),
            phone: quote.phone.clone(),
            service_name: service.map(|s| s.title),
            glass_type_name: glass_type.as_ref().map(|g| g.name.clone()),
            height_cm,
            width_cm,
            description,
            admin_note,
            scheduled_at: quote.scheduled_at.clone(),
            final_price_cents: price_cents,
            glass_price_per_m2_cents: glass_type.map(|g| g.price_per_m2_cents),
            photo,
            watermark,
        })
    }

    fn finish(file_name: String, data: &DocumentData) -> Result<RenderedDocument, ServiceError> {
        let bytes = render(data).map_err(|e| {
            error!("Document render failed: {}", e);
            ServiceError::InternalError(format!("Document render failed: {}", e))
        })?;
        Ok(RenderedDocument { file_name, bytes })
    }
}

#[async_trait]
impl DocumentService for DocumentServiceImpl {
    #[instrument(skip(self), fields(quote_id = %quote_id))]
    async fn render_quote_pdf(&self, quote_id: ObjectId) -> Result<RenderedDocument, ServiceError> {
        info!("Rendering quote PDF");
        let quote = self.quote_repo.get_by_id(quote_id).await?;
        let data = self
            .resolve(
                QUOTE_TITLE,
                &quote,
                quote.service_id,
                quote.glass_type_id,
                quote.height_cm,
                quote.width_cm,
                quote.description.clone(),
                quote.admin_note.clone(),
                quote.final_price_cents,
            )
            .await?;
        Self::finish(format!("quote_{}.pdf", quote_id.to_hex()), &data)
    }

    #[instrument(skip(self), fields(proposal_id = %proposal_id))]
    async fn render_proposal_pdf(&self, proposal_id: ObjectId) -> Result<RenderedDocument, ServiceError> {
        info!("Rendering proposal PDF");
        let proposal = self.proposal_repo.get_by_id(proposal_id).await?;
        let quote = self.quote_repo.get_by_id(proposal.quote_id).await?;
        let data = self
            .resolve(
                PROPOSAL_TITLE,
                &quote,
                proposal.service_id,
                proposal.glass_type_id,
                proposal.height_cm,
                proposal.width_cm,
                proposal.description.clone(),
                proposal.admin_note.clone(),
                proposal.price_cents,
            )
            .await?;
        Self::finish(format!("proposal_{}.pdf", proposal_id.to_hex()), &data)
    }
}
