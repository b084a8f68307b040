use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::model::site_text::SiteText;
use crate::repository::site_text_repo::{MongoSiteTextRepository, SiteTextRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait SiteTextService: Send + Sync {
    async fn upsert(&self, key: String, value: String) -> Result<SiteText, ServiceError>;
    async fn get(&self, key: &str) -> Result<SiteText, ServiceError>;
    async fn list(&self) -> Result<Vec<SiteText>, ServiceError>;
}

pub struct SiteTextServiceImpl {
    pub site_text_repo: Arc<MongoSiteTextRepository>,
}

impl SiteTextServiceImpl {
    pub fn new(site_text_repo: Arc<MongoSiteTextRepository>) -> Self {
        Self { site_text_repo }
    }
}

#[async_trait]
impl SiteTextService for SiteTextServiceImpl {
    #[instrument(skip(self, value), fields(key = %key))]
    async fn upsert(&self, key: String, value: String) -> Result<SiteText, ServiceError> {
        info!("Upserting site text");
        Ok(self.site_text_repo.upsert(&key, &value).await?)
    }

    async fn get(&self, key: &str) -> Result<SiteText, ServiceError> {
        self.site_text_repo
            .find_by_key(key)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No site text for key: {}", key)))
    }

    async fn list(&self) -> Result<Vec<SiteText>, ServiceError> {
        Ok(self.site_text_repo.list().await?)
    }
}
