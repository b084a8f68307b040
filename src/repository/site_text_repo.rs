use crate::model::site_text::SiteText;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::doc;
use futures::stream::StreamExt;
use mongodb::options::{FindOptions, UpdateOptions};
use tracing::{error, info};

#[async_trait]
pub trait SiteTextRepository: Send + Sync {
    /// Inserts or replaces the entry for a key.
    async fn upsert(&self, key: &str, value: &str) -> RepositoryResult<SiteText>;
    async fn find_by_key(&self, key: &str) -> RepositoryResult<Option<SiteText>>;
    async fn list(&self) -> RepositoryResult<Vec<SiteText>>;
}

pub struct MongoSiteTextRepository {
    collection: mongodb::Collection<SiteText>,
}

impl MongoSiteTextRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoSiteTextRepository { collection: db.collection::<SiteText>("site_texts") }
    }
}

#[async_trait]
impl SiteTextRepository for MongoSiteTextRepository {
    #[tracing::instrument(skip(self, value), fields(key = %key))]
    async fn upsert(&self, key: &str, value: &str) -> RepositoryResult<SiteText> {
        info!("Upserting site text");
        let now = chrono::Utc::now().to_rfc3339();
        let filter = doc! { "key": key };
        let update = doc! { "$set": { "key": key, "value": value, "updatedAt": &now } };
        let options = UpdateOptions::builder().upsert(true).build();

        match self.collection.update_one(filter.clone(), update, options).await {
            Ok(_) => match self.collection.find_one(filter, None).await {
                Ok(Some(text)) => Ok(text),
                Ok(None) => Err(RepositoryError::database(
                    "Upserted site text disappeared before read-back".to_string(),
                )),
                Err(e) => Err(RepositoryError::database(format!("Failed to read site text: {}", e))),
            },
            Err(e) => {
                error!("Failed to upsert site text: {}", e);
                Err(RepositoryError::database(format!("Failed to upsert site text: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(key = %key))]
    async fn find_by_key(&self, key: &str) -> RepositoryResult<Option<SiteText>> {
        let filter = doc! { "key": key };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch site text: {}", e)))
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<SiteText>> {
        let options = FindOptions::builder().sort(doc! { "key": 1 }).build();
        let mut cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list site texts: {}", e)))?;

        let mut texts = Vec::new();
        while let Some(text) = cursor.next().await {
            match text {
                Ok(t) => texts.push(t),
                Err(e) => {
                    error!("Failed to deserialize site text: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize site text: {}",
                        e
                    )));
                }
            }
        }
        Ok(texts)
    }
}
