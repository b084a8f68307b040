use crate::model::glass_type::GlassType;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

#[async_trait]
pub trait GlassTypeRepository: Send + Sync {
    async fn create(&self, glass_type: GlassType) -> RepositoryResult<GlassType>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<GlassType>>;
    async fn update(&self, id: ObjectId, glass_type: GlassType) -> RepositoryResult<GlassType>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<GlassType>>;
}

pub struct MongoGlassTypeRepository {
    collection: mongodb::Collection<GlassType>,
}

impl MongoGlassTypeRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoGlassTypeRepository { collection: db.collection::<GlassType>("glass_types") }
    }
}

#[async_trait]
impl GlassTypeRepository for MongoGlassTypeRepository {
    #[tracing::instrument(skip(self, glass_type), fields(name = %glass_type.name))]
    async fn create(&self, glass_type: GlassType) -> RepositoryResult<GlassType> {
        info!("Creating glass type");
        let mut new_type = glass_type;
        new_type.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        new_type.created_at = Some(now.clone());
        new_type.updated_at = Some(now);

        match self.collection.insert_one(new_type.clone(), None).await {
            Ok(_) => Ok(new_type),
            Err(e) => {
                error!("Failed to create glass type: {}", e);
                Err(RepositoryError::database(format!("Failed to create glass type: {}", e)))
            }
        }
    }

    /// Missing ids are an expected outcome here: quotes may reference a
    /// glass type that has since been deleted, which degrades the price
    /// term instead of failing the caller.
    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<GlassType>> {
        let filter = doc! { "_id": id };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch glass type: {}", e)))
    }

    #[tracing::instrument(skip(self, glass_type), fields(id = %id))]
    async fn update(&self, id: ObjectId, glass_type: GlassType) -> RepositoryResult<GlassType> {
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&glass_type).map_err(|e| {
            RepositoryError::serialization(format!("Failed to serialize glass type: {}", e))
        })?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let update = doc! { "$set": doc };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => Ok(glass_type),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No glass type found to update for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to update glass type: {}", e);
                Err(RepositoryError::database(format!("Failed to update glass type: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(delete_result) if delete_result.deleted_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No glass type found to delete for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to delete glass type: {}", e);
                Err(RepositoryError::database(format!("Failed to delete glass type: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<GlassType>> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let mut cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list glass types: {}", e)))?;

        let mut types = Vec::new();
        while let Some(glass_type) = cursor.next().await {
            match glass_type {
                Ok(t) => types.push(t),
                Err(e) => {
                    error!("Failed to deserialize glass type: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize glass type: {}",
                        e
                    )));
                }
            }
        }
        Ok(types)
    }
}
