use crate::model::service_item::ServiceItem;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: ServiceItem) -> RepositoryResult<ServiceItem>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<ServiceItem>>;
    async fn update(&self, id: ObjectId, service: ServiceItem) -> RepositoryResult<ServiceItem>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, only_active: bool) -> RepositoryResult<Vec<ServiceItem>>;
}

pub struct MongoServiceRepository {
    collection: mongodb::Collection<ServiceItem>,
}

impl MongoServiceRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoServiceRepository { collection: db.collection::<ServiceItem>("services") }
    }
}

#[async_trait]
impl ServiceRepository for MongoServiceRepository {
    #[tracing::instrument(skip(self, service), fields(title = %service.title))]
    async fn create(&self, service: ServiceItem) -> RepositoryResult<ServiceItem> {
        info!("Creating service");
        let mut new_service = service;
        new_service.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        new_service.created_at = Some(now.clone());
        new_service.updated_at = Some(now);

        match self.collection.insert_one(new_service.clone(), None).await {
            Ok(_) => Ok(new_service),
            Err(e) => {
                error!("Failed to create service: {}", e);
                Err(RepositoryError::database(format!("Failed to create service: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<ServiceItem>> {
        let filter = doc! { "_id": id };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch service: {}", e)))
    }

    #[tracing::instrument(skip(self, service), fields(id = %id))]
    async fn update(&self, id: ObjectId, service: ServiceItem) -> RepositoryResult<ServiceItem> {
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&service).map_err(|e| {
            RepositoryError::serialization(format!("Failed to serialize service: {}", e))
        })?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let update = doc! { "$set": doc };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => Ok(service),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No service found to update for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to update service: {}", e);
                Err(RepositoryError::database(format!("Failed to update service: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(delete_result) if delete_result.deleted_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No service found to delete for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to delete service: {}", e);
                Err(RepositoryError::database(format!("Failed to delete service: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(only_active = only_active))]
    async fn list(&self, only_active: bool) -> RepositoryResult<Vec<ServiceItem>> {
        let filter = if only_active { Some(doc! { "active": true }) } else { None };
        let options = FindOptions::builder().sort(doc! { "title": 1 }).build();
        let mut cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list services: {}", e)))?;

        let mut services = Vec::new();
        while let Some(service) = cursor.next().await {
            match service {
                Ok(s) => services.push(s),
                Err(e) => {
                    error!("Failed to deserialize service: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize service: {}",
                        e
                    )));
                }
            }
        }
        Ok(services)
    }
}
