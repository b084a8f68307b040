use crate::model::image_asset::{ImageAsset, ImageKind};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::{FindOneOptions, FindOptions};
use tracing::{error, info};

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn create(&self, image: ImageAsset) -> RepositoryResult<ImageAsset>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ImageAsset>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, kind: Option<ImageKind>) -> RepositoryResult<Vec<ImageAsset>>;
    /// Newest asset of a given kind, if any. Used to pick the watermark
    /// logo for rendered documents.
    async fn find_latest_by_kind(&self, kind: ImageKind) -> RepositoryResult<Option<ImageAsset>>;
}

pub struct MongoImageRepository {
    collection: mongodb::Collection<ImageAsset>,
}

impl MongoImageRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoImageRepository { collection: db.collection::<ImageAsset>("images") }
    }
}

#[async_trait]
impl ImageRepository for MongoImageRepository {
    #[tracing::instrument(skip(self, image), fields(kind = %image.kind.as_str()))]
    async fn create(&self, image: ImageAsset) -> RepositoryResult<ImageAsset> {
        info!("Registering image asset");
        let mut new_image = image;
        new_image.id = Some(ObjectId::new());
        new_image.created_at = Some(chrono::Utc::now().to_rfc3339());

        match self.collection.insert_one(new_image.clone(), None).await {
            Ok(_) => Ok(new_image),
            Err(e) => {
                error!("Failed to register image: {}", e);
                Err(RepositoryError::database(format!("Failed to register image: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ImageAsset> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(image)) => Ok(image),
            Ok(None) => Err(RepositoryError::not_found(format!("Image not found for ID: {}", id))),
            Err(e) => {
                error!("Failed to fetch image: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch image: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(delete_result) if delete_result.deleted_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!("No image found to delete for ID: {}", id))),
            Err(e) => {
                error!("Failed to delete image: {}", e);
                Err(RepositoryError::database(format!("Failed to delete image: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, kind: Option<ImageKind>) -> RepositoryResult<Vec<ImageAsset>> {
        let filter = kind.map(|k| doc! { "kind": k.as_str() });
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let mut cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list images: {}", e)))?;

        let mut images = Vec::new();
        while let Some(image) = cursor.next().await {
            match image {
                Ok(i) => images.push(i),
                Err(e) => {
                    error!("Failed to deserialize image: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize image: {}",
                        e
                    )));
                }
            }
        }
        Ok(images)
    }

    #[tracing::instrument(skip(self), fields(kind = %kind.as_str()))]
    async fn find_latest_by_kind(&self, kind: ImageKind) -> RepositoryResult<Option<ImageAsset>> {
        let filter = doc! { "kind": kind.as_str() };
        let options = FindOneOptions::builder().sort(doc! { "createdAt": -1 }).build();
        self.collection
            .find_one(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch latest image: {}", e)))
    }
}
