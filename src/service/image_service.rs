use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument, warn};

use crate::config::AssetsConfig;
use crate::dto::image_dto::UploadedFile;
use crate::model::image_asset::{ImageAsset, ImageKind};
use crate::repository::image_repo::{ImageRepository, MongoImageRepository};
use crate::service::catalog_service::unique_file_name;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ImageService: Send + Sync {
    async fn upload(
        &self,
        kind: ImageKind,
        description: Option<String>,
        file: UploadedFile,
    ) -> Result<ImageAsset, ServiceError>;
    async fn list(&self, kind: Option<ImageKind>) -> Result<Vec<ImageAsset>, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct ImageServiceImpl {
    pub image_repo: Arc<MongoImageRepository>,
    pub assets: AssetsConfig,
}

impl ImageServiceImpl {
    pub fn new(image_repo: Arc<MongoImageRepository>, assets: AssetsConfig) -> Self {
        Self { image_repo, assets }
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    #[instrument(skip(self, file), fields(kind = %kind.as_str(), filename = %file.filename))]
    async fn upload(
        &self,
        kind: ImageKind,
        description: Option<String>,
        file: UploadedFile,
    ) -> Result<ImageAsset, ServiceError> {
        info!("Uploading image ({} bytes)", file.size);
        if !file.content_type.starts_with("image/") {
            return Err(ServiceError::InvalidInput(format!(
                "Unsupported content type: {}",
                file.content_type
            )));
        }
        if file.content.is_empty() {
            return Err(ServiceError::InvalidInput("Empty file upload".to_string()));
        }

        let file_name = unique_file_name(&file.filename);
        tokio::fs::write(self.assets.path_for(&file_name), &file.content)
            .await
            .map_err(|e| ServiceError::InternalError(format!("Failed to store image: {}", e)))?;

        let image = ImageAsset {
            id: None,
            kind,
            description,
            file_path: file_name,
            content_type: file.content_type,
            created_at: None,
        };
        let created = self.image_repo.create(image).await?;
        info!("Image stored");
        Ok(created)
    }

    async fn list(&self, kind: Option<ImageKind>) -> Result<Vec<ImageAsset>, ServiceError> {
        Ok(self.image_repo.list(kind).await?)
    }

    #[instrument(skip(self), fields(image_id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError> {
        info!("Deleting image");
        let image = self.image_repo.get_by_id(id).await?;
        self.image_repo.delete(id).await?;
        // The record is gone; a stray file is only worth a warning.
        if let Err(e) = tokio::fs::remove_file(self.assets.path_for(&image.file_path)).await {
            warn!("Failed to remove image file {}: {}", image.file_path, e);
        }
        Ok(())
    }
}
