use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::AssetsConfig;
use crate::dto::catalog_dto::{
    CreateGlassTypeRequest, CreateServiceRequest, UpdateGlassTypeRequest, UpdateServiceRequest,
};
use crate::dto::image_dto::UploadedFile;
use crate::model::glass_type::GlassType;
use crate::model::service_item::ServiceItem;
use crate::repository::glass_type_repo::{GlassTypeRepository, MongoGlassTypeRepository};
use crate::repository::service_repo::{MongoServiceRepository, ServiceRepository};
use crate::util::error::ServiceError;
use crate::util::money::parse_brl;

/// Glass types and installable services, the two priced/offered catalogs
/// behind the public site and the quote documents.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn create_glass_type(&self, request: CreateGlassTypeRequest) -> Result<GlassType, ServiceError>;
    async fn update_glass_type(&self, id: ObjectId, request: UpdateGlassTypeRequest) -> Result<GlassType, ServiceError>;
    async fn delete_glass_type(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn list_glass_types(&self) -> Result<Vec<GlassType>, ServiceError>;

    async fn create_service(&self, request: CreateServiceRequest) -> Result<ServiceItem, ServiceError>;
    async fn update_service(&self, id: ObjectId, request: UpdateServiceRequest) -> Result<ServiceItem, ServiceError>;
    async fn delete_service(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn list_services(&self, only_active: bool) -> Result<Vec<ServiceItem>, ServiceError>;
    async fn set_service_photo(&self, id: ObjectId, file: UploadedFile) -> Result<ServiceItem, ServiceError>;
}

pub struct CatalogServiceImpl {
    pub glass_type_repo: Arc<MongoGlassTypeRepository>,
    pub service_repo: Arc<MongoServiceRepository>,
    pub assets: AssetsConfig,
}

impl CatalogServiceImpl {
    pub fn new(
        glass_type_repo: Arc<MongoGlassTypeRepository>,
        service_repo: Arc<MongoServiceRepository>,
        assets: AssetsConfig,
    ) -> Self {
        Self { glass_type_repo, service_repo, assets }
    }
}

fn parse_price_per_m2(raw: &str) -> Result<i64, ServiceError> {
    parse_brl(raw).map_err(|e| ServiceError::InvalidInput(format!("Invalid price per m²: {}", e)))
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_glass_type(&self, request: CreateGlassTypeRequest) -> Result<GlassType, ServiceError> {
        info!("Creating glass type");
        let glass_type = GlassType {
            id: None,
            name: request.name,
            description: request.description,
            price_per_m2_cents: parse_price_per_m2(&request.price_per_m2)?,
            created_at: None,
            updated_at: None,
        };
        Ok(self.glass_type_repo.create(glass_type).await?)
    }

    #[instrument(skip(self, request), fields(glass_type_id = %id))]
    async fn update_glass_type(
        &self,
        id: ObjectId,
        request: UpdateGlassTypeRequest,
    ) -> Result<GlassType, ServiceError> {
        info!("Updating glass type");
        let mut glass_type = self
            .glass_type_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Glass type not found".to_string()))?;
        if let Some(name) = request.name {
            glass_type.name = name;
        }
        if let Some(description) = request.description {
            glass_type.description = Some(description);
        }
        if let Some(raw) = &request.price_per_m2 {
            glass_type.price_per_m2_cents = parse_price_per_m2(raw)?;
        }
        Ok(self.glass_type_repo.update(id, glass_type).await?)
    }

    #[instrument(skip(self), fields(glass_type_id = %id))]
    async fn delete_glass_type(&self, id: ObjectId) -> Result<(), ServiceError> {
        info!("Deleting glass type");
        Ok(self.glass_type_repo.delete(id).await?)
    }

    async fn list_glass_types(&self) -> Result<Vec<GlassType>, ServiceError> {
        Ok(self.glass_type_repo.list().await?)
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_service(&self, request: CreateServiceRequest) -> Result<ServiceItem, ServiceError> {
        info!("Creating service");
        let service = ServiceItem {
            id: None,
            title: request.title,
            description: request.description,
            icon: request.icon,
            active: request.active,
            photo_path: None,
            created_at: None,
            updated_at: None,
        };
        Ok(self.service_repo.create(service).await?)
    }

    #[instrument(skip(self, request), fields(service_id = %id))]
    async fn update_service(
        &self,
        id: ObjectId,
        request: UpdateServiceRequest,
    ) -> Result<ServiceItem, ServiceError> {
        info!("Updating service");
        let mut service = self
            .service_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Service not found".to_string()))?;
        if let Some(title) = request.title {
            service.title = title;
        }
        if let Some(description) = request.description {
            service.description = Some(description);
        }
        if let Some(icon) = request.icon {
            service.icon = icon;
        }
        if let Some(active) = request.active {
            service.active = active;
        }
        Ok(self.service_repo.update(id, service).await?)
    }

    #[instrument(skip(self), fields(service_id = %id))]
    async fn delete_service(&self, id: ObjectId) -> Result<(), ServiceError> {
        info!("Deleting service");
        let service = self
            .service_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Service not found".to_string()))?;
        self.service_repo.delete(id).await?;
        if let Some(photo) = &service.photo_path {
            if let Err(e) = tokio::fs::remove_file(self.assets.path_for(photo)).await {
                warn!("Failed to remove service photo {}: {}", photo, e);
            }
        }
        Ok(())
    }

    async fn list_services(&self, only_active: bool) -> Result<Vec<ServiceItem>, ServiceError> {
        Ok(self.service_repo.list(only_active).await?)
    }

    #[instrument(skip(self, file), fields(service_id = %id, filename = %file.filename))]
    async fn set_service_photo(&self, id: ObjectId, file: UploadedFile) -> Result<ServiceItem, ServiceError> {
        info!("Attaching service photo ({} bytes)", file.size);
        if !file.content_type.starts_with("image/") {
            return Err(ServiceError::InvalidInput(format!(
                "Unsupported content type: {}",
                file.content_type
            )));
        }
        let mut service = self
            .service_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Service not found".to_string()))?;

        let file_name = unique_file_name(&file.filename);
        tokio::fs::write(self.assets.path_for(&file_name), &file.content)
            .await
            .map_err(|e| ServiceError::InternalError(format!("Failed to store photo: {}", e)))?;

        let previous = service.photo_path.replace(file_name);
        let updated = self.service_repo.update(id, service).await?;
        if let Some(old) = previous {
            if let Err(e) = tokio::fs::remove_file(self.assets.path_for(&old)).await {
                warn!("Failed to remove replaced photo {}: {}", old, e);
            }
        }
        Ok(updated)
    }
}

/// Uuid-prefixed name, keeping the original extension so content type
/// sniffing by extension keeps working.
pub(crate) fn unique_file_name(original: &str) -> String {
    match original.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{}.{}", Uuid::new_v4(), ext.to_lowercase()),
        _ => Uuid::new_v4().to_string(),
    }
}
