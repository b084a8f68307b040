use crate::model::proposal::Proposal;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

#[async_trait]
pub trait ProposalRepository: Send + Sync {
    async fn create(&self, proposal: Proposal) -> RepositoryResult<Proposal>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Proposal>;
    async fn update(&self, id: ObjectId, proposal: Proposal) -> RepositoryResult<Proposal>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    /// All proposals of one quote, newest first.
    async fn list_by_quote(&self, quote_id: ObjectId) -> RepositoryResult<Vec<Proposal>>;
}

pub struct MongoProposalRepository {
    collection: mongodb::Collection<Proposal>,
}

impl MongoProposalRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoProposalRepository { collection: db.collection::<Proposal>("proposals") }
    }
}

#[async_trait]
impl ProposalRepository for MongoProposalRepository {
    #[tracing::instrument(skip(self, proposal), fields(quote_id = %proposal.quote_id))]
    async fn create(&self, proposal: Proposal) -> RepositoryResult<Proposal> {
        info!("Creating new proposal");
        let mut new_proposal = proposal;
        new_proposal.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        new_proposal.created_at = Some(now.clone());
        new_proposal.updated_at = Some(now);

        match self.collection.insert_one(new_proposal.clone(), None).await {
            Ok(_) => Ok(new_proposal),
            Err(e) => {
                error!("Failed to create proposal: {}", e);
                Err(RepositoryError::database(format!("Failed to create proposal: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Proposal> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(proposal)) => Ok(proposal),
            Ok(None) => {
                error!("Proposal not found for ID: {}", id);
                Err(RepositoryError::not_found(format!("Proposal not found for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to fetch proposal by ID: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch proposal by ID: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self, proposal), fields(id = %id))]
    async fn update(&self, id: ObjectId, proposal: Proposal) -> RepositoryResult<Proposal> {
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&proposal).map_err(|e| {
            RepositoryError::serialization(format!("Failed to serialize proposal: {}", e))
        })?;
        doc.remove("_id");
        let update = doc! { "$set": doc };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => Ok(proposal),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No proposal found to update for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to update proposal: {}", e);
                Err(RepositoryError::database(format!("Failed to update proposal: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(delete_result) if delete_result.deleted_count > 0 => {
                info!("Proposal deleted successfully for ID: {}", id);
                Ok(())
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No proposal found to delete for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to delete proposal: {}", e);
                Err(RepositoryError::database(format!("Failed to delete proposal: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(quote_id = %quote_id))]
    async fn list_by_quote(&self, quote_id: ObjectId) -> RepositoryResult<Vec<Proposal>> {
        let filter = doc! { "quoteId": quote_id };
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let mut cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list proposals: {}", e)))?;

        let mut proposals = Vec::new();
        while let Some(proposal) = cursor.next().await {
            match proposal {
                Ok(p) => proposals.push(p),
                Err(e) => {
                    error!("Failed to deserialize proposal: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize proposal: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} proposals", proposals.len());
        Ok(proposals)
    }
}
