use crate::model::quote::{Quote, QuoteStatus};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

/// Documents skipped for a 1-based page. Widened to u64 before the
/// multiply so arbitrary query-string values cannot overflow.
fn list_skip(page: u32, limit: u32) -> u64 {
    u64::from(page.max(1) - 1) * u64::from(limit)
}

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn create(&self, quote: Quote) -> RepositoryResult<Quote>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Quote>;
    async fn update(&self, id: ObjectId, quote: Quote) -> RepositoryResult<Quote>;
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Quote>>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoQuoteRepository {
    collection: mongodb::Collection<Quote>,
}

impl MongoQuoteRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoQuoteRepository { collection: db.collection::<Quote>("quotes") }
    }
}

#[async_trait]
impl QuoteRepository for MongoQuoteRepository {
    #[tracing::instrument(skip(self, quote), fields(customer = %quote.customer_name))]
    async fn create(&self, quote: Quote) -> RepositoryResult<Quote> {
        info!("Creating new quote");
        let mut new_quote = quote;
        new_quote.id = Some(ObjectId::new());
        new_quote.status = QuoteStatus::New;
        let now = chrono::Utc::now().to_rfc3339();
        new_quote.created_at = Some(now.clone());
        new_quote.updated_at = Some(now);

        match self.collection.insert_one(new_quote.clone(), None).await {
            Ok(_) => {
                info!("Quote created successfully");
                Ok(new_quote)
            }
            Err(e) => {
                error!("Failed to create quote: {}", e);
                Err(RepositoryError::database(format!("Failed to create quote: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Quote> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(quote)) => Ok(quote),
            Ok(None) => {
                error!("Quote not found for ID: {}", id);
                Err(RepositoryError::not_found(format!("Quote not found for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to fetch quote by ID: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch quote by ID: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self, quote), fields(id = %id))]
    async fn update(&self, id: ObjectId, quote: Quote) -> RepositoryResult<Quote> {
        info!("Updating quote");
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&quote)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize quote: {}", e)))?;
        doc.remove("_id");
        let update = doc! { "$set": doc };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => Ok(quote),
            Ok(_) => {
                error!("No quote found to update for ID: {}", id);
                Err(RepositoryError::not_found(format!("No quote found to update for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to update quote: {}", e);
                Err(RepositoryError::database(format!("Failed to update quote: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(page = page, limit = limit))]
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Quote>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .skip(list_skip(page, limit))
            .limit(limit as i64)
            .build();
        let mut cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list quotes: {}", e)))?;

        let mut quotes = Vec::new();
        while let Some(quote) = cursor.next().await {
            match quote {
                Ok(q) => quotes.push(q),
                Err(e) => {
                    error!("Failed to deserialize quote: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize quote: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} quotes", quotes.len());
        Ok(quotes)
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        self.collection
            .count_documents(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count quotes: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_skip_pages() {
        assert_eq!(list_skip(1, 20), 0);
        assert_eq!(list_skip(2, 20), 20);
        assert_eq!(list_skip(5, 50), 200);
    }

    #[test]
    fn test_list_skip_treats_page_zero_as_first() {
        assert_eq!(list_skip(0, 20), 0);
    }

    #[test]
    fn test_list_skip_does_not_overflow_on_extreme_input() {
        // page and limit come straight from the query string.
        let skip = list_skip(u32::MAX, u32::MAX);
        assert_eq!(skip, u64::from(u32::MAX - 1) * u64::from(u32::MAX));
    }
}
