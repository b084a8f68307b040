pub mod catalog_service;
pub mod document_service;
pub mod image_service;
pub mod proposal_service;
pub mod quote_service;
pub mod site_text_service;
pub mod user_service;

use crate::util::error::ServiceError;
use bson::oid::ObjectId;

/// Parses a 24-char hex id from a request path or body field.
pub(crate) fn parse_object_id(raw: &str, what: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(raw)
        .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id: {}", what, raw)))
}
