pub mod catalog_handler;
pub mod document_handler;
pub mod image_handler;
pub mod proposal_handler;
pub mod quote_handler;
pub mod site_text_handler;
pub mod user_handler;

use axum::extract::multipart::Field;
use bson::oid::ObjectId;
use bytes::BytesMut;

use crate::dto::image_dto::UploadedFile;
use crate::util::error::HandlerError;

/// Parses a path id, mapping garbage to a 400 instead of a Mongo error.
pub(crate) fn parse_path_id(raw: &str, what: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(raw).map_err(|_| HandlerError::bad_request(format!("Invalid {} id", what)))
}

/// Drains one multipart file field into memory, chunk by chunk.
pub(crate) async fn read_file_field(mut field: Field<'_>) -> Result<UploadedFile, HandlerError> {
    let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
    let content_type = field.content_type().map(|s| s.to_string()).unwrap_or_default();

    let mut buf = BytesMut::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| HandlerError::bad_request(format!("Failed to read file chunk: {}", e)))?
    {
        buf.extend_from_slice(&chunk);
    }

    Ok(UploadedFile {
        filename,
        content_type,
        size: buf.len(),
        content: buf.to_vec(),
    })
}
