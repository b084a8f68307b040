pub mod catalog_router;
pub mod document_router;
pub mod image_router;
pub mod proposal_router;
pub mod quote_router;
pub mod site_text_router;
pub mod user_router;
