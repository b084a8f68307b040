pub mod catalog_dto;
pub mod image_dto;
pub mod proposal_dto;
pub mod quote_dto;
pub mod site_text_dto;
pub mod user_dto;
