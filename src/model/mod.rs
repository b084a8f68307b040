pub mod glass_type;
pub mod image_asset;
pub mod proposal;
pub mod quote;
pub mod service_item;
pub mod site_text;
pub mod user;
