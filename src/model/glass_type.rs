use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Priced material category ("tipo de vidro").
///
/// The price is integer cents per square meter and is mutable; changing
/// it only affects future computations, past quotes keep their own
/// resolved final price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassType {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: Option<String>,
    pub price_per_m2_cents: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
