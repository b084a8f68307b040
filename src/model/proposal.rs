use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Priced revision of a quote ("proposta"). Shares the dimension and
/// catalog references of its quote at creation time but carries its own
/// admin note and price; a quote may accumulate several, listed newest
/// first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub quote_id: ObjectId,
    pub service_id: Option<ObjectId>,
    pub glass_type_id: Option<ObjectId>,
    pub height_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub description: Option<String>,
    pub admin_note: Option<String>,
    pub price_cents: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
