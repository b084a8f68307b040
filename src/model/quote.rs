use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Lifecycle of a quote request. Created as `New` by a public submission,
/// advanced only by admin updates; a `Done` quote is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    New,
    InProgress,
    Done,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::New => "New",
            QuoteStatus::InProgress => "InProgress",
            QuoteStatus::Done => "Done",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Customer quote request ("orçamento").
///
/// `final_price_cents` is the admin-entered full price including labor.
/// It is independent of the computed glass cost and only meaningful once
/// an admin sets it. Dimensions are centimeters; either may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service_id: Option<ObjectId>,
    pub glass_type_id: Option<ObjectId>,
    pub height_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub description: Option<String>,
    pub admin_note: Option<String>,
    pub scheduled_at: Option<String>,
    pub status: QuoteStatus,
    pub final_price_cents: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
