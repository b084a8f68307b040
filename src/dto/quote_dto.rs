use crate::model::quote::{Quote, QuoteStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public quote submission from the site contact form. Catalog
/// references arrive as hex ObjectId strings and may be absent when the
/// customer skipped the selection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    #[validate(length(min = 2, max = 100))]
    pub customer_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 20))]
    pub phone: String,

    #[validate(length(equal = 24))]
    pub service_id: Option<String>,

    #[validate(length(equal = 24))]
    pub glass_type_id: Option<String>,

    #[validate(range(min = 0.0))]
    pub height_cm: Option<f64>,

    #[validate(range(min = 0.0))]
    pub width_cm: Option<f64>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// Admin-side quote edit. Every field is optional; absent fields keep
/// their stored value. `final_price` is a masked currency string
/// ("R$ 1.234,56") parsed to integer cents; an empty string clears it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuoteRequest {
    pub status: Option<QuoteStatus>,

    #[validate(length(equal = 24))]
    pub service_id: Option<String>,

    #[validate(length(equal = 24))]
    pub glass_type_id: Option<String>,

    #[validate(range(min = 0.0))]
    pub height_cm: Option<f64>,

    #[validate(range(min = 0.0))]
    pub width_cm: Option<f64>,

    #[validate(length(max = 2000))]
    pub admin_note: Option<String>,

    pub scheduled_at: Option<String>,

    pub final_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteListResponse {
    pub quotes: Vec<Quote>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}
