use serde::{Deserialize, Serialize};
use validator::Validate;

/// Creates a proposal for an existing quote. Fields left absent are
/// copied from the quote at creation time, so a bare `{ "quoteId": .. }`
/// snapshots the quote as-is. `price` is a masked currency string.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposalRequest {
    #[validate(length(equal = 24))]
    pub quote_id: String,

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

    #[validate(length(max = 2000))]
    pub admin_note: Option<String>,

    pub price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProposalRequest {
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

    #[validate(length(max = 2000))]
    pub admin_note: Option<String>,

    pub price: Option<String>,
}
