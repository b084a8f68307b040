use crate::model::service_item::ServiceIcon;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Glass type registration. `price_per_m2` is a masked currency string
/// ("R$ 120,00"); it is parsed to integer cents before storage.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGlassTypeRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub price_per_m2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGlassTypeRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub price_per_m2: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[validate(length(min = 2, max = 100))]
    pub title: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub icon: ServiceIcon,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[validate(length(min = 2, max = 100))]
    pub title: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub icon: Option<ServiceIcon>,

    pub active: Option<bool>,
}
