use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSiteTextRequest {
    #[validate(length(min = 1, max = 100))]
    pub key: String,

    #[validate(length(max = 5000))]
    pub value: String,
}
