use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Editable site copy entry (hero headline, about text, contact phone,
/// ...), addressed by a unique key and upserted from the admin screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteText {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub key: String,
    pub value: String,
    pub updated_at: Option<String>,
}
