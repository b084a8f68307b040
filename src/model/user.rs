use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Back-office user. `active` and `blocked` are toggled by other admins;
/// `must_change_password` is set on creation and cleared on the first
/// password change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub active: bool,
    pub blocked: bool,
    pub must_change_password: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
