use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Closed set of icons the public site can render for a service. The
/// front end maps each identifier to its icon component; unknown names
/// cannot occur since the variant set is fixed at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceIcon {
    Door,
    Window,
    ShowerBox,
    Mirror,
    Railing,
    Glass,
    Other,
}

impl ServiceIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceIcon::Door => "door",
            ServiceIcon::Window => "window",
            ServiceIcon::ShowerBox => "shower_box",
            ServiceIcon::Mirror => "mirror",
            ServiceIcon::Railing => "railing",
            ServiceIcon::Glass => "glass",
            ServiceIcon::Other => "other",
        }
    }

    pub fn all() -> &'static [ServiceIcon] {
        &[
            ServiceIcon::Door,
            ServiceIcon::Window,
            ServiceIcon::ShowerBox,
            ServiceIcon::Mirror,
            ServiceIcon::Railing,
            ServiceIcon::Glass,
            ServiceIcon::Other,
        ]
    }
}

/// Installable service category (door, shower box, mirror, ...) offered
/// on the public site. `photo_path` points at an optional reference photo
/// under the assets directory, embedded into rendered quote documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: Option<String>,
    pub icon: ServiceIcon,
    pub active: bool,
    pub photo_path: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
