use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// What a stored image is used for on the public site. The newest
/// `HeaderLogo` asset also serves as the watermark for rendered PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    Gallery,
    HeaderLogo,
    Hero,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Gallery => "gallery",
            ImageKind::HeaderLogo => "header_logo",
            ImageKind::Hero => "hero",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub kind: ImageKind,
    pub description: Option<String>,
    /// File name under the configured assets directory.
    pub file_path: String,
    pub content_type: String,
    pub created_at: Option<String>,
}
