use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Where uploaded image assets (gallery photos, header logo, service
/// reference photos) live on the local filesystem.
#[derive(Debug, Clone)]
pub struct AssetsConfig {
    pub assets_dir: PathBuf,
}

impl AssetsConfig {
    pub fn from_env() -> Self {
        let assets_dir = env::var("ASSETS_DIR").unwrap_or_else(|_| {
            warn!("ASSETS_DIR not set, using default: ./assets");
            "assets".to_string()
        });
        AssetsConfig { assets_dir: PathBuf::from(assets_dir) }
    }

    /// Absolute-or-relative path for a stored asset file name.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.assets_dir.join(file_name)
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        AssetsConfig { assets_dir: PathBuf::from("assets") }
    }
}
