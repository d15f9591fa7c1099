use std::path::PathBuf;
use std::sync::Arc;

use folio_db::Database;

pub type AppState = Arc<AppStateInner>;

/// Everything a handler needs, passed explicitly through axum `State`.
pub struct AppStateInner {
    pub db: Database,
    /// HMAC key for account association. Always configured, never defaulted.
    pub mini_app_secret: String,
    /// Deployment base URL without a trailing slash.
    pub base_url: String,
    pub manifest_path: PathBuf,
    pub image_path: PathBuf,
    pub static_dir: PathBuf,
}

impl AppStateInner {
    /// Absolute URL for a path on this deployment. `path` should start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
