//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected asset files exist at startup.

use std::path::Path;

use tracing::warn;

/// Warn for each expected asset file that is missing on disk.
///
/// The plugin endpoints read these files per request; a missing file turns
/// into a runtime 404/500 rather than a startup failure, so this only warns.
pub async fn ensure_assets<P: AsRef<Path>>(files: &[P]) {
    for file in files {
        let path = file.as_ref();
        if tokio::fs::metadata(path).await.is_err() {
            warn!(path = %path.display(), "asset file not found; endpoint will fail until provided");
        }
    }
}
