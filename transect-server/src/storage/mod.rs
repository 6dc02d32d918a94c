//! Image storage backends

pub mod memory;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;

use crate::error::Result;

/// A stored upload: the object path and the public URL it is served from.
#[derive(Clone, Debug, Serialize)]
pub struct UploadRecord {
    pub path: String,
    pub public_url: String,
}

/// Trait for image storage backends
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store an uploaded image under the given object path.
    async fn put(&self, path: &str, data: Bytes) -> Result<UploadRecord>;

    /// List stored images as fully-qualified public URLs, in path order.
    async fn list(&self) -> Result<Vec<String>>;
}

/// Prefix under which uploads are stored.
pub const UPLOAD_PREFIX: &str = "visualizations";

/// Object path for an upload, namespaced by upload time and original
/// filename. Format: `visualizations/{unix_millis}_{filename}`.
pub fn upload_path(timestamp_millis: i64, filename: &str) -> String {
    format!("{UPLOAD_PREFIX}/{timestamp_millis}_{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_paths_embed_timestamp_and_filename() {
        assert_eq!(
            upload_path(1_735_689_600_000, "beach.png"),
            "visualizations/1735689600000_beach.png"
        );
    }
}
