//! S3-compatible object storage backend (MinIO in development).

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::{ObjectStore, aws::AmazonS3Builder, path::Path};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::storage::{ImageStore, UPLOAD_PREFIX, UploadRecord};

pub struct S3ImageStore {
    store: Arc<dyn ObjectStore>,
    public_base_url: String,
}

impl S3ImageStore {
    /// Create a storage client from the server config.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = AmazonS3Builder::new()
            .with_endpoint(&config.s3_endpoint)
            .with_bucket_name(&config.bucket)
            .with_access_key_id(&config.access_key_id)
            .with_secret_access_key(&config.secret_access_key)
            .with_region(&config.region);

        if config.allow_http {
            builder = builder.with_allow_http(true);
        }

        let store = builder
            .build()
            .map_err(|e| ServerError::Storage(format!("Failed to create S3 client: {}", e)))?;

        Ok(Self {
            store: Arc::new(store),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base_url, path)
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn put(&self, path: &str, data: Bytes) -> Result<UploadRecord> {
        let location = Path::from(path);
        debug!(%path, size = data.len(), "writing upload");

        self.store
            .put(&location, data.into())
            .await
            .map_err(|e| ServerError::Storage(format!("Failed to write {}: {}", path, e)))?;

        Ok(UploadRecord {
            path: path.to_string(),
            public_url: self.public_url(path),
        })
    }

    async fn list(&self) -> Result<Vec<String>> {
        let prefix = Path::from(UPLOAD_PREFIX);
        let mut urls = Vec::new();

        let mut stream = self.store.list(Some(&prefix));
        while let Some(meta) = stream
            .try_next()
            .await
            .map_err(|e| ServerError::Storage(format!("List failed: {}", e)))?
        {
            urls.push(self.public_url(meta.location.as_ref()));
        }

        urls.sort();
        Ok(urls)
    }
}
