//! In-memory storage backend for testing

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use crate::error::Result;
use crate::storage::{ImageStore, UploadRecord};

/// In-memory image store for testing
pub struct MemoryStore {
    objects: DashMap<String, Bytes>,
    public_base_url: String,
}

impl MemoryStore {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            objects: DashMap::new(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base_url, path)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl ImageStore for MemoryStore {
    async fn put(&self, path: &str, data: Bytes) -> Result<UploadRecord> {
        self.objects.insert(path.to_string(), data);
        Ok(UploadRecord {
            path: path.to_string(),
            public_url: self.public_url(path),
        })
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut urls: Vec<String> = self
            .objects
            .iter()
            .map(|entry| self.public_url(entry.key()))
            .collect();
        urls.sort();
        Ok(urls)
    }
}
