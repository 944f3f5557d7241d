//! Mock design source for testing.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::figma::{DesignSource, ImageUrlMap, RemoteError};

/// A recorded call for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    FetchFile {
        file_key: String,
    },
    FetchImageUrls {
        file_key: String,
        node_ids: Vec<String>,
        format: String,
    },
    DownloadImage {
        url: String,
        destination: PathBuf,
    },
}

/// Mock implementation of the DesignSource trait.
///
/// Provides controllable behavior for testing:
/// - Serve configurable files, image URL maps and image bytes
/// - Track calls for assertions
/// - Simulate non-200 responses and other failures
///
/// # Example
///
/// ```rust,ignore
/// use figma_export_core::testing::{MockDesignSource, fixtures};
///
/// let source = MockDesignSource::new();
/// source.add_file("KEY", fixtures::file_with_images(&["1:2"])).await;
/// source.add_image("1:2", "https://cdn.test/1-2.png", b"png").await;
///
/// let file = source.fetch_file("KEY").await?;
/// ```
#[derive(Debug)]
pub struct MockDesignSource {
    /// Documents by file key.
    files: Arc<RwLock<HashMap<String, Value>>>,
    /// URL returned for each node id.
    image_urls: Arc<RwLock<ImageUrlMap>>,
    /// Body served for each download URL.
    downloads: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    /// Recorded calls.
    calls: Arc<RwLock<Vec<RecordedCall>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<RemoteError>>>,
}

impl Default for MockDesignSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDesignSource {
    /// Create a new empty mock design source.
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
            image_urls: Arc::new(RwLock::new(ImageUrlMap::new())),
            downloads: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Serve `document` for `file_key`.
    pub async fn add_file(&self, file_key: &str, document: Value) {
        self.files
            .write()
            .await
            .insert(file_key.to_string(), document);
    }

    /// Resolve `node_id` to `url`, and serve `bytes` from that URL.
    pub async fn add_image(&self, node_id: &str, url: &str, bytes: &[u8]) {
        self.image_urls
            .write()
            .await
            .insert(node_id.to_string(), Some(url.to_string()));
        self.downloads
            .write()
            .await
            .insert(url.to_string(), bytes.to_vec());
    }

    /// Resolve `node_id` to `url` (or to nothing) without serving a body.
    pub async fn set_image_url(&self, node_id: &str, url: Option<&str>) {
        self.image_urls
            .write()
            .await
            .insert(node_id.to_string(), url.map(str::to_string));
    }

    /// Serve `bytes` from `url`.
    pub async fn add_download(&self, url: &str, bytes: &[u8]) {
        self.downloads
            .write()
            .await
            .insert(url.to_string(), bytes.to_vec());
    }

    /// Make the next operation fail with the given error.
    pub async fn set_next_error(&self, error: RemoteError) {
        *self.next_error.write().await = Some(error);
    }

    // =========================================================================
    // Assertions
    // =========================================================================

    /// All calls made so far, in order.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    /// Number of download calls made so far.
    pub async fn download_count(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, RecordedCall::DownloadImage { .. }))
            .count()
    }

    /// Clear recorded calls.
    pub async fn clear_calls(&self) {
        self.calls.write().await.clear();
    }

    async fn record(&self, call: RecordedCall) {
        self.calls.write().await.push(call);
    }

    async fn take_error(&self) -> Option<RemoteError> {
        self.next_error.write().await.take()
    }
}

fn not_found(what: &str) -> RemoteError {
    RemoteError::Transport {
        status: 404,
        body: format!("Not found: {}", what),
    }
}

#[async_trait]
impl DesignSource for MockDesignSource {
    async fn fetch_file(&self, file_key: &str) -> Result<Value, RemoteError> {
        self.record(RecordedCall::FetchFile {
            file_key: file_key.to_string(),
        })
        .await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.files
            .read()
            .await
            .get(file_key)
            .cloned()
            .ok_or_else(|| not_found(file_key))
    }

    async fn fetch_image_urls(
        &self,
        file_key: &str,
        node_ids: &[String],
        format: &str,
    ) -> Result<ImageUrlMap, RemoteError> {
        self.record(RecordedCall::FetchImageUrls {
            file_key: file_key.to_string(),
            node_ids: node_ids.to_vec(),
            format: format.to_string(),
        })
        .await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        let urls = self.image_urls.read().await;
        Ok(node_ids
            .iter()
            .filter_map(|id| urls.get(id).map(|url| (id.clone(), url.clone())))
            .collect())
    }

    async fn download_image(&self, url: &str, destination: &Path) -> Result<u64, RemoteError> {
        self.record(RecordedCall::DownloadImage {
            url: url.to_string(),
            destination: destination.to_path_buf(),
        })
        .await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        let bytes = self
            .downloads
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(url))?;

        tokio::fs::write(destination, &bytes)
            .await
            .map_err(|e| RemoteError::io(destination, e))?;

        Ok(bytes.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_fetch_file_records_call() {
        let source = MockDesignSource::new();
        source.add_file("KEY", fixtures::file_with_images(&["1:2"])).await;

        let file = source.fetch_file("KEY").await.unwrap();
        assert_eq!(file["name"], "Fixture");

        assert_eq!(
            source.calls().await,
            vec![RecordedCall::FetchFile {
                file_key: "KEY".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_unknown_file_is_404() {
        let source = MockDesignSource::new();
        let err = source.fetch_file("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_next_error_is_used_once() {
        let source = MockDesignSource::new();
        source.add_file("KEY", fixtures::file_with_images(&[])).await;
        source
            .set_next_error(RemoteError::Parse("boom".to_string()))
            .await;

        tokio_test::assert_err!(source.fetch_file("KEY").await);
        tokio_test::assert_ok!(source.fetch_file("KEY").await);
    }

    #[tokio::test]
    async fn test_image_urls_only_for_requested_ids() {
        let source = MockDesignSource::new();
        source.add_image("1", "https://cdn.test/1", b"a").await;
        source.add_image("2", "https://cdn.test/2", b"b").await;

        let urls = source
            .fetch_image_urls("KEY", &["2".to_string()], "png")
            .await
            .unwrap();

        assert_eq!(urls.len(), 1);
        assert_eq!(urls["2"].as_deref(), Some("https://cdn.test/2"));
    }

    #[tokio::test]
    async fn test_clear_calls_resets_history() {
        let source = MockDesignSource::new();
        source.add_download("https://cdn.test/1", b"a").await;

        let temp = tempfile::TempDir::new().unwrap();
        source
            .download_image("https://cdn.test/1", &temp.path().join("1.png"))
            .await
            .unwrap();
        assert_eq!(source.download_count().await, 1);

        source.clear_calls().await;

        assert!(source.calls().await.is_empty());
        assert_eq!(source.download_count().await, 0);
    }
}
