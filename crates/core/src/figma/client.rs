//! Figma REST API client.
//!
//! Only the two endpoints an export needs are covered:
//! `GET /files/{key}` and `GET /images/{key}`.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::FigmaConfig;

use super::remote::RemoteClient;
use super::types::{ImageUrlMap, ImagesResponse};
use super::{DesignSource, RemoteError};

/// Figma API client.
#[derive(Clone)]
pub struct FigmaClient {
    remote: RemoteClient,
    base_url: String,
}

impl FigmaClient {
    /// Create a new Figma client.
    pub fn new(config: &FigmaConfig) -> Result<Self, RemoteError> {
        let token = config
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| RemoteError::NotConfigured("Figma token is required".to_string()))?;

        Ok(Self {
            remote: RemoteClient::new(token)?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn file_url(&self, file_key: &str) -> String {
        format!("{}/files/{}", self.base_url, urlencoding::encode(file_key))
    }

    fn images_url(&self, file_key: &str, node_ids: &[String], format: &str) -> String {
        format!(
            "{}/images/{}?ids={}&format={}",
            self.base_url,
            urlencoding::encode(file_key),
            urlencoding::encode(&node_ids.join(",")),
            urlencoding::encode(format)
        )
    }
}

#[async_trait]
impl DesignSource for FigmaClient {
    async fn fetch_file(&self, file_key: &str) -> Result<Value, RemoteError> {
        debug!("Figma get file: key={}", file_key);
        self.remote.fetch_json(&self.file_url(file_key)).await
    }

    async fn fetch_image_urls(
        &self,
        file_key: &str,
        node_ids: &[String],
        format: &str,
    ) -> Result<ImageUrlMap, RemoteError> {
        if node_ids.is_empty() {
            return Ok(ImageUrlMap::new());
        }

        debug!(
            "Figma get image urls: key={}, nodes={}",
            file_key,
            node_ids.len()
        );

        let value = self
            .remote
            .fetch_json(&self.images_url(file_key, node_ids, format))
            .await?;

        let response: ImagesResponse = serde_json::from_value(value).map_err(|e| {
            RemoteError::Parse(format!("Failed to parse images response: {}", e))
        })?;

        Ok(response.images)
    }

    async fn download_image(&self, url: &str, destination: &Path) -> Result<u64, RemoteError> {
        self.remote.download_binary(url, destination).await
    }
}
