//! Figma REST API access.
//!
//! [`RemoteClient`] is the low-level transport: authenticated JSON GETs and
//! streamed binary downloads. [`FigmaClient`] maps the two Figma endpoints used
//! by an export (file by key, image URLs for node ids) onto it, and implements
//! [`DesignSource`], the seam the exporter and the HTTP service are written
//! against.

mod client;
mod remote;
mod types;

pub use client::FigmaClient;
pub use remote::{RemoteClient, DOWNLOAD_CHUNK_SIZE, TOKEN_HEADER};
pub use types::*;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while talking to the Figma API or an image URL.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request never produced a response (connection, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with something other than 200.
    #[error("Status {status}: {body}")]
    Transport { status: u16, body: String },

    /// The body was not valid JSON (or not the expected shape).
    #[error("Failed to parse JSON: {0}")]
    Parse(String),

    /// Writing a downloaded body to disk failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Client not configured (missing token, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

impl RemoteError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// HTTP status of a non-200 response, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Source of design documents and their rendered images.
#[async_trait]
pub trait DesignSource: Send + Sync {
    /// Fetch the full document JSON for a file key.
    async fn fetch_file(&self, file_key: &str) -> Result<Value, RemoteError>;

    /// Resolve node ids to download URLs in one batched request.
    async fn fetch_image_urls(
        &self,
        file_key: &str,
        node_ids: &[String],
        format: &str,
    ) -> Result<ImageUrlMap, RemoteError>;

    /// Download one image URL to `destination`, returning the bytes written.
    async fn download_image(&self, url: &str, destination: &Path) -> Result<u64, RemoteError>;
}
