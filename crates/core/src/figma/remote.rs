//! Authenticated JSON GETs and streamed binary downloads.

use std::path::Path;

use futures::StreamExt;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::RemoteError;

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "X-Figma-Token";

/// Downloaded bodies are written to disk in pieces of this size.
pub const DOWNLOAD_CHUNK_SIZE: usize = 1024;

/// HTTP transport shared by all Figma calls.
#[derive(Clone)]
pub struct RemoteClient {
    client: Client,
    token: String,
}

impl RemoteClient {
    /// Create a client that sends `token` with every JSON request.
    pub fn new(token: impl Into<String>) -> Result<Self, RemoteError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            token: token.into(),
        })
    }

    /// GET `url` with the token header and parse the body as JSON.
    ///
    /// Anything but a 200 is a [`RemoteError::Transport`] carrying the status
    /// and the raw body.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, RemoteError> {
        debug!(url = url, "Fetching JSON");

        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if status != StatusCode::OK {
            return Err(RemoteError::Transport {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(|e| RemoteError::Parse(e.to_string()))
    }

    /// GET `url` and stream the body into `destination`, replacing any file
    /// already there. Returns the number of bytes written.
    ///
    /// Image URLs are pre-signed, so no token is sent. On a non-200 response
    /// nothing is created on disk.
    pub async fn download_binary(&self, url: &str, destination: &Path) -> Result<u64, RemoteError> {
        debug!(url = url, destination = %destination.display(), "Downloading");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let mut file = File::create(destination)
            .await
            .map_err(|e| RemoteError::io(destination, e))?;

        let mut stream = response.bytes_stream();
        let mut bytes_written = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            for piece in chunk.chunks(DOWNLOAD_CHUNK_SIZE) {
                file.write_all(piece)
                    .await
                    .map_err(|e| RemoteError::io(destination, e))?;
                bytes_written += piece.len() as u64;
            }
        }

        file.flush()
            .await
            .map_err(|e| RemoteError::io(destination, e))?;

        Ok(bytes_written)
    }
}
