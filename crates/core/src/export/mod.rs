//! Export pass: fetch a Figma file, save it, and download its images.
//!
//! [`Exporter::run`] performs the whole pass in order:
//!
//! 1. fetch the file by key (abort on any failure, nothing written yet)
//! 2. save the raw document, pretty-printed
//! 3. collect ids of nodes with image fills
//! 4. resolve those ids to URLs in one request (skipped when there are none)
//! 5. optionally save a summary of texts, colors and image URLs
//! 6. download every resolved URL to `<images_dir>/<node-id>.<format>`
//!
//! The individual steps ([`save_document`], [`download_images`],
//! [`write_summary`]) are public so the HTTP service can expose them
//! separately.

mod exporter;
mod files;
mod types;

pub use exporter::Exporter;
pub use files::{download_images, image_path, save_document, write_summary};
pub use types::{DownloadReport, ExportOutcome, ExportReport, SummaryDocument};

use std::path::PathBuf;

use thiserror::Error;

use crate::figma::RemoteError;

/// Errors that abort an export pass.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Figma API or image download failure.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Local filesystem failure.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be serialized.
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Node id that cannot be used as a file name.
    #[error("Invalid node id for a file name: {0:?}")]
    InvalidNodeId(String),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
