use std::sync::Arc;

use tracing::{info, instrument};

use crate::config::ExportConfig;
use crate::document::{image_node_ids_of_file, sorted_ids, DesignSummary};
use crate::figma::{DesignSource, ImageUrlMap};

use super::files::{download_images, save_document, write_summary};
use super::types::{ExportOutcome, ExportReport, SummaryDocument};
use super::ExportError;

/// Runs a full export pass against a [`DesignSource`].
pub struct Exporter {
    source: Arc<dyn DesignSource>,
    config: ExportConfig,
    image_format: String,
}

impl Exporter {
    /// Create an exporter writing where `config` says, requesting PNG renders.
    pub fn new(source: Arc<dyn DesignSource>, config: ExportConfig) -> Self {
        Self {
            source,
            config,
            image_format: "png".to_string(),
        }
    }

    /// Request renders in `format` (also used as the file extension).
    pub fn with_image_format(mut self, format: impl Into<String>) -> Self {
        self.image_format = format.into();
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Fetch `file_key`, save it, and download its images.
    ///
    /// Steps run strictly in order and the first error aborts the pass. A
    /// failed fetch leaves the filesystem untouched. The summary is written
    /// before any image download starts.
    #[instrument(skip(self))]
    pub async fn run(&self, file_key: &str) -> Result<ExportReport, ExportError> {
        info!("Fetching Figma file...");
        let file = self.source.fetch_file(file_key).await?;

        save_document(&file, &self.config.document_path).await?;

        let node_ids = image_node_ids_of_file(&file);
        info!("Found {} image nodes", node_ids.len());

        let images = if node_ids.is_empty() {
            ImageUrlMap::new()
        } else {
            info!("Fetching {} image URLs...", node_ids.len());
            self.source
                .fetch_image_urls(file_key, &sorted_ids(&node_ids), &self.image_format)
                .await?
        };

        let summary_path = match self.config.summary_target() {
            Some(path) => {
                let summary =
                    SummaryDocument::new(DesignSummary::from_file(&file), images.clone());
                write_summary(&summary, path).await?;
                Some(path.to_path_buf())
            }
            None => None,
        };

        let outcome = if images.is_empty() {
            info!("No images found to download.");
            ExportOutcome::NoImages
        } else {
            let report = download_images(
                self.source.as_ref(),
                &images,
                &self.config.images_dir,
                &self.image_format,
            )
            .await?;
            ExportOutcome::Downloaded(report)
        };

        Ok(ExportReport {
            file_key: file_key.to_string(),
            document_path: self.config.document_path.clone(),
            image_node_count: node_ids.len(),
            outcome,
            summary_path,
        })
    }
}
