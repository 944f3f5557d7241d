use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::document::{ColorEntry, DesignSummary, TextEntry};
use crate::figma::ImageUrlMap;

/// Result of a download step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DownloadReport {
    /// Node ids whose image was written, in node id order.
    pub downloaded: Vec<String>,
    /// Files written, matching `downloaded`.
    pub files: Vec<PathBuf>,
    /// Node ids that had no URL.
    pub skipped: Vec<String>,
    pub total_bytes: u64,
}

/// What happened after the document was saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExportOutcome {
    /// No image nodes, or Figma resolved none of them.
    NoImages,
    Downloaded(DownloadReport),
}

/// Summary of a successful export pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportReport {
    pub file_key: String,
    pub document_path: PathBuf,
    pub image_node_count: usize,
    pub outcome: ExportOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_path: Option<PathBuf>,
}

impl ExportReport {
    /// Number of image files written.
    pub fn downloaded_count(&self) -> usize {
        match &self.outcome {
            ExportOutcome::NoImages => 0,
            ExportOutcome::Downloaded(report) => report.files.len(),
        }
    }
}

/// On-disk layout of the summary file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SummaryDocument {
    pub texts: Vec<TextEntry>,
    pub colors: Vec<ColorEntry>,
    pub images: ImageUrlMap,
}

impl SummaryDocument {
    pub fn new(summary: DesignSummary, images: ImageUrlMap) -> Self {
        Self {
            texts: summary.texts,
            colors: summary.colors,
            images,
        }
    }
}
