//! Filesystem side of an export: raw document, images, summary.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::figma::{DesignSource, ImageUrlMap};

use super::types::{DownloadReport, SummaryDocument};
use super::ExportError;

/// Write `document` to `path` pretty-printed, replacing any existing file.
pub async fn save_document(document: &Value, path: &Path) -> Result<(), ExportError> {
    write_pretty_json(document, path).await?;
    info!("Saved raw file to {}", path.display());
    Ok(())
}

/// Write the summary file.
pub async fn write_summary(summary: &SummaryDocument, path: &Path) -> Result<(), ExportError> {
    write_pretty_json(summary, path).await?;
    info!("Saved extracted data to {}", path.display());
    Ok(())
}

/// Path of the image file for `node_id`: `<images_dir>/<node_id>.<extension>`.
///
/// Ids that are empty, `.`/`..`, or contain a path separator are rejected so a
/// caller-supplied map cannot write outside `images_dir`.
pub fn image_path(images_dir: &Path, node_id: &str, extension: &str) -> Result<PathBuf, ExportError> {
    let unsafe_id = node_id.is_empty()
        || node_id == "."
        || node_id == ".."
        || node_id.contains(['/', '\\', '\0']);
    if unsafe_id {
        return Err(ExportError::InvalidNodeId(node_id.to_string()));
    }

    Ok(images_dir.join(format!("{}.{}", node_id, extension)))
}

/// Download every resolved URL in `images` into `images_dir`, one at a time.
///
/// Entries without a URL (or with an empty one) are skipped. All target paths
/// are checked before anything is written. `images_dir` is created when the
/// map is not empty. The first failure aborts the remaining downloads.
pub async fn download_images(
    source: &dyn DesignSource,
    images: &ImageUrlMap,
    images_dir: &Path,
    extension: &str,
) -> Result<DownloadReport, ExportError> {
    let mut report = DownloadReport::default();
    let mut targets = Vec::new();

    for (node_id, url) in images {
        match url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => targets.push((node_id, url, image_path(images_dir, node_id, extension)?)),
            None => {
                warn!("No image URL for node {}, skipping", node_id);
                report.skipped.push(node_id.clone());
            }
        }
    }

    if images.is_empty() {
        return Ok(report);
    }

    fs::create_dir_all(images_dir)
        .await
        .map_err(|e| ExportError::io(images_dir, e))?;

    info!("Downloading {} images...", targets.len());

    for (node_id, url, path) in targets {
        let bytes = source.download_image(url, &path).await?;
        debug!("Downloaded image for node {} ({} bytes)", node_id, bytes);
        report.total_bytes += bytes;
        report.downloaded.push(node_id.clone());
        report.files.push(path);
    }

    info!("All images downloaded.");
    Ok(report)
}

async fn write_pretty_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), ExportError> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|e| ExportError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ExportError::io(parent, e))?;
    }

    fs::write(path, bytes)
        .await
        .map_err(|e| ExportError::io(path, e))
}
