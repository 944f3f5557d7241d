//! Export step handlers.
//!
//! Each endpoint runs one step of an export on the data it is given. The
//! service keeps nothing between calls, so chaining the steps (file, image
//! nodes, image URLs, download) is up to the caller.
//!
//! Failures of the step itself are reported with HTTP 200 and
//! `{"status": "error", "message": ...}`.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use figma_export_core::{
    download_images, image_node_ids_of_file, save_document, sorted_ids, ColorEntry,
    DesignSummary, ImageUrlMap, TextEntry,
};

use crate::state::AppState;

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";
const STATUS_CLIENT_ERROR: &str = "client error";

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FileParams {
    pub file_key: String,
    /// Save the document to the configured path instead of returning it.
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Deserialize)]
pub struct ImageParams {
    pub file_key: String,
}

#[derive(Debug, Deserialize)]
pub struct FileJsonRequest {
    pub file_json: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct ImageUrlsRequest {
    pub image_node_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub images: ImageUrlMap,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    fn error(message: impl ToString) -> Json<Self> {
        Json(Self {
            status: STATUS_ERROR,
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ImageNodesResponse {
    pub status: &'static str,
    pub image_node_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageUrlsResponse {
    pub status: &'static str,
    pub images: ImageUrlMap,
}

#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub status: &'static str,
    pub message: String,
    pub downloaded: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub status: &'static str,
    pub texts: Vec<TextEntry>,
    pub colors: Vec<ColorEntry>,
}

type StepResult<T> = Result<Json<T>, Json<ErrorResponse>>;

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/figma/file?file_key=K&save=bool
///
/// Fetch a document. With `save=true` it is written to the configured
/// document path; otherwise it is returned in the response.
pub async fn fetch_file(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FileParams>,
) -> StepResult<FileResponse> {
    let document = state
        .source()
        .fetch_file(&params.file_key)
        .await
        .map_err(ErrorResponse::error)?;

    if params.save {
        let path = &state.config().export.document_path;
        save_document(&document, path)
            .await
            .map_err(ErrorResponse::error)?;

        Ok(Json(FileResponse {
            status: STATUS_SUCCESS,
            message: "Figma file fetched and saved successfully".to_string(),
            document: None,
        }))
    } else {
        Ok(Json(FileResponse {
            status: STATUS_SUCCESS,
            message: "Figma file fetched successfully".to_string(),
            document: Some(document),
        }))
    }
}

/// POST /api/v1/figma/image_nodes
///
/// Ids of nodes with image fills in the supplied file, sorted.
pub async fn image_nodes(Json(body): Json<FileJsonRequest>) -> Json<ImageNodesResponse> {
    let file = Value::Object(body.file_json);
    let ids = image_node_ids_of_file(&file);

    Json(ImageNodesResponse {
        status: STATUS_SUCCESS,
        image_node_ids: sorted_ids(&ids),
    })
}

/// POST /api/v1/figma/image?file_key=K
///
/// Resolve node ids to render URLs.
pub async fn image_urls(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ImageParams>,
    Json(body): Json<ImageUrlsRequest>,
) -> StepResult<ImageUrlsResponse> {
    if body.image_node_ids.is_empty() {
        return Err(Json(ErrorResponse {
            status: STATUS_CLIENT_ERROR,
            message: "Please provide image node ids".to_string(),
        }));
    }

    let format = &state.config().figma.image_format;
    let images = state
        .source()
        .fetch_image_urls(&params.file_key, &body.image_node_ids, format)
        .await
        .map_err(ErrorResponse::error)?;

    Ok(Json(ImageUrlsResponse {
        status: STATUS_SUCCESS,
        images,
    }))
}

/// POST /api/v1/figma/image_download
///
/// Download the supplied id-to-URL map into the configured images directory.
pub async fn image_download(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DownloadRequest>,
) -> StepResult<DownloadResponse> {
    let config = state.config();
    let report = download_images(
        state.source(),
        &body.images,
        &config.export.images_dir,
        &config.figma.image_format,
    )
    .await
    .map_err(|e| {
        warn!("Image download failed: {}", e);
        ErrorResponse::error(e)
    })?;

    info!(
        "Downloaded {} images ({} skipped)",
        report.files.len(),
        report.skipped.len()
    );

    Ok(Json(DownloadResponse {
        status: STATUS_SUCCESS,
        message: format!("Successfully downloaded {} images", report.files.len()),
        downloaded: report.downloaded,
        skipped: report.skipped,
    }))
}

/// POST /api/v1/figma/summary
///
/// Texts and solid colors of the supplied file.
pub async fn summary(Json(body): Json<FileJsonRequest>) -> Json<SummaryResponse> {
    let summary = DesignSummary::from_file(&Value::Object(body.file_json));

    Json(SummaryResponse {
        status: STATUS_SUCCESS,
        texts: summary.texts,
        colors: summary.colors,
    })
}
