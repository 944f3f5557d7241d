//! Types for Figma API responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Node id to signed download URL. `None` or an empty string means Figma could
/// not render that node.
pub type ImageUrlMap = BTreeMap<String, Option<String>>;

/// Body of `GET /v1/images/{file_key}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImagesResponse {
    /// Render error reported by Figma, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
    #[serde(default)]
    pub images: ImageUrlMap,
}
