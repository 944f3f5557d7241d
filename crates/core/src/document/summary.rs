//! Text and color extraction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::node::NodeRef;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A `TEXT` node and its content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

/// One `SOLID` fill of a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: Rgb,
}

/// Texts and solid colors found in a document, in depth-first order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DesignSummary {
    pub texts: Vec<TextEntry>,
    pub colors: Vec<ColorEntry>,
}

impl DesignSummary {
    /// Walk the tree under `root`. Absent roots give an empty summary.
    pub fn from_root(root: Option<&Value>) -> Self {
        let mut summary = Self::default();
        if let Some(node) = NodeRef::from_value(root) {
            summary.visit(node);
        }
        summary
    }

    /// Summary of a whole file response, read from its `document` field.
    pub fn from_file(file: &Value) -> Self {
        Self::from_root(file.get("document"))
    }

    fn visit(&mut self, node: NodeRef<'_>) {
        let id = node.id().map(str::to_string);
        let name = node.name().map(str::to_string);

        if node.node_type() == Some("TEXT") {
            self.texts.push(TextEntry {
                id: id.clone(),
                name: name.clone(),
                content: node.characters().unwrap_or_default().to_string(),
            });
        }

        for color in node.fills().filter_map(|fill| fill.solid_color()) {
            self.colors.push(ColorEntry {
                id: id.clone(),
                name: name.clone(),
                color,
            });
        }

        for child in node.children() {
            self.visit(child);
        }
    }
}
