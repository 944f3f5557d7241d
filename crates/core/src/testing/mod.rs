//! Testing utilities and mock implementations.
//!
//! [`MockDesignSource`] stands in for the Figma API so the exporter and the
//! HTTP service can be exercised without network access.

mod mock_design_source;

pub use mock_design_source::{MockDesignSource, RecordedCall};

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::{json, Value};

    /// An `IMAGE` paint.
    pub fn image_fill(image_ref: &str) -> Value {
        json!({ "type": "IMAGE", "imageRef": image_ref, "scaleMode": "FILL" })
    }

    /// A `SOLID` paint with 0..1 channels.
    pub fn solid_fill(r: f64, g: f64, b: f64) -> Value {
        json!({ "type": "SOLID", "color": { "r": r, "g": g, "b": b, "a": 1.0 } })
    }

    /// A `RECTANGLE` node with the given fills.
    pub fn rectangle(id: &str, fills: Vec<Value>) -> Value {
        json!({ "id": id, "name": format!("Rect {}", id), "type": "RECTANGLE", "fills": fills })
    }

    /// A `TEXT` node.
    pub fn text(id: &str, characters: &str) -> Value {
        json!({ "id": id, "name": characters, "type": "TEXT", "characters": characters })
    }

    /// A `FRAME` node with children.
    pub fn frame(id: &str, children: Vec<Value>) -> Value {
        json!({ "id": id, "name": format!("Frame {}", id), "type": "FRAME", "children": children })
    }

    /// A file response whose document holds one image rectangle per id, plus a
    /// text node and a plain rectangle.
    pub fn file_with_images(image_node_ids: &[&str]) -> Value {
        let mut children: Vec<Value> = image_node_ids
            .iter()
            .map(|id| rectangle(id, vec![image_fill(&format!("ref-{}", id))]))
            .collect();
        children.push(text("9:1", "Welcome"));
        children.push(rectangle("9:2", vec![solid_fill(1.0, 0.0, 0.0)]));

        json!({
            "name": "Fixture",
            "version": "1",
            "document": {
                "id": "0:0",
                "name": "Document",
                "type": "DOCUMENT",
                "children": [frame("1:0", children)]
            }
        })
    }
}
