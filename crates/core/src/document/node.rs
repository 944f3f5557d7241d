//! Borrowing views over the untyped document tree.
//!
//! A Figma document is kept as a `serde_json::Value`; these views only answer
//! the questions the walkers ask. A key that is missing, `null`, or of the
//! wrong JSON type reads as absent.

use serde_json::{Map, Value};

use super::Rgb;

/// A document node: a JSON object, possibly with `fills` and `children`.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> NodeRef<'a> {
    /// View `value` as a node. Absent, `null` and non-object values are not
    /// nodes.
    pub fn from_value(value: Option<&'a Value>) -> Option<Self> {
        match value {
            Some(Value::Object(fields)) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<&'a str> {
        self.str_field("id")
    }

    pub fn name(&self) -> Option<&'a str> {
        self.str_field("name")
    }

    /// Figma node type, e.g. `FRAME`, `TEXT`, `RECTANGLE`.
    pub fn node_type(&self) -> Option<&'a str> {
        self.str_field("type")
    }

    /// Text content of a `TEXT` node.
    pub fn characters(&self) -> Option<&'a str> {
        self.str_field("characters")
    }

    /// Fill descriptors in order. Entries that are not objects are skipped.
    pub fn fills(&self) -> impl Iterator<Item = FillRef<'a>> + 'a {
        self.sequence("fills")
            .iter()
            .filter_map(|v| FillRef::from_value(Some(v)))
    }

    /// Child nodes in order. Malformed children are skipped.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.sequence("children")
            .iter()
            .filter_map(|v| NodeRef::from_value(Some(v)))
    }

    fn str_field(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    fn sequence(&self, key: &str) -> &'a [Value] {
        match self.fields.get(key) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }
}

/// A paint attached to a node.
#[derive(Debug, Clone, Copy)]
pub struct FillRef<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> FillRef<'a> {
    pub fn from_value(value: Option<&'a Value>) -> Option<Self> {
        match value {
            Some(Value::Object(fields)) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Paint type, e.g. `SOLID`, `IMAGE`, `GRADIENT_LINEAR`.
    pub fn kind(&self) -> Option<&'a str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    /// Handle of the bitmap behind an `IMAGE` paint.
    pub fn image_ref(&self) -> Option<&'a str> {
        self.fields.get("imageRef").and_then(Value::as_str)
    }

    /// An `IMAGE` paint with a non-empty `imageRef`.
    pub fn is_image(&self) -> bool {
        self.kind() == Some("IMAGE") && self.image_ref().is_some_and(|r| !r.is_empty())
    }

    /// Color of a `SOLID` paint, channels scaled from 0..1 to 0..255.
    pub fn solid_color(&self) -> Option<Rgb> {
        if self.kind() != Some("SOLID") {
            return None;
        }
        let color = self.fields.get("color")?.as_object()?;
        let channel = |key: &str| color.get(key).and_then(Value::as_f64).map(to_byte);

        Some(Rgb {
            r: channel("r")?,
            g: channel("g")?,
            b: channel("b")?,
        })
    }
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_scalars_are_not_nodes() {
        assert!(NodeRef::from_value(None).is_none());
        assert!(NodeRef::from_value(Some(&Value::Null)).is_none());
        assert!(NodeRef::from_value(Some(&json!("FRAME"))).is_none());
        assert!(NodeRef::from_value(Some(&json!([1, 2]))).is_none());
    }

    #[test]
    fn test_fills_not_a_sequence_reads_as_empty() {
        let value = json!({ "id": "1", "fills": { "type": "IMAGE", "imageRef": "x" } });
        let node = NodeRef::from_value(Some(&value)).unwrap();
        assert_eq!(node.fills().count(), 0);
    }

    #[test]
    fn test_children_skip_malformed_entries() {
        let value = json!({ "children": [null, 3, { "id": "a" }, "b", { "id": "c" }] });
        let node = NodeRef::from_value(Some(&value)).unwrap();
        let ids: Vec<_> = node.children().filter_map(|c| c.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_non_string_id_reads_as_absent() {
        let value = json!({ "id": 42 });
        let node = NodeRef::from_value(Some(&value)).unwrap();
        assert!(node.id().is_none());
    }

    #[test]
    fn test_is_image() {
        let image = json!({ "type": "IMAGE", "imageRef": "abc" });
        let empty_ref = json!({ "type": "IMAGE", "imageRef": "" });
        let no_ref = json!({ "type": "IMAGE" });
        let solid = json!({ "type": "SOLID", "imageRef": "abc" });

        assert!(FillRef::from_value(Some(&image)).unwrap().is_image());
        assert!(!FillRef::from_value(Some(&empty_ref)).unwrap().is_image());
        assert!(!FillRef::from_value(Some(&no_ref)).unwrap().is_image());
        assert!(!FillRef::from_value(Some(&solid)).unwrap().is_image());
    }

    #[test]
    fn test_solid_color_scaling() {
        let fill = json!({ "type": "SOLID", "color": { "r": 1.0, "g": 0.5, "b": 0.0, "a": 1.0 } });
        let rgb = FillRef::from_value(Some(&fill)).unwrap().solid_color().unwrap();
        assert_eq!(rgb, Rgb { r: 255, g: 128, b: 0 });
    }

    #[test]
    fn test_solid_color_requires_all_channels() {
        let fill = json!({ "type": "SOLID", "color": { "r": 1.0, "g": 0.5 } });
        assert!(FillRef::from_value(Some(&fill)).unwrap().solid_color().is_none());
    }
}
