//! Image node collection.

use std::collections::HashSet;

use serde_json::Value;

use super::node::NodeRef;

/// Ids of every node under `root` with at least one `IMAGE` fill carrying a
/// non-empty `imageRef`.
///
/// Depth-first over `children`. An absent or `null` root yields an empty set.
/// Input must be a finite tree.
pub fn collect_image_node_ids(root: Option<&Value>) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_image_node_ids_into(root, &mut ids);
    ids
}

/// Same walk as [`collect_image_node_ids`], accumulating into `ids`.
pub fn collect_image_node_ids_into(node: Option<&Value>, ids: &mut HashSet<String>) {
    if let Some(node) = NodeRef::from_value(node) {
        walk(node, ids);
    }
}

/// Image node ids of a whole file response, read from its `document` field.
pub fn image_node_ids_of_file(file: &Value) -> HashSet<String> {
    collect_image_node_ids(file.get("document"))
}

/// Set contents in a stable order, for requests and responses.
pub fn sorted_ids(ids: &HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = ids.iter().cloned().collect();
    sorted.sort();
    sorted
}

fn walk(node: NodeRef<'_>, ids: &mut HashSet<String>) {
    if node.fills().any(|fill| fill.is_image()) {
        if let Some(id) = node.id() {
            ids.insert(id.to_string());
        }
    }

    for child in node.children() {
        walk(child, ids);
    }
}
