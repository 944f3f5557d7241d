//! Figma document tree walkers.
//!
//! The document is never deserialized into a fixed schema: only `id`, `type`,
//! `name`, `characters`, `fills` and `children` are read, and anything else
//! (or anything of an unexpected shape) is ignored.

mod collect;
mod node;
mod summary;

pub use collect::{
    collect_image_node_ids, collect_image_node_ids_into, image_node_ids_of_file, sorted_ids,
};
pub use node::{FillRef, NodeRef};
pub use summary::{ColorEntry, DesignSummary, Rgb, TextEntry};
