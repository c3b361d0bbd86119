//! Response parsing.
//!
//! - [`Node`]: a generic tree mirroring the XML document
//! - [`normalize`]: validity check, error extraction, and item normalization
//! - [`ItemsShape`]: the one-or-many `Item` node, resolved at the parse boundary

mod normalizer;
mod tree;

pub use normalizer::{normalize, rejection_from_error_document, ItemsShape};
pub use tree::{DocumentError, Node};
