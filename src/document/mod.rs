//! The in-memory document tree model.
//!
//! Everything the navigation engine touches is a [`Node`]. Trees are
//! typically produced by an external markup parser and handed to the
//! [`crate::navigate`] operations, which mutate them in place.

pub mod node;

pub use node::{Node, NodeKind, NodeStyle};
