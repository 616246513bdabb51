//! Path navigation and in-place mutation over document trees.
//!
//! This module is the query/mutation core: given a tree root and a tokenized
//! path, [`visit`] walks the tree one segment at a time, auto-vivifying
//! missing structure, and the operations [`get`], [`update`], and [`delete`]
//! decide what happens at every node the path addresses.
//!
//! Absence is not an error here. A sequence index past the end, a path that
//! runs past a scalar, and a zero-match get are all silent no-ops; only an
//! unparsable sequence index ([`NavigateError::InvalidIndex`]) or a failing
//! visitor callback ([`NavigateError::Callback`]) aborts a traversal.

pub mod error;
pub mod infer;
pub mod matcher;
pub mod ops;
pub mod visitor;

pub use error::NavigateError;
pub use infer::guess_kind;
pub use matcher::matches_key;
pub use ops::{delete, get, update};
pub use visitor::{visit, Visitor};
