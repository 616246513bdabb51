//! Path navigation and in-place mutation for YAML document trees.
//!
//! yamlnav takes a parsed document tree and an already-tokenized path
//! expression and locates, creates, updates, or deletes the addressed
//! node(s), auto-creating missing intermediate structure as needed (a tree
//! analogue of `mkdir -p`). Parsing path strings into segments and
//! (de)serializing documents are left to external collaborators; the engine
//! only ever sees a [`document::Node`] tree and a slice of path segments.
//!
//! # Path segments
//!
//! Each segment of a path is one of:
//!
//! - an exact mapping key, e.g. `"name"`
//! - a prefix-wildcard key ending in `*`, e.g. `"env*"`
//! - the full wildcard `*`, matching every entry of a container
//! - the append marker `+`, always creating a new sequence element
//! - a base-10 integer, addressing a sequence element by position
//!
//! # Example
//!
//! ```
//! use yamlnav::document::Node;
//! use yamlnav::navigate;
//!
//! let mut root = Node::document(Node::mapping(vec![]));
//! let path: Vec<String> = vec!["spring".into(), "profile".into()];
//!
//! // Auto-vivifies the intermediate mapping, then writes the scalar.
//! navigate::update(&mut root, &path, &Node::scalar("dev")).unwrap();
//!
//! let found = navigate::get(&mut root, &path).unwrap().unwrap();
//! assert_eq!(found.value, "dev");
//! ```

pub mod document;
pub mod navigate;
