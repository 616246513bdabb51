//! Document tree node representation.
//!
//! A parsed document is a tree of [`Node`]s. Each node carries a [`NodeKind`]
//! tag plus presentation metadata (style and comments) that the navigation
//! engine preserves but never interprets. Mappings store their entries as a
//! flattened alternating key/value list in `content`, which keeps insertion
//! order significant for round-tripping.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::{Node, NodeKind};
//!
//! let root = Node::document(Node::mapping(vec![
//!     (Node::scalar("name"), Node::scalar("yamlnav")),
//!     (Node::scalar("version"), Node::scalar("0.1.0")),
//! ]));
//!
//! assert_eq!(root.kind, NodeKind::Document);
//! assert_eq!(root.content[0].kind, NodeKind::Mapping);
//! // Flattened key/value layout: keys at even indices, values at odd.
//! assert_eq!(root.content[0].content.len(), 4);
//! assert_eq!(root.content[0].content[0].value, "name");
//! ```

/// The kind of a document tree node.
///
/// This is a closed set: the traversal engine matches on it exhaustively, so
/// adding a kind forces every traversal branch to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A leaf value; the node's `value` string is its payload.
    Scalar,
    /// An ordered list; each `content` entry is one element.
    Sequence,
    /// A key/value container; `content` alternates key and value nodes.
    Mapping,
    /// The tree root wrapper; holds exactly one child in `content`.
    Document,
}

/// Presentation style of a node in the source document.
///
/// Carried opaquely through structural operations and copied wholesale by
/// update; the navigation engine never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStyle {
    #[default]
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
    Flow,
}

/// One element of the in-memory document tree.
///
/// Fields are public because the engine's operations mutate matched nodes in
/// place: a node's identity is its slot in the parent's `content`, and update
/// rewrites the fields of that slot rather than replacing it, so references
/// held by callers (e.g. indices into a container) stay valid.
///
/// Invariants:
///
/// - a `Mapping`'s `content` length is always even
/// - a `Document` holds exactly one `content` entry
/// - mapping keys (even `content` indices) are always `Scalar`
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// String payload, meaningful only for `Scalar` nodes.
    pub value: String,
    /// Type tag from the source format (e.g. `!!str`); carried opaquely.
    pub tag: String,
    pub style: NodeStyle,
    pub head_comment: String,
    pub line_comment: String,
    pub foot_comment: String,
    /// Owned children; layout depends on `kind` (see module docs).
    pub content: Vec<Node>,
}

impl Node {
    /// Creates a bare, empty node of the given kind.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnav::document::{Node, NodeKind};
    ///
    /// let node = Node::new(NodeKind::Sequence);
    /// assert!(node.content.is_empty());
    /// assert!(node.value.is_empty());
    /// ```
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: String::new(),
            tag: String::new(),
            style: NodeStyle::default(),
            head_comment: String::new(),
            line_comment: String::new(),
            foot_comment: String::new(),
            content: Vec::new(),
        }
    }

    /// Creates a scalar node holding the given value.
    pub fn scalar(value: impl Into<String>) -> Self {
        let mut node = Node::new(NodeKind::Scalar);
        node.value = value.into();
        node
    }

    /// Creates a sequence node from its elements.
    pub fn sequence(items: Vec<Node>) -> Self {
        let mut node = Node::new(NodeKind::Sequence);
        node.content = items;
        node
    }

    /// Creates a mapping node from key/value pairs, flattening them into the
    /// alternating `content` layout.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnav::document::Node;
    ///
    /// let map = Node::mapping(vec![(Node::scalar("a"), Node::scalar("1"))]);
    /// assert_eq!(map.content.len(), 2);
    /// ```
    pub fn mapping(pairs: Vec<(Node, Node)>) -> Self {
        let mut node = Node::new(NodeKind::Mapping);
        node.content.reserve(pairs.len() * 2);
        for (key, value) in pairs {
            node.content.push(key);
            node.content.push(value);
        }
        node
    }

    /// Creates a document node wrapping a single child.
    pub fn document(child: Node) -> Self {
        let mut node = Node::new(NodeKind::Document);
        node.content.push(child);
        node
    }

    /// Returns true if this node is a scalar.
    pub fn is_scalar(&self) -> bool {
        self.kind == NodeKind::Scalar
    }

    /// Returns true if this node is a sequence.
    pub fn is_sequence(&self) -> bool {
        self.kind == NodeKind::Sequence
    }

    /// Returns true if this node is a mapping.
    pub fn is_mapping(&self) -> bool {
        self.kind == NodeKind::Mapping
    }

    /// Returns true if this node can hold addressed children.
    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Sequence | NodeKind::Mapping)
    }

    /// Overwrites every field of this node from `other`, leaving the node's
    /// slot in its parent untouched.
    ///
    /// This is the whole of update's effect on a matched node: kind, value,
    /// tag, style, content, and all three comments are copied wholesale.
    pub fn overwrite_from(&mut self, other: &Node) {
        self.kind = other.kind;
        self.value = other.value.clone();
        self.tag = other.tag.clone();
        self.style = other.style;
        self.head_comment = other.head_comment.clone();
        self.line_comment = other.line_comment.clone();
        self.foot_comment = other.foot_comment.clone();
        self.content = other.content.clone();
    }

    /// Iterates a mapping's `(key, value)` pairs in insertion order.
    ///
    /// Yields nothing for non-mapping nodes.
    pub fn mapping_pairs(&self) -> impl Iterator<Item = (&Node, &Node)> {
        let entries = if self.kind == NodeKind::Mapping {
            self.content.as_slice()
        } else {
            &[]
        };
        entries.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Looks up a mapping value by exact key.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnav::document::Node;
    ///
    /// let map = Node::mapping(vec![(Node::scalar("a"), Node::scalar("1"))]);
    /// assert_eq!(map.mapping_value("a").unwrap().value, "1");
    /// assert!(map.mapping_value("b").is_none());
    /// ```
    pub fn mapping_value(&self, key: &str) -> Option<&Node> {
        self.mapping_pairs()
            .find(|(k, _)| k.value == key)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = Node::new(NodeKind::Mapping);
        assert_eq!(node.kind, NodeKind::Mapping);
        assert!(node.value.is_empty());
        assert!(node.tag.is_empty());
        assert_eq!(node.style, NodeStyle::Plain);
        assert!(node.content.is_empty());
    }

    #[test]
    fn test_scalar_constructor() {
        let node = Node::scalar("hello");
        assert_eq!(node.kind, NodeKind::Scalar);
        assert_eq!(node.value, "hello");
    }

    #[test]
    fn test_mapping_flattens_pairs() {
        let map = Node::mapping(vec![
            (Node::scalar("a"), Node::scalar("1")),
            (Node::scalar("b"), Node::scalar("2")),
        ]);
        assert_eq!(map.content.len(), 4);
        assert_eq!(map.content[0].value, "a");
        assert_eq!(map.content[1].value, "1");
        assert_eq!(map.content[2].value, "b");
        assert_eq!(map.content[3].value, "2");
    }

    #[test]
    fn test_document_wraps_single_child() {
        let doc = Node::document(Node::scalar("x"));
        assert_eq!(doc.kind, NodeKind::Document);
        assert_eq!(doc.content.len(), 1);
    }

    #[test]
    fn test_overwrite_from_copies_every_field() {
        let mut target = Node::scalar("old");
        target.line_comment = "stale".to_string();

        let mut replacement = Node::sequence(vec![Node::scalar("a")]);
        replacement.tag = "!!seq".to_string();
        replacement.style = NodeStyle::Flow;
        replacement.head_comment = "head".to_string();
        replacement.line_comment = "line".to_string();
        replacement.foot_comment = "foot".to_string();

        target.overwrite_from(&replacement);
        assert_eq!(target, replacement);
    }

    #[test]
    fn test_mapping_pairs_iterates_in_order() {
        let map = Node::mapping(vec![
            (Node::scalar("a"), Node::scalar("1")),
            (Node::scalar("b"), Node::scalar("2")),
        ]);
        let keys: Vec<&str> = map.mapping_pairs().map(|(k, _)| k.value.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_mapping_pairs_empty_for_non_mapping() {
        let seq = Node::sequence(vec![Node::scalar("a")]);
        assert_eq!(seq.mapping_pairs().count(), 0);
    }
}
