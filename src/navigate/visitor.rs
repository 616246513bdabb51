//! The recursive traversal engine.
//!
//! [`visit`] walks a tree one path segment at a time, dispatching on the
//! current node's kind and the current segment, and invokes a caller-supplied
//! callback on every node the path addresses. Missing mapping keys and
//! `+`-addressed sequence elements are created on the way down, and a child
//! whose kind disagrees with what the remaining path implies is reset in
//! place to an empty node of the inferred kind. All operations share this
//! engine, so even a read can restructure the tree.

use tracing::debug;

use super::error::NavigateError;
use super::infer::guess_kind;
use super::matcher::matching_key_indices;
use crate::document::{Node, NodeKind};

/// Callback invoked on every node a path addresses.
///
/// Returning an error aborts the traversal immediately; mutations already
/// applied by earlier matches stay in place.
pub type Visitor<'a> = dyn FnMut(&mut Node) -> Result<(), NavigateError> + 'a;

/// Walks `path` from `node`, invoking `visitor` on every addressed node.
///
/// A `Document` node is unwrapped to its single child before anything else
/// (one level only, not reapplied recursively). An empty path addresses the
/// (unwrapped) node itself.
pub fn visit(node: &mut Node, path: &[String], visitor: &mut Visitor) -> Result<(), NavigateError> {
    let node = match node.kind {
        NodeKind::Document => match node.content.first_mut() {
            Some(child) => child,
            None => return Ok(()),
        },
        _ => node,
    };
    match path.split_first() {
        Some((head, tail)) => {
            debug!(segment = %head, kind = ?node.kind, "diving into segment");
            recurse(node, head, tail, visitor)
        }
        None => visitor(node),
    }
}

fn recurse(
    node: &mut Node,
    head: &str,
    tail: &[String],
    visitor: &mut Visitor,
) -> Result<(), NavigateError> {
    match node.kind {
        NodeKind::Mapping => {
            if head == "*" {
                splat_mapping(node, tail, visitor)
            } else {
                recurse_mapping(node, head, tail, visitor)
            }
        }
        NodeKind::Sequence => {
            if head == "*" {
                splat_sequence(node, tail, visitor)
            } else if head == "+" {
                append_sequence(node, tail, visitor)
            } else {
                recurse_sequence(node, head, tail, visitor)
            }
        }
        // Path ran past a leaf: no match, no error.
        _ => Ok(()),
    }
}

/// Resets `node` in place to an empty node of `expected` kind if its current
/// kind disagrees. Destructive: existing content under the node is dropped.
fn coerce_kind(node: &mut Node, expected: NodeKind) {
    if node.kind != expected {
        debug!(wanted = ?expected, was = ?node.kind, "kind mismatch, replacing node");
        *node = Node::new(expected);
    }
}

fn splat_mapping(
    node: &mut Node,
    tail: &[String],
    visitor: &mut Visitor,
) -> Result<(), NavigateError> {
    debug!(entries = node.content.len() / 2, "splatting mapping");
    // Value slots sit at the odd indices of the flattened content.
    let len = node.content.len();
    let mut index = 1;
    while index < len {
        let expected = guess_kind(tail, Some(node.content[index].kind));
        coerce_kind(&mut node.content[index], expected);
        visit(&mut node.content[index], tail, visitor)?;
        index += 2;
    }
    Ok(())
}

fn recurse_mapping(
    node: &mut Node,
    head: &str,
    tail: &[String],
    visitor: &mut Visitor,
) -> Result<(), NavigateError> {
    // Matches are collected against the current entries up front, so
    // mutation while visiting cannot shift what counts as a match.
    let matches = matching_key_indices(&node.content, head);
    if matches.is_empty() {
        // A true miss: vivify the entry and dive into its fresh value node.
        debug!(key = %head, "no matching key, adding new entry");
        node.content.push(Node::scalar(head));
        node.content.push(Node::new(guess_kind(tail, None)));
        let last = node.content.len() - 1;
        return visit(&mut node.content[last], tail, visitor);
    }
    for index in matches {
        let expected = guess_kind(tail, Some(node.content[index + 1].kind));
        coerce_kind(&mut node.content[index + 1], expected);
        visit(&mut node.content[index + 1], tail, visitor)?;
    }
    Ok(())
}

fn splat_sequence(
    node: &mut Node,
    tail: &[String],
    visitor: &mut Visitor,
) -> Result<(), NavigateError> {
    debug!(elements = node.content.len(), "splatting sequence");
    let len = node.content.len();
    for index in 0..len {
        let expected = guess_kind(tail, Some(node.content[index].kind));
        coerce_kind(&mut node.content[index], expected);
        visit(&mut node.content[index], tail, visitor)?;
    }
    Ok(())
}

fn append_sequence(
    node: &mut Node,
    tail: &[String],
    visitor: &mut Visitor,
) -> Result<(), NavigateError> {
    // "+" always adds exactly one element; it never matches existing ones.
    debug!("appending new sequence element");
    node.content.push(Node::new(guess_kind(tail, None)));
    let last = node.content.len() - 1;
    visit(&mut node.content[last], tail, visitor)
}

fn recurse_sequence(
    node: &mut Node,
    head: &str,
    tail: &[String],
    visitor: &mut Visitor,
) -> Result<(), NavigateError> {
    let index: usize = head
        .parse()
        .map_err(|source| NavigateError::invalid_index(head, source))?;
    if index >= node.content.len() {
        // Sequences do not auto-extend via a bare index.
        debug!(index, len = node.content.len(), "index out of range, nothing to do");
        return Ok(());
    }
    let expected = guess_kind(tail, Some(node.content[index].kind));
    coerce_kind(&mut node.content[index], expected);
    visit(&mut node.content[index], tail, visitor)
}
