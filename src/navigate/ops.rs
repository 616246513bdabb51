//! The operations built on the traversal engine: get, update, delete.

use tracing::debug;

use super::error::NavigateError;
use super::matcher::matching_key_indices;
use super::visitor::visit;
use crate::document::{Node, NodeKind};

/// Collects every node `path` addresses under `root`.
///
/// Zero matches is absence, not an error: the result is `None`. A single
/// match comes back as a copy of that node; multiple matches come back
/// wrapped in a synthetic `Sequence` node, in visitation order. The wrapper
/// is caller-owned and not attached to the tree.
///
/// Get shares the vivifying traversal with the mutating operations, so it
/// takes `&mut Node` and can itself create missing mapping entries or coerce
/// mismatched-kind nodes along the way. This is intentional, long-standing
/// behavior; see the crate's DESIGN notes before changing it.
pub fn get(root: &mut Node, path: &[String]) -> Result<Option<Node>, NavigateError> {
    let mut matches: Vec<Node> = Vec::new();
    visit(root, path, &mut |matched| {
        debug!(kind = ?matched.kind, value = %matched.value, "matched");
        matches.push(matched.clone());
        Ok(())
    })?;
    debug!(count = matches.len(), "finished traversal");
    if matches.len() <= 1 {
        return Ok(matches.pop());
    }
    let mut wrapper = Node::new(NodeKind::Sequence);
    wrapper.content = matches;
    Ok(Some(wrapper))
}

/// Overwrites every node `path` addresses with `replacement`'s fields.
///
/// The matched node's slot in its parent is untouched; only its fields
/// (kind, value, tag, style, content, comments) change. A path that
/// addresses nothing is vivified first, so update has upsert semantics.
pub fn update(root: &mut Node, path: &[String], replacement: &Node) -> Result<(), NavigateError> {
    visit(root, path, &mut |matched| {
        debug!(kind = ?matched.kind, "updating matched node");
        matched.overwrite_from(replacement);
        Ok(())
    })
}

/// Removes what the final path segment addresses from every container the
/// rest of the path matches.
///
/// For a sequence container the final segment must be a base-10 index
/// ([`NavigateError::InvalidIndex`] otherwise); an out-of-bounds index is a
/// no-op. For a mapping container every matching key is removed together
/// with its value. Other container kinds, and an empty path, are no-ops.
pub fn delete(root: &mut Node, path: &[String]) -> Result<(), NavigateError> {
    let Some((target, container_path)) = path.split_last() else {
        return Ok(());
    };
    debug!(target = %target, "deleting from matched containers");
    visit(root, container_path, &mut |container| {
        remove_target(container, target)
    })
}

fn remove_target(container: &mut Node, target: &str) -> Result<(), NavigateError> {
    match container.kind {
        NodeKind::Sequence => {
            let index: usize = target
                .parse()
                .map_err(|source| NavigateError::invalid_index(target, source))?;
            if index >= container.content.len() {
                debug!(index, len = container.content.len(), "index out of range, nothing to delete");
                return Ok(());
            }
            container.content.remove(index);
            Ok(())
        }
        NodeKind::Mapping => {
            let matches = matching_key_indices(&container.content, target);
            // Highest-first: removing a pair shifts every later index.
            for index in matches.into_iter().rev() {
                debug!(index, key = %container.content[index].value, "removing entry");
                container.content.drain(index..index + 2);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
