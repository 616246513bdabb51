//! Kind inference for nodes the traversal is about to create or coerce.

use tracing::debug;

use crate::document::NodeKind;

/// Decides what kind an as-yet-nonexistent node should be created as, given
/// the remaining path `tail` and an optional `hint` (typically the current
/// kind of an existing node, or the kind a replacement wants to force).
///
/// - empty tail, no hint: the path terminates here, so a `Scalar` leaf
/// - empty tail with hint: the hint verbatim
/// - next segment is `+` or an integer: the child must be a `Sequence`
/// - next segment is `*` with a container hint: splatting keeps the hint
/// - anything else: a `Mapping`
///
/// # Example
///
/// ```
/// use yamlnav::document::NodeKind;
/// use yamlnav::navigate::guess_kind;
///
/// let tail = vec!["0".to_string()];
/// assert_eq!(guess_kind(&tail, None), NodeKind::Sequence);
/// assert_eq!(guess_kind(&[], None), NodeKind::Scalar);
/// ```
pub fn guess_kind(tail: &[String], hint: Option<NodeKind>) -> NodeKind {
    let head = match tail.first() {
        None => {
            debug!(?hint, "end of path");
            return hint.unwrap_or(NodeKind::Scalar);
        }
        Some(segment) => segment.as_str(),
    };
    if head == "+" || head.parse::<i64>().is_ok() {
        return NodeKind::Sequence;
    }
    if head == "*" {
        match hint {
            Some(kind @ NodeKind::Sequence) | Some(kind @ NodeKind::Mapping) => return kind,
            _ => {}
        }
    }
    NodeKind::Mapping
}
