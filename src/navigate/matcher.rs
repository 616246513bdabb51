//! Key matching for mapping entries.

use crate::document::Node;

/// Decides whether a path segment matches a mapping key.
///
/// A segment ending in `*` strips the marker and prefix-tests the key; a
/// bare `*` therefore matches every key. Any other segment requires exact
/// equality.
///
/// # Example
///
/// ```
/// use yamlnav::navigate::matches_key;
///
/// assert!(matches_key("name", "name"));
/// assert!(matches_key("na*", "name"));
/// assert!(matches_key("*", "anything"));
/// assert!(!matches_key("na*", "enable"));
/// ```
pub fn matches_key(segment: &str, actual: &str) -> bool {
    match segment.strip_suffix('*') {
        Some(prefix) => actual.starts_with(prefix),
        None => segment == actual,
    }
}

/// Collects the content indices of every key slot matching `segment`.
///
/// Keys sit at the even indices of a mapping's flattened content. The
/// indices come back ascending; delete relies on walking them in reverse.
pub(crate) fn matching_key_indices(content: &[Node], segment: &str) -> Vec<usize> {
    (0..content.len())
        .step_by(2)
        .filter(|&index| matches_key(segment, &content[index].value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(matches_key("name", "name"));
        assert!(!matches_key("name", "names"));
        assert!(!matches_key("names", "name"));
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        assert!(!matches_key("Name", "name"));
    }

    #[test]
    fn test_prefix_match() {
        assert!(matches_key("a*", "apple"));
        assert!(matches_key("a*", "a"));
        assert!(!matches_key("a*", "banana"));
    }

    #[test]
    fn test_bare_wildcard_matches_everything() {
        assert!(matches_key("*", "anything"));
        assert!(matches_key("*", ""));
    }

    #[test]
    fn test_matching_key_indices_skips_value_slots() {
        // {apple: ant, ant: b} - the value "ant" at index 1 must not match.
        let content = vec![
            Node::scalar("apple"),
            Node::scalar("ant"),
            Node::scalar("ant"),
            Node::scalar("b"),
        ];
        assert_eq!(matching_key_indices(&content, "a*"), vec![0, 2]);
        assert_eq!(matching_key_indices(&content, "ant"), vec![2]);
        assert!(matching_key_indices(&content, "b").is_empty());
    }
}
