// tests/property_tests.rs
//
// Randomized checks of the navigation round-trip guarantees, over paths made
// of plain lowercase keys (no wildcard, append, or index segments).

use proptest::prelude::*;
use yamlnav::document::Node;
use yamlnav::navigate;

fn key_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 1..4)
}

proptest! {
    #[test]
    fn prop_update_then_get_round_trips(path in key_path(), value in "[a-zA-Z0-9 ]{0,12}") {
        let mut root = Node::document(Node::mapping(vec![]));
        let replacement = Node::scalar(value.clone());

        navigate::update(&mut root, &path, &replacement).unwrap();
        let found = navigate::get(&mut root, &path).unwrap().unwrap();

        prop_assert_eq!(found.kind, replacement.kind);
        prop_assert_eq!(found.value, value);
        prop_assert_eq!(found.content, replacement.content);
    }

    #[test]
    fn prop_delete_removes_created_entry(path in key_path(), value in "[a-z0-9]{0,8}") {
        let mut root = Node::document(Node::mapping(vec![]));
        navigate::update(&mut root, &path, &Node::scalar(value)).unwrap();
        navigate::delete(&mut root, &path).unwrap();

        let (last, container_path) = path.split_last().unwrap();
        let container = navigate::get(&mut root, container_path).unwrap().unwrap();
        prop_assert!(container.mapping_value(last).is_none());
    }

    #[test]
    fn prop_append_always_grows(count in 1usize..5) {
        let mut root = Node::document(Node::sequence(vec![]));
        let path = vec!["+".to_string()];
        for i in 0..count {
            navigate::update(&mut root, &path, &Node::scalar(i.to_string())).unwrap();
        }
        prop_assert_eq!(root.content[0].content.len(), count);
    }
}
