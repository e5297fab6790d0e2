use std::collections::HashSet;

use mindmap_core::{Category, Connection, GraphError, MindMap, TopicRole};

fn set<'a>(items: Vec<&'a str>) -> HashSet<&'a str> {
    items.into_iter().collect()
}

#[test]
fn test_duplicate_topic_rejected() {
    let mut map = MindMap::new();
    map.add_topic("Python", Category::Language).unwrap();

    let err = map.add_topic("Python", Category::Tool).unwrap_err();
    assert_eq!(err, GraphError::DuplicateTopic("Python".to_string()));
    assert_eq!(map.topic_count(), 1);
    assert_eq!(map.category_of("Python"), Some(Category::Language));
}

#[test]
fn test_name_with_space_rejected() {
    let mut map = MindMap::new();

    let err = map.add_topic("Web Dev", Category::Tool).unwrap_err();
    assert_eq!(err, GraphError::InvalidName("Web Dev".to_string()));
    assert!(map.is_empty());
}

#[test]
fn test_empty_name_rejected() {
    let mut map = MindMap::new();
    assert_eq!(map.add_topic("", Category::Other), Err(GraphError::EmptyName));
}

#[test]
fn test_unrecognized_category_defaults_to_other() {
    let mut map = MindMap::new();
    map.add_topic("Thing", Category::from_label("")).unwrap();
    map.add_topic("Other", Category::from_label("Gizmo")).unwrap();
    assert_eq!(map.category_of("Thing"), Some(Category::Other));
    assert_eq!(map.category_of("Other"), Some(Category::Other));
    assert_eq!(map.note_of("Thing"), Some(""));
}

#[test]
fn test_reverse_connection_rejected() {
    let mut map = MindMap::new();
    map.add_topic("A", Category::Other).unwrap();
    map.add_topic("B", Category::Other).unwrap();

    assert_eq!(map.connect("A", "B").unwrap(), Connection::Connected);
    let err = map.connect("B", "A").unwrap_err();
    assert_eq!(
        err,
        GraphError::ReverseExists {
            parent: "B".to_string(),
            child: "A".to_string(),
        }
    );
    assert_eq!(map.edge_count(), 1);
    assert!(!map.has_edge("B", "A"));
}

#[test]
fn test_repeat_connection_is_noop() {
    let mut map = MindMap::new();
    map.add_topic("A", Category::Other).unwrap();
    map.add_topic("B", Category::Other).unwrap();

    map.connect("A", "B").unwrap();
    assert_eq!(map.connect("A", "B").unwrap(), Connection::AlreadyConnected);
    assert_eq!(map.edge_count(), 1);
}

#[test]
fn test_connect_missing_input() {
    let mut map = MindMap::new();
    map.add_topic("A", Category::Other).unwrap();
    assert_eq!(map.connect("A", " "), Err(GraphError::MissingInput));
    assert_eq!(map.connect("", "A"), Err(GraphError::MissingInput));
}

#[test]
fn test_connect_names_missing_side() {
    let mut map = MindMap::new();
    map.add_topic("A", Category::Other).unwrap();

    let err = map.connect("A", "Ghost").unwrap_err();
    assert_eq!(
        err,
        GraphError::TopicNotFound {
            role: TopicRole::Child,
            name: "Ghost".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Child topic 'Ghost' does not exist");
}

#[test]
fn test_rename_preserves_topology() {
    let mut map = MindMap::new();
    for name in ["A", "X", "Y", "P"] {
        map.add_topic(name, Category::Concept).unwrap();
    }
    map.connect("A", "X").unwrap();
    map.connect("A", "Y").unwrap();
    map.connect("P", "A").unwrap();
    map.set_note("A", "root idea").unwrap();
    map.set_category("A", Category::IdeaHub).unwrap();

    map.rename_topic("A", "A2").unwrap();

    assert_eq!(set(map.neighbors_of("A2").unwrap()), set(vec!["X", "Y"]));
    assert_eq!(map.predecessors_of("A2").unwrap(), vec!["P"]);
    assert!(!map.contains("A"));
    assert_eq!(map.predecessors_of("X").unwrap(), vec!["A2"]);
    assert_eq!(map.predecessors_of("Y").unwrap(), vec!["A2"]);
    assert_eq!(map.neighbors_of("P").unwrap(), vec!["A2"]);
    assert_eq!(map.note_of("A2"), Some("root idea"));
    assert_eq!(map.category_of("A2"), Some(Category::IdeaHub));
    assert!(map.note_of("A").is_none());
    assert!(map.category_of("A").is_none());
    assert_eq!(map.edge_count(), 3);
}

#[test]
fn test_failed_rename_leaves_map_untouched() {
    let mut map = MindMap::new();
    map.add_topic("A", Category::Other).unwrap();
    map.add_topic("B", Category::Other).unwrap();
    map.connect("A", "B").unwrap();

    assert!(map.rename_topic("A", "B").is_err());
    assert!(map.rename_topic("A", "has space").is_err());
    assert!(map.rename_topic("Ghost", "C").unwrap_err().is_not_found());

    assert_eq!(map.all_topics(), vec!["A", "B"]);
    assert_eq!(map.edges(), vec![("A", "B")]);
}

#[test]
fn test_delete_cascades() {
    let mut map = MindMap::new();
    for name in ["Hub", "Left", "Right", "Up"] {
        map.add_topic(name, Category::Area).unwrap();
    }
    map.connect("Hub", "Left").unwrap();
    map.connect("Hub", "Right").unwrap();
    map.connect("Up", "Hub").unwrap();
    map.set_note("Hub", "center").unwrap();

    map.delete_topic("Hub").unwrap();

    assert!(!map.contains("Hub"));
    for name in ["Left", "Right", "Up"] {
        assert!(!map.neighbors_of(name).unwrap().contains(&"Hub"));
        assert!(!map.predecessors_of(name).unwrap().contains(&"Hub"));
    }
    assert!(map.category_of("Hub").is_none());
    assert!(map.note_of("Hub").is_none());
    assert_eq!(map.edge_count(), 0);
}

#[test]
fn test_delete_missing_topic() {
    let mut map = MindMap::new();
    let err = map.delete_topic("Ghost").unwrap_err();
    assert_eq!(
        err,
        GraphError::TopicNotFound {
            role: TopicRole::Target,
            name: "Ghost".to_string(),
        }
    );
}

#[test]
fn test_set_note_overwrites_and_trims() {
    let mut map = MindMap::new();
    map.add_topic("Rust", Category::Language).unwrap();

    map.set_note("Rust", "first").unwrap();
    map.set_note("Rust", "  second\n").unwrap();
    assert_eq!(map.note_of("Rust"), Some("second"));

    assert!(map.set_note("Ghost", "x").unwrap_err().is_not_found());
}

#[test]
fn test_queries_on_missing_topic() {
    let map = MindMap::new();
    assert!(map.neighbors_of("Ghost").unwrap_err().is_not_found());
    assert!(map.predecessors_of("Ghost").unwrap_err().is_not_found());
}

#[test]
fn test_worked_example() {
    let mut map = MindMap::new();

    map.add_topic("Python", Category::from_label("Language")).unwrap();
    map.add_topic("Flask", Category::from_label("Framework")).unwrap();
    assert_eq!(map.connect("Python", "Flask").unwrap(), Connection::Connected);
    assert!(matches!(
        map.connect("Flask", "Python"),
        Err(GraphError::ReverseExists { .. })
    ));

    map.rename_topic("Python", "Py").unwrap();
    assert_eq!(map.neighbors_of("Py").unwrap(), vec!["Flask"]);

    map.delete_topic("Flask").unwrap();
    assert!(map.neighbors_of("Py").unwrap().is_empty());
}

#[test]
fn test_padded_document_names_are_reachable() {
    let mut map = mindmap_core::codec::from_json_str(
        r#"{"nodes": [" A", "B", "C"], "edges": [[" A", "B"]], "notes": {" A": "hi"}}"#,
    )
    .unwrap();
    assert!(map.contains(" A"));
    assert!(map.has_edge(" A", "B"));
    assert_eq!(map.topic(" A").unwrap().successors, vec!["B".to_string()]);

    map.connect(" A", "C").unwrap();
    assert_eq!(set(map.neighbors_of(" A").unwrap()), set(vec!["B", "C"]));

    map.rename_topic(" A", "A").unwrap();
    assert!(!map.all_topics().contains(&" A"));
    assert_eq!(map.note_of("A"), Some("hi"));
    assert_eq!(set(map.neighbors_of("A").unwrap()), set(vec!["B", "C"]));

    let mut other = mindmap_core::codec::from_json_str(r#"{"nodes": [" A", "B"], "edges": [[" A", "B"]]}"#)
        .unwrap();
    other.delete_topic(" A").unwrap();
    assert_eq!(other.all_topics(), vec!["B"]);
    assert!(other.predecessors_of("B").unwrap().is_empty());
}
