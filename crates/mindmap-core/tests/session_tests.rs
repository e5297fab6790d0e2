use mindmap_core::{
    Category, Connection, FileStorage, GraphError, MindMapSession, SessionError, Storage,
};
use tempfile::TempDir;

fn create_test_session() -> (MindMapSession<FileStorage>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::new(temp_dir.path().join("map.json"));
    let session = MindMapSession::open(storage).unwrap();
    (session, temp_dir)
}

#[test]
fn test_mutations_mark_dirty() {
    let (mut session, _temp) = create_test_session();

    session.add_topic("Rust", Category::Language).unwrap();
    assert!(session.is_dirty());

    session.save().unwrap();
    assert!(!session.is_dirty());

    session.set_note("Rust", "ownership").unwrap();
    assert!(session.is_dirty());
}

#[test]
fn test_graph_errors_pass_through() {
    let (mut session, _temp) = create_test_session();
    session.add_topic("A", Category::Other).unwrap();
    session.add_topic("B", Category::Other).unwrap();
    session.connect("A", "B").unwrap();

    let err = session.connect("B", "A").unwrap_err();
    assert!(matches!(
        err,
        SessionError::Graph(GraphError::ReverseExists { .. })
    ));
}

#[test]
fn test_save_then_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("map.json");

    let mut session = MindMapSession::open(FileStorage::new(&path)).unwrap();
    session.add_topic("Python", Category::Language).unwrap();
    session.add_topic("Flask", Category::Framework).unwrap();
    assert_eq!(session.connect("Python", "Flask").unwrap(), Connection::Connected);
    session.set_note("Flask", "web framework").unwrap();
    session.save().unwrap();

    let reopened = MindMapSession::open(FileStorage::new(&path)).unwrap();
    assert_eq!(reopened.map().neighbors_of("Python").unwrap(), vec!["Flask"]);
    assert_eq!(reopened.map().note_of("Flask"), Some("web framework"));
}

#[test]
fn test_reset_then_save() {
    let (mut session, _temp) = create_test_session();
    session.add_topic("Temp", Category::Other).unwrap();
    session.save().unwrap();

    session.reset();
    assert!(session.map().is_empty());
    session.save().unwrap();

    assert!(session.storage().load().unwrap().is_empty());
}

#[test]
fn test_save_to_and_load_from() {
    let temp_dir = TempDir::new().unwrap();
    let first = FileStorage::new(temp_dir.path().join("first.json"));
    let second = FileStorage::new(temp_dir.path().join("second.json"));

    let mut session = MindMapSession::new(first.clone());
    session.add_topic("Only", Category::Subject).unwrap();
    session.save_to(second.clone()).unwrap();
    assert_eq!(session.storage().path(), second.path());
    assert!(!first.exists());

    let mut other = MindMapSession::new(first);
    other.load_from(second).unwrap();
    assert!(other.map().contains("Only"));
    assert!(!other.is_dirty());
}
