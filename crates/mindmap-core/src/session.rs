use thiserror::Error;
use tracing::{debug, info};

use crate::category::Category;
use crate::graph::{Connection, GraphError, MindMap};
use crate::storage::{Storage, StorageError};

/// Owns the open mind map and the storage it came from.
///
/// This is the one context callers hold: every mutation goes through it,
/// and it tracks whether there are unsaved changes. Wholesale replacement
/// (reload, load from another file) builds the new map first and swaps it
/// in only once loading succeeded.
pub struct MindMapSession<S: Storage> {
    map: MindMap,
    storage: S,
    dirty: bool,
}

impl<S: Storage> MindMapSession<S> {
    /// Creates a session with an empty map backed by `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            map: MindMap::new(),
            storage,
            dirty: false,
        }
    }

    /// Opens `storage`, loading its map if one has been saved.
    pub fn open(storage: S) -> Result<Self, SessionError> {
        let map = if storage.exists() {
            storage.load()?
        } else {
            debug!(location = %storage.location(), "no saved mind map, starting empty");
            MindMap::new()
        };

        Ok(Self {
            map,
            storage,
            dirty: false,
        })
    }

    /// Read access to the current map.
    pub fn map(&self) -> &MindMap {
        &self.map
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True if there are changes not yet saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Adds a topic.
    pub fn add_topic(&mut self, name: &str, category: Category) -> Result<(), SessionError> {
        self.map.add_topic(name, category)?;
        self.dirty = true;
        info!(topic = name.trim(), %category, "topic added");
        Ok(())
    }

    /// Connects two topics.
    pub fn connect(&mut self, parent: &str, child: &str) -> Result<Connection, SessionError> {
        let outcome = self.map.connect(parent, child)?;
        match outcome {
            Connection::Connected => {
                self.dirty = true;
                info!(parent = parent.trim(), child = child.trim(), "topics connected");
            }
            Connection::AlreadyConnected => {
                debug!(parent = parent.trim(), child = child.trim(), "already connected");
            }
        }
        Ok(outcome)
    }

    /// Renames a topic.
    pub fn rename_topic(&mut self, old_name: &str, new_name: &str) -> Result<(), SessionError> {
        self.map.rename_topic(old_name, new_name)?;
        self.dirty = true;
        info!(from = old_name.trim(), to = new_name.trim(), "topic renamed");
        Ok(())
    }

    /// Deletes a topic and its connections.
    pub fn delete_topic(&mut self, name: &str) -> Result<(), SessionError> {
        self.map.delete_topic(name)?;
        self.dirty = true;
        info!(topic = name.trim(), "topic deleted");
        Ok(())
    }

    /// Replaces a topic's note.
    pub fn set_note(&mut self, name: &str, text: &str) -> Result<(), SessionError> {
        self.map.set_note(name, text)?;
        self.dirty = true;
        info!(topic = name.trim(), "note saved");
        Ok(())
    }

    /// Replaces a topic's category.
    pub fn set_category(&mut self, name: &str, category: Category) -> Result<(), SessionError> {
        self.map.set_category(name, category)?;
        self.dirty = true;
        info!(topic = name.trim(), %category, "category changed");
        Ok(())
    }

    /// Clears the map.
    pub fn reset(&mut self) {
        self.map.reset();
        self.dirty = true;
        info!("mind map cleared");
    }

    /// Writes the map to the session's storage.
    pub fn save(&mut self) -> Result<(), SessionError> {
        self.storage.save(&self.map)?;
        self.dirty = false;
        info!(location = %self.storage.location(), "mind map saved");
        Ok(())
    }

    /// Writes the map to `storage` and makes it the session's storage.
    pub fn save_to(&mut self, storage: S) -> Result<(), SessionError> {
        storage.save(&self.map)?;
        self.storage = storage;
        self.dirty = false;
        info!(location = %self.storage.location(), "mind map saved");
        Ok(())
    }

    /// Discards the in-memory map and loads it again from storage.
    pub fn reload(&mut self) -> Result<(), SessionError> {
        let map = self.storage.load()?;
        self.replace(map);
        self.dirty = false;
        info!(location = %self.storage.location(), "mind map loaded");
        Ok(())
    }

    /// Loads the map stored in `storage` and switches the session to it.
    pub fn load_from(&mut self, storage: S) -> Result<(), SessionError> {
        let map = storage.load()?;
        self.storage = storage;
        self.replace(map);
        self.dirty = false;
        info!(location = %self.storage.location(), "mind map loaded");
        Ok(())
    }

    /// Swaps in an already-built map.
    pub fn replace(&mut self, map: MindMap) {
        self.map = map;
        self.dirty = true;
    }
}

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStorage;
    use tempfile::TempDir;

    fn create_test_session() -> (MindMapSession<FileStorage>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("map.json"));
        let session = MindMapSession::open(storage).unwrap();
        (session, temp_dir)
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let (session, _temp) = create_test_session();
        assert!(session.map().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_failed_mutation_stays_clean() {
        let (mut session, _temp) = create_test_session();
        assert!(session.add_topic("Web Dev", Category::Tool).is_err());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_already_connected_stays_clean() {
        let (mut session, _temp) = create_test_session();
        session.add_topic("A", Category::Other).unwrap();
        session.add_topic("B", Category::Other).unwrap();
        session.connect("A", "B").unwrap();
        session.save().unwrap();

        let outcome = session.connect("A", "B").unwrap();
        assert_eq!(outcome, Connection::AlreadyConnected);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_reload_discards_changes() {
        let (mut session, _temp) = create_test_session();
        session.add_topic("Kept", Category::Concept).unwrap();
        session.save().unwrap();

        session.add_topic("Dropped", Category::Concept).unwrap();
        session.reload().unwrap();

        assert!(session.map().contains("Kept"));
        assert!(!session.map().contains("Dropped"));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_failed_reload_keeps_map() {
        let (mut session, _temp) = create_test_session();
        session.add_topic("Unsaved", Category::Other).unwrap();

        let err = session.reload().unwrap_err();
        assert!(matches!(err, SessionError::Storage(StorageError::NotFound(_))));
        assert!(session.map().contains("Unsaved"));
    }
}
