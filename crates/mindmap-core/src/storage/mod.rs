mod error;
mod file;

pub use error::StorageError;
pub use file::FileStorage;

use crate::graph::MindMap;

/// Trait for mind map storage backends.
///
/// Implementations persist a whole map at once; there is no partial
/// update.
pub trait Storage {
    /// Loads the stored map.
    fn load(&self) -> Result<MindMap, StorageError>;

    /// Replaces the stored map with `map`.
    fn save(&self, map: &MindMap) -> Result<(), StorageError>;

    /// Returns true if something has been stored.
    fn exists(&self) -> bool;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}
