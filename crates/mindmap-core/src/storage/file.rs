use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec;
use crate::config::StorageConfig;
use crate::graph::MindMap;

use super::error::StorageError;
use super::Storage;

/// JSON file storage.
///
/// Saves go to a sibling `.<name>.tmp` file which is then renamed over the
/// target, so a crash mid-write never leaves a truncated mind map behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    pretty: bool,
}

impl FileStorage {
    /// Creates a FileStorage for `path` with pretty-printed output.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Creates a FileStorage from configuration.
    pub fn with_config(config: &StorageConfig) -> Self {
        Self {
            path: PathBuf::from(&config.file),
            pretty: config.pretty,
        }
    }

    /// Returns the path of the mind map file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the temporary file used while saving.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mindmap.json".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    /// Ensures the parent directory exists.
    fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<MindMap, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::NotFound(self.path.clone()));
        }

        let json = fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let map = codec::from_json_str(&json)?;

        debug!(path = %self.path.display(), topics = map.topic_count(), "loaded mind map");
        Ok(map)
    }

    fn save(&self, map: &MindMap) -> Result<(), StorageError> {
        self.ensure_parent_dir()?;

        let json = codec::to_json_string(map, self.pretty)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| StorageError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::io(&self.path, e));
        }

        debug!(path = %self.path.display(), topics = map.topic_count(), "saved mind map");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
