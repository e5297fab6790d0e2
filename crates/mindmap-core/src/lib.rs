//! Core library for mindmap.
//!
//! A mind map is a small directed graph of named topics. Each topic has a
//! [`Category`] and a free-text note. [`MindMap`] enforces the graph rules,
//! [`codec`] turns it into flat JSON, [`storage`] puts that JSON on disk and
//! [`MindMapSession`] ties a map to its storage for callers.

pub mod category;
pub mod codec;
pub mod config;
pub mod graph;
pub mod session;
pub mod storage;

pub use category::Category;
pub use codec::{CodecError, MindMapDocument};
pub use config::{Config, ConfigError, LoggingConfig, ServeConfig, StorageConfig};
pub use graph::{Connection, GraphError, MindMap, TopicRole, TopicView};
pub use session::{MindMapSession, SessionError};
pub use storage::{FileStorage, Storage, StorageError};
