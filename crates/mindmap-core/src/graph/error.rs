use std::fmt;

use thiserror::Error;

/// Which argument of an operation named a topic that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicRole {
    Parent,
    Child,
    /// The current name passed to a rename.
    Old,
    /// The topic an operation acts on directly (delete, note, queries).
    Target,
}

impl fmt::Display for TopicRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TopicRole::Parent => "Parent topic",
            TopicRole::Child => "Child topic",
            TopicRole::Old => "Topic",
            TopicRole::Target => "Topic",
        };
        f.write_str(s)
    }
}

/// Validation failures of mind map operations.
///
/// A failed operation never changes the map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Topic cannot be empty")]
    EmptyName,

    #[error("Topic name should not contain spaces: '{0}'")]
    InvalidName(String),

    #[error("Topic '{0}' already exists")]
    DuplicateTopic(String),

    #[error("{role} '{name}' does not exist")]
    TopicNotFound { role: TopicRole, name: String },

    #[error("Both topic names are required")]
    MissingInput,

    #[error("Cannot connect '{parent}' to '{child}' because '{child}' is already connected to '{parent}'")]
    ReverseExists { parent: String, child: String },

    #[error("Cannot connect topic '{0}' to itself")]
    SelfLoop(String),
}

impl GraphError {
    pub(crate) fn not_found(role: TopicRole, name: &str) -> Self {
        GraphError::TopicNotFound {
            role,
            name: name.to_string(),
        }
    }

    /// True for errors caused by a name that is not in the map.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::TopicNotFound { .. })
    }
}
