//! Flat JSON representation of a mind map.
//!
//! ```json
//! {
//!   "nodes": ["Python", "Flask"],
//!   "edges": [["Python", "Flask"]],
//!   "categories": {"Python": "Language", "Flask": "Framework"},
//!   "notes": {"Flask": "micro framework"}
//! }
//! ```
//!
//! `nodes` and `edges` are required. `categories` and `notes` may be
//! omitted. Decoding checks shape and that every edge names a listed node;
//! it does not re-apply the naming or edge-exclusivity rules of
//! [`MindMap`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;
use crate::graph::MindMap;

/// Codec errors.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed mind map document: {0}")]
    MalformedDocument(String),

    #[error("Failed to encode mind map: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMapDocument {
    pub nodes: Vec<String>,
    pub edges: Vec<[String; 2]>,
    #[serde(default)]
    pub categories: BTreeMap<String, Category>,
    #[serde(default)]
    pub notes: BTreeMap<String, String>,
}

/// Captures the full state of a map.
///
/// Every topic gets a `categories` entry; only non-empty notes are written.
pub fn serialize(map: &MindMap) -> MindMapDocument {
    let edges = map
        .edges()
        .into_iter()
        .map(|(parent, child)| [parent.to_string(), child.to_string()])
        .collect();

    let mut nodes = Vec::with_capacity(map.topic_count());
    let mut categories = BTreeMap::new();
    let mut notes = BTreeMap::new();
    for (name, category, note) in map.entries() {
        nodes.push(name.to_string());
        categories.insert(name.to_string(), category);
        if !note.is_empty() {
            notes.insert(name.to_string(), note.to_string());
        }
    }

    MindMapDocument {
        nodes,
        edges,
        categories,
        notes,
    }
}

/// Builds a fresh map from a document.
///
/// Fails if an edge names a topic missing from `nodes`. Repeated nodes and
/// edges collapse to one; metadata for unlisted topics is ignored.
pub fn deserialize(document: MindMapDocument) -> Result<MindMap, CodecError> {
    let MindMapDocument {
        nodes,
        edges,
        mut categories,
        mut notes,
    } = document;

    let mut map = MindMap::new();
    for name in &nodes {
        let category = categories.remove(name).unwrap_or_default();
        let note = notes.remove(name).unwrap_or_default();
        map.insert_unchecked(name, category, note);
    }

    for [parent, child] in &edges {
        if !map.link_unchecked(parent, child) {
            let missing = if map.contains(parent) { child } else { parent };
            return Err(CodecError::MalformedDocument(format!(
                "edge [{parent}, {child}] references unknown topic '{missing}'"
            )));
        }
    }

    Ok(map)
}

/// Encodes a map as JSON text.
pub fn to_json_string(map: &MindMap, pretty: bool) -> Result<String, CodecError> {
    let document = serialize(map);
    let encoded = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    encoded.map_err(CodecError::Encode)
}

/// Decodes a map from JSON text.
pub fn from_json_str(text: &str) -> Result<MindMap, CodecError> {
    let document: MindMapDocument = serde_json::from_str(text)
        .map_err(|e| CodecError::MalformedDocument(e.to_string()))?;
    deserialize(document)
}

impl From<&MindMap> for MindMapDocument {
    fn from(map: &MindMap) -> Self {
        serialize(map)
    }
}

impl TryFrom<MindMapDocument> for MindMap {
    type Error = CodecError;

    fn try_from(document: MindMapDocument) -> Result<Self, Self::Error> {
        deserialize(document)
    }
}
