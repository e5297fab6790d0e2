//! API request and response models for the mind map server.
//!
//! These are Data Transfer Objects (DTOs) that define the shape of
//! JSON bodies exchanged with the frontend.

use serde::{Deserialize, Serialize};

// =============================================================================
// Graph Data Models (for Sigma.js/Graphology)
// =============================================================================

/// Full graph data response for `/api/graph`.
#[derive(Debug, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// A node in the graph visualization.
#[derive(Debug, Serialize)]
pub struct GraphNode {
    /// Topic name; unique.
    pub key: String,
    /// Visual and metadata attributes.
    pub attributes: NodeAttributes,
}

/// Node attributes for rendering and display.
#[derive(Debug, Serialize)]
pub struct NodeAttributes {
    /// Display label for the node.
    pub label: String,
    /// Category label.
    /// Note: This is NOT Sigma's render type.
    pub category: String,
    /// Hex color for rendering.
    pub color: String,
    /// Node size in pixels.
    pub size: u32,
    /// Whether the topic has a note.
    pub has_note: bool,
}

/// A connection in the graph visualization.
#[derive(Debug, Serialize)]
pub struct GraphEdge {
    /// Parent topic.
    pub source: String,
    /// Child topic.
    pub target: String,
}

// =============================================================================
// Topic Models
// =============================================================================

/// Details for a picked topic, `/api/topics/{name}`.
#[derive(Debug, Serialize)]
pub struct TopicDetails {
    pub key: String,
    pub category: String,
    pub color: String,
    pub note: String,
    /// Topics this one leads to.
    pub successors: Vec<String>,
    /// Topics leading to this one.
    pub predecessors: Vec<String>,
}

/// Body of `POST /api/topics`.
#[derive(Debug, Deserialize)]
pub struct AddTopicRequest {
    pub name: String,
    /// Category label; blank or unknown means "Other".
    #[serde(default)]
    pub category: String,
}

/// Body of `POST /api/connections`.
#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    pub parent: String,
    pub child: String,
}

/// Body of `POST /api/topics/{name}/rename`.
#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub new_name: String,
}

/// Body of `PUT /api/topics/{name}/note`.
#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub note: String,
}

/// Body of `PUT /api/topics/{name}/category`.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category: String,
}

/// Outcome of a mutating request.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    /// Machine-readable outcome, e.g. `"added"` or `"already_connected"`.
    pub status: &'static str,
    /// Message to show the user.
    pub message: String,
}

impl ActionResponse {
    pub fn new(status: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

// =============================================================================
// Map-level Models
// =============================================================================

/// Response of `/api/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub file: String,
    pub dirty: bool,
    pub topics: usize,
    pub edges: usize,
}

/// One palette entry for `/api/categories`.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub color: &'static str,
    /// At least one topic has this category.
    pub used: bool,
}

// =============================================================================
// Search Models (for `/api/search`)
// =============================================================================

/// Query parameters for search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search query string.
    pub q: String,
    /// Maximum number of results.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    20
}

/// A single search hit.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub key: String,
    pub category: String,
    pub color: String,
    /// The topic name equals the query.
    pub exact: bool,
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
