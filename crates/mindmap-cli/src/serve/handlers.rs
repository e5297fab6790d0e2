//! HTTP route handlers for the mind map server.
//!
//! Handlers are kept thin: they take the session lock, call one session
//! operation and shape the result. Edits change the in-memory map only;
//! `POST /api/save` writes it to disk.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};

use mindmap_core::{Category, Connection, Storage};

use super::error::ApiError;
use super::graph::GraphBuilder;
use super::models::{
    ActionResponse, AddTopicRequest, CategoryInfo, CategoryRequest, ConnectRequest, GraphData,
    NoteRequest, RenameRequest, SearchQuery, SearchResult, StatusResponse, TopicDetails,
};
use super::templates;
use super::AppState;
use crate::palette::category_color;

type ApiResult<T> = Result<Json<T>, ApiError>;

// =============================================================================
// Page Handlers
// =============================================================================

/// GET `/` - Editor page with Sigma.js graph visualization.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let session = state.session.read().await;
    let title = session
        .storage()
        .path()
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Mind Map")
        .to_string();
    Html(templates::render_graph_page(&title))
}

// =============================================================================
// Read API
// =============================================================================

/// GET `/api/graph` - Returns the full mind map for Sigma.js/Graphology.
///
/// Response format:
/// ```json
/// {
///   "nodes": [{"key": "Rust", "attributes": {"label": "Rust", "category": "Language", ...}}],
///   "edges": [{"source": "Rust", "target": "Tokio"}]
/// }
/// ```
pub async fn api_graph(State(state): State<Arc<AppState>>) -> Json<GraphData> {
    let session = state.session.read().await;
    Json(GraphBuilder::new().build_from_map(session.map()))
}

/// GET `/api/status` - File location, unsaved flag and counts.
pub async fn api_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let session = state.session.read().await;
    Json(StatusResponse {
        file: session.storage().location(),
        dirty: session.is_dirty(),
        topics: session.map().topic_count(),
        edges: session.map().edge_count(),
    })
}

/// GET `/api/categories` - The palette, flagged with which categories are in use.
pub async fn api_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryInfo>> {
    let session = state.session.read().await;
    let used = session.map().used_categories();
    let infos = Category::ALL
        .into_iter()
        .map(|category| CategoryInfo {
            name: category.display_name(),
            color: category_color(category),
            used: used.contains(&category),
        })
        .collect();
    Json(infos)
}

/// GET `/api/search` - Find topics by name.
///
/// Query parameters:
/// - `q`: Search query string (required)
/// - `limit`: Maximum results (default: 20)
pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<SearchResult>> {
    let session = state.session.read().await;
    let map = session.map();
    let query = params.q.trim();

    let results = map
        .search(query)
        .into_iter()
        .take(params.limit)
        .map(|name| {
            let category = map.category_of(name).unwrap_or_default();
            SearchResult {
                key: name.to_string(),
                category: category.display_name().to_string(),
                color: category_color(category).to_string(),
                exact: name == query,
            }
        })
        .collect();

    Json(results)
}

/// GET `/api/topics/{name}` - Details for a picked topic.
pub async fn api_topic(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<TopicDetails> {
    let session = state.session.read().await;
    let topic = session
        .map()
        .topic(&name)
        .ok_or_else(|| ApiError::not_found(format!("Topic '{}' does not exist", name.trim())))?;

    Ok(Json(TopicDetails {
        key: topic.name,
        category: topic.category.display_name().to_string(),
        color: category_color(topic.category).to_string(),
        note: topic.note,
        successors: topic.successors,
        predecessors: topic.predecessors,
    }))
}

// =============================================================================
// Topic API
// =============================================================================

/// POST `/api/topics` - Add a topic.
pub async fn api_add_topic(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddTopicRequest>,
) -> Result<(StatusCode, Json<ActionResponse>), ApiError> {
    let category = Category::from_label(&req.category);
    let mut session = state.session.write().await;
    session.add_topic(&req.name, category)?;

    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new(
            "added",
            format!("Topic '{}' added with category '{}'.", req.name.trim(), category),
        )),
    ))
}

/// DELETE `/api/topics/{name}` - Delete a topic and its connections.
pub async fn api_delete_topic(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<ActionResponse> {
    let mut session = state.session.write().await;
    session.delete_topic(&name)?;
    Ok(Json(ActionResponse::new(
        "deleted",
        format!("Topic '{}' deleted.", name.trim()),
    )))
}

/// PUT `/api/topics/{name}/note` - Replace a topic's note.
pub async fn api_set_note(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<NoteRequest>,
) -> ApiResult<ActionResponse> {
    let mut session = state.session.write().await;
    session.set_note(&name, &req.note)?;
    Ok(Json(ActionResponse::new(
        "noted",
        format!("Note saved for '{}'.", name.trim()),
    )))
}

/// PUT `/api/topics/{name}/category` - Change a topic's category.
pub async fn api_set_category(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<CategoryRequest>,
) -> ApiResult<ActionResponse> {
    let category = Category::from_label(&req.category);
    let mut session = state.session.write().await;
    session.set_category(&name, category)?;
    Ok(Json(ActionResponse::new(
        "categorized",
        format!("Topic '{}' is now '{}'.", name.trim(), category),
    )))
}

/// POST `/api/topics/{name}/rename` - Rename a topic, keeping its connections.
pub async fn api_rename_topic(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<RenameRequest>,
) -> ApiResult<ActionResponse> {
    let mut session = state.session.write().await;
    session.rename_topic(&name, &req.new_name)?;
    Ok(Json(ActionResponse::new(
        "renamed",
        format!("Topic '{}' renamed to '{}'.", name.trim(), req.new_name.trim()),
    )))
}

/// POST `/api/connections` - Connect a parent topic to a child topic.
pub async fn api_connect(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConnectRequest>,
) -> ApiResult<ActionResponse> {
    let mut session = state.session.write().await;
    let parent = req.parent.trim();
    let child = req.child.trim();

    let response = match session.connect(parent, child)? {
        Connection::Connected => ActionResponse::new(
            "connected",
            format!("Connected '{}' to '{}'.", parent, child),
        ),
        Connection::AlreadyConnected => ActionResponse::new(
            "already_connected",
            format!("'{}' is already connected to '{}'.", parent, child),
        ),
    };
    Ok(Json(response))
}

// =============================================================================
// Whole-map API
// =============================================================================

/// POST `/api/reset` - Remove every topic.
pub async fn api_reset(State(state): State<Arc<AppState>>) -> Json<ActionResponse> {
    let mut session = state.session.write().await;
    session.reset();
    Json(ActionResponse::new("reset", "Mind map cleared."))
}

/// POST `/api/save` - Write the map to its file.
pub async fn api_save(State(state): State<Arc<AppState>>) -> ApiResult<ActionResponse> {
    let mut session = state.session.write().await;
    session.save()?;
    Ok(Json(ActionResponse::new(
        "saved",
        format!("Mind map saved to {}.", session.storage().location()),
    )))
}

/// POST `/api/reload` - Discard unsaved edits and load the file again.
pub async fn api_reload(State(state): State<Arc<AppState>>) -> ApiResult<ActionResponse> {
    let mut session = state.session.write().await;
    session.reload()?;
    Ok(Json(ActionResponse::new(
        "loaded",
        format!("Mind map loaded from {}.", session.storage().location()),
    )))
}
