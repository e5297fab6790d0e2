//! Local web server for viewing and editing the mind map.
//!
//! Provides a browser-based single-page UI using Sigma.js (WebGL renderer)
//! and Graphology (graph data structure) with a ForceAtlas2 layout. Every
//! edit made in the page is sent to the JSON API and applied to the
//! session's [`MindMap`](mindmap_core::MindMap); layout stays in the
//! browser.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API request/response types (DTOs)
//! - `error` - mapping of model errors to HTTP responses
//! - `graph` - Graph building logic
//! - `templates` - HTML/CSS/JS template rendering

mod error;
mod graph;
mod handlers;
mod models;
mod templates;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use color_eyre::eyre::WrapErr;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use mindmap_core::{FileStorage, MindMapSession, ServeConfig, Storage};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
///
/// Writers take the lock exclusively, so reset and reload are never seen
/// half done.
pub struct AppState {
    /// The open mind map and its file.
    pub session: RwLock<MindMapSession<FileStorage>>,
}

impl AppState {
    pub fn new(session: MindMapSession<FileStorage>) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Build the router with all page and API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Main page - Sigma.js graph editor
        .route("/", get(handlers::index))
        // Read API
        .route("/api/graph", get(handlers::api_graph))
        .route("/api/status", get(handlers::api_status))
        .route("/api/categories", get(handlers::api_categories))
        .route("/api/search", get(handlers::api_search))
        // Topic API
        .route("/api/topics", post(handlers::api_add_topic))
        .route(
            "/api/topics/{name}",
            get(handlers::api_topic).delete(handlers::api_delete_topic),
        )
        .route("/api/topics/{name}/note", put(handlers::api_set_note))
        .route("/api/topics/{name}/category", put(handlers::api_set_category))
        .route("/api/topics/{name}/rename", post(handlers::api_rename_topic))
        .route("/api/connections", post(handlers::api_connect))
        // Whole-map API
        .route("/api/reset", post(handlers::api_reset))
        .route("/api/save", post(handlers::api_save))
        .route("/api/reload", post(handlers::api_reload))
        // CORS for API access
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Start the server and block until it stops.
pub async fn start_server(
    config: &ServeConfig,
    session: MindMapSession<FileStorage>,
) -> color_eyre::Result<()> {
    let location = session.storage().location();
    let state = Arc::new(AppState::new(session));
    let app = router(state);

    let addr = config.bind_addr();
    let url = format!("http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;

    info!(%url, file = %location, "visualization server started");
    println!("Mind map: {}", location);
    println!("Dashboard: {}", url);
    println!("Press Ctrl+C to stop\n");

    if config.open_browser {
        if let Err(e) = open::that(&url) {
            warn!("Could not open browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}
