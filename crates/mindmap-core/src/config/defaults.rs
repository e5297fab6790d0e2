//! Default values for mindmap configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Storage Defaults
// ============================================================================

/// Mind map file used when none is given.
pub const DEFAULT_MINDMAP_FILE: &str = "mindmap.json";

/// Whether saved JSON is indented.
pub const DEFAULT_PRETTY_JSON: bool = true;

// ============================================================================
// Server Defaults
// ============================================================================

/// Address the visualization server binds to.
pub const DEFAULT_SERVE_HOST: &str = "127.0.0.1";

/// Port the visualization server listens on.
pub const DEFAULT_SERVE_PORT: u16 = 3333;

/// Whether `serve` opens a browser tab.
pub const DEFAULT_OPEN_BROWSER: bool = true;

// ============================================================================
// Logging Defaults
// ============================================================================

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "mindmap=info,mindmap_core=info";

// ============================================================================
// Config File Locations
// ============================================================================

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "mindmap.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "mindmap";

/// File name inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.toml";
