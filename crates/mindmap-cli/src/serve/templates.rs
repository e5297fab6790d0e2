//! HTML template rendering for the mind map editor.
//!
//! Templates are stored as separate files for maintainability:
//! - `templates/index.html` - HTML structure
//! - `templates/styles.css` - CSS styles
//! - `templates/app.js` - JavaScript application code
//!
//! Files are embedded at compile time using `include_str!`.

use crate::palette::HIGHLIGHT_COLOR;

// Embed template files at compile time
const HTML_TEMPLATE: &str = include_str!("templates/index.html");
const STYLES: &str = include_str!("templates/styles.css");
const SCRIPT: &str = include_str!("templates/app.js");

/// Render the editor page.
///
/// Assembles the final HTML by substituting placeholders in the template:
/// - `{{TITLE}}` - Display name of the mind map file
/// - `{{STYLES}}` - CSS styles
/// - `{{SCRIPT}}` - JavaScript code
///
/// `{{HIGHLIGHT_COLOR}}` may appear in the script, so it is replaced last.
pub fn render_graph_page(title: &str) -> String {
    HTML_TEMPLATE
        .replace("{{TITLE}}", &html_escape(title))
        .replace("{{STYLES}}", STYLES)
        .replace("{{SCRIPT}}", SCRIPT)
        .replace("{{HIGHLIGHT_COLOR}}", HIGHLIGHT_COLOR)
}

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
