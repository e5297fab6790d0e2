//! Display colours for categories.
//!
//! Presentation only: the model never looks at these.

use mindmap_core::Category;

/// Colour for anything without an explicit entry.
pub const DEFAULT_COLOR: &str = "#D3D3D3";

/// Colour used to highlight search hits.
pub const HIGHLIGHT_COLOR: &str = "#FFD700";

/// Get the hex fill colour for a category.
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Language => "#87CEEB",      // SkyBlue
        Category::Framework => "#98FB98",     // PaleGreen
        Category::Tool => "#F08080",          // LightCoral
        Category::Lesson => "#FFE4B5",        // Moccasin
        Category::Subject => "#FFFFE0",       // LightYellow
        Category::Library => "#FFB6C1",       // LightPink
        Category::Project => "#E0FFFF",       // LightCyan
        Category::Concept => "#20B2AA",       // LightSeaGreen
        Category::Method => "#DDA0DD",        // Plum
        Category::Database => "#B0C4DE",      // LightSteelBlue
        Category::DatabaseType => "#D2B48C",  // Tan
        Category::IdeaHub => "#CD5C5C",       // IndianRed
        Category::QueryLanguage => "#9370DB", // MediumPurple
        Category::Area => "#FFA500",          // Orange
        Category::Technology => "#8A2BE2",    // BlueViolet
        Category::Process => "#C0C0C0",       // Silver
        Category::Protocol => "#DAA520",      // GoldenRod
        Category::Component => "#CD853F",     // Peru
        Category::Field => "#708090",         // SlateGray
        Category::Other => DEFAULT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_colors() {
        assert_eq!(category_color(Category::Language), "#87CEEB");
        assert_eq!(category_color(Category::QueryLanguage), "#9370DB");
    }

    #[test]
    fn test_unrecognized_label_gets_default() {
        assert_eq!(category_color(Category::from_label("Nonsense")), DEFAULT_COLOR);
    }
}
