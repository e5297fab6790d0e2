use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a topic, used for grouping and display colouring.
///
/// The set is closed. Labels that do not name a variant (including the
/// empty string) resolve to [`Category::Other`] instead of failing, so a
/// hand-edited or older document always loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Language,
    Framework,
    Tool,
    Lesson,
    Subject,
    Library,
    Project,
    Concept,
    Method,
    Database,
    DatabaseType,
    IdeaHub,
    QueryLanguage,
    Area,
    Technology,
    Process,
    Protocol,
    Component,
    Field,
    #[default]
    Other,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 20] = [
        Category::Language,
        Category::Framework,
        Category::Tool,
        Category::Lesson,
        Category::Subject,
        Category::Library,
        Category::Project,
        Category::Concept,
        Category::Method,
        Category::Database,
        Category::DatabaseType,
        Category::IdeaHub,
        Category::QueryLanguage,
        Category::Area,
        Category::Technology,
        Category::Process,
        Category::Protocol,
        Category::Component,
        Category::Field,
        Category::Other,
    ];

    /// Returns the label used in documents and in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Language => "Language",
            Category::Framework => "Framework",
            Category::Tool => "Tool",
            Category::Lesson => "Lesson",
            Category::Subject => "Subject",
            Category::Library => "Library",
            Category::Project => "Project",
            Category::Concept => "Concept",
            Category::Method => "Method",
            Category::Database => "Database",
            Category::DatabaseType => "Database Type",
            Category::IdeaHub => "Idea Hub",
            Category::QueryLanguage => "Query Language",
            Category::Area => "Area",
            Category::Technology => "Technology",
            Category::Process => "Process",
            Category::Protocol => "Protocol",
            Category::Component => "Component",
            Category::Field => "Field",
            Category::Other => "Other",
        }
    }

    /// Resolves a label to a category, falling back to `Other`.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn from_label(label: &str) -> Category {
        let label = label.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(label))
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::from_label(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.display_name().to_string()
    }
}
