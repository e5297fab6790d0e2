//! Graphviz DOT export.
//!
//! Produces a `digraph` with nodes filled by category colour. Render it
//! with e.g. `dot -Tpng mindmap.dot -o mindmap.png`.

use std::fmt::Write;

use mindmap_core::MindMap;

use crate::palette::category_color;

/// Render the map as a DOT document.
pub fn to_dot(map: &MindMap) -> String {
    let mut out = String::new();
    out.push_str("digraph mindmap {\n");
    out.push_str("  rankdir=TB;\n");
    out.push_str("  node [shape=ellipse, style=filled, fontname=\"Helvetica\", fontsize=10];\n");

    for name in map.all_topics() {
        let category = map.category_of(name).unwrap_or_default();
        let note = map.note_of(name).unwrap_or_default();
        let tooltip = if note.is_empty() {
            category.to_string()
        } else {
            format!("{category}: {note}")
        };
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "  {} [fillcolor=\"{}\", tooltip={}];",
            quote(name),
            category_color(category),
            quote(&tooltip)
        );
    }

    for (parent, child) in map.edges() {
        let _ = writeln!(out, "  {} -> {};", quote(parent), quote(child));
    }

    out.push_str("}\n");
    out
}

/// Quote a DOT identifier.
fn quote(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmap_core::Category;

    #[test]
    fn test_dot_output() {
        let mut map = MindMap::new();
        map.add_topic("Python", Category::Language).unwrap();
        map.add_topic("Flask", Category::Framework).unwrap();
        map.connect("Python", "Flask").unwrap();
        map.set_note("Flask", "say \"hi\"").unwrap();

        let dot = to_dot(&map);
        assert!(dot.starts_with("digraph mindmap {"));
        assert!(dot.contains("\"Python\" [fillcolor=\"#87CEEB\", tooltip=\"Language\"];"));
        assert!(dot.contains("tooltip=\"Framework: say \\\"hi\\\"\""));
        assert!(dot.contains("\"Python\" -> \"Flask\";"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_empty_map() {
        let dot = to_dot(&MindMap::new());
        assert_eq!(dot.lines().count(), 4);
    }
}
