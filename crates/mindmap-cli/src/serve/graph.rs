//! Graph building logic for the visualization server.
//!
//! This module handles the conversion from a [`MindMap`] to the graph
//! format expected by Sigma.js/Graphology.

use mindmap_core::MindMap;

use super::models::{GraphData, GraphEdge, GraphNode, NodeAttributes};
use crate::palette::category_color;

// =============================================================================
// Node Styling
// =============================================================================

const BASE_SIZE: u32 = 6;
const MAX_SIZE: u32 = 18;

/// Node size grows with the number of connections, capped at `MAX_SIZE`.
fn node_size(degree: usize) -> u32 {
    let degree = u32::try_from(degree).unwrap_or(u32::MAX);
    BASE_SIZE.saturating_add(degree.saturating_mul(2)).min(MAX_SIZE)
}

// =============================================================================
// Graph Builder
// =============================================================================

/// Builder for constructing graph data from a mind map.
pub struct GraphBuilder {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl GraphBuilder {
    /// Create a new graph builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Build graph data from a mind map.
    pub fn build_from_map(self, map: &MindMap) -> GraphData {
        let mut builder = self;

        builder.load_topics(map);
        builder.load_edges(map);

        GraphData {
            nodes: builder.nodes,
            edges: builder.edges,
        }
    }

    /// One node per topic, in topic order.
    fn load_topics(&mut self, map: &MindMap) {
        for name in map.all_topics() {
            let category = map.category_of(name).unwrap_or_default();
            let degree = map.neighbors_of(name).map(|n| n.len()).unwrap_or(0)
                + map.predecessors_of(name).map(|p| p.len()).unwrap_or(0);
            let has_note = map.note_of(name).is_some_and(|n| !n.is_empty());

            self.nodes.push(GraphNode {
                key: name.to_string(),
                attributes: NodeAttributes {
                    label: name.to_string(),
                    category: category.display_name().to_string(),
                    color: category_color(category).to_string(),
                    size: node_size(degree),
                    has_note,
                },
            });
        }
    }

    fn load_edges(&mut self, map: &MindMap) {
        for (parent, child) in map.edges() {
            self.edges.push(GraphEdge {
                source: parent.to_string(),
                target: child.to_string(),
            });
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmap_core::Category;

    #[test]
    fn test_empty_map_builds_empty_graph() {
        let data = GraphBuilder::new().build_from_map(&MindMap::new());
        assert!(data.nodes.is_empty());
        assert!(data.edges.is_empty());
    }

    #[test]
    fn test_nodes_follow_topic_order() {
        let mut map = MindMap::new();
        map.add_topic("Rust", Category::Language).unwrap();
        map.add_topic("Tokio", Category::Library).unwrap();
        map.add_topic("Axum", Category::Framework).unwrap();

        let data = GraphBuilder::new().build_from_map(&map);
        let keys: Vec<&str> = data.nodes.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["Rust", "Tokio", "Axum"]);
    }

    #[test]
    fn test_node_attributes() {
        let mut map = MindMap::new();
        map.add_topic("Rust", Category::Language).unwrap();
        map.add_topic("Tokio", Category::Library).unwrap();
        map.connect("Rust", "Tokio").unwrap();
        map.set_note("Rust", "systems language").unwrap();

        let data = GraphBuilder::new().build_from_map(&map);
        let rust = &data.nodes[0].attributes;
        assert_eq!(rust.label, "Rust");
        assert_eq!(rust.category, "Language");
        assert_eq!(rust.color, "#87CEEB");
        assert_eq!(rust.size, BASE_SIZE + 2);
        assert!(rust.has_note);
        assert!(!data.nodes[1].attributes.has_note);
    }

    #[test]
    fn test_edges_carry_direction() {
        let mut map = MindMap::new();
        map.add_topic("A", Category::Other).unwrap();
        map.add_topic("B", Category::Other).unwrap();
        map.connect("A", "B").unwrap();

        let data = GraphBuilder::new().build_from_map(&map);
        assert_eq!(data.edges.len(), 1);
        assert_eq!(data.edges[0].source, "A");
        assert_eq!(data.edges[0].target, "B");
    }

    #[test]
    fn test_node_size_is_capped() {
        assert_eq!(node_size(0), BASE_SIZE);
        assert_eq!(node_size(100), MAX_SIZE);
    }
}
