//! The topic graph: topics, directed connections, categories and notes.
//!
//! [`MindMap`] is the single aggregate that owns all of this state. Every
//! mutation validates its input first and only then touches the graph, so a
//! failed call leaves the map exactly as it was.
//!
//! # Ordering
//!
//! - [`MindMap::all_topics`] lists topics in insertion order. A renamed
//!   topic is re-inserted, so it moves to the end.
//! - [`MindMap::neighbors_of`] and [`MindMap::predecessors_of`] list in the
//!   order the connections were made.
//! - [`MindMap::edges`] walks topics in order and lists each one's outgoing
//!   connections.

mod error;

pub use error::{GraphError, TopicRole};

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;
use serde::Serialize;

use crate::category::Category;

/// Outcome of a successful [`MindMap::connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// A new edge was added.
    Connected,
    /// The edge already existed; nothing changed.
    AlreadyConnected,
}

/// Node weight. Category and note live on the node so they disappear
/// with it.
#[derive(Debug, Clone)]
struct TopicNode {
    name: String,
    category: Category,
    note: String,
    /// Insertion sequence, used for stable topic ordering.
    seq: u64,
}

/// Details of one topic, as shown when a user picks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicView {
    pub name: String,
    pub category: Category,
    pub note: String,
    pub successors: Vec<String>,
    pub predecessors: Vec<String>,
}

/// A labeled directed graph of topics.
#[derive(Debug, Clone, Default)]
pub struct MindMap {
    graph: StableDiGraph<TopicNode, ()>,
    indices: HashMap<String, NodeIndex>,
    next_seq: u64,
}

impl MindMap {
    /// Creates an empty mind map.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a topic with the given category and an empty note.
    pub fn add_topic(&mut self, name: &str, category: Category) -> Result<(), GraphError> {
        let name = name.trim();
        validate_name(name)?;
        if self.contains(name) {
            return Err(GraphError::DuplicateTopic(name.to_string()));
        }

        self.insert_node(name, category, String::new());
        Ok(())
    }

    /// Connects `parent` to `child`.
    ///
    /// Fails if the reverse edge exists. Repeating an existing connection
    /// is not an error and returns [`Connection::AlreadyConnected`].
    pub fn connect(&mut self, parent: &str, child: &str) -> Result<Connection, GraphError> {
        if parent.trim().is_empty() || child.trim().is_empty() {
            return Err(GraphError::MissingInput);
        }

        let from = self.index_of(parent, TopicRole::Parent)?;
        let to = self.index_of(child, TopicRole::Child)?;
        let (parent, child) = (self.graph[from].name.as_str(), self.graph[to].name.as_str());

        if from == to {
            return Err(GraphError::SelfLoop(parent.to_string()));
        }
        if self.graph.contains_edge(to, from) {
            return Err(GraphError::ReverseExists {
                parent: parent.to_string(),
                child: child.to_string(),
            });
        }
        if self.graph.contains_edge(from, to) {
            return Ok(Connection::AlreadyConnected);
        }

        self.graph.add_edge(from, to, ());
        Ok(Connection::Connected)
    }

    /// Renames a topic, keeping its connections, category and note.
    ///
    /// All validation runs before the old node is touched. The topic is
    /// then removed and re-inserted under the new name with every incoming
    /// and outgoing connection restored.
    pub fn rename_topic(&mut self, old_name: &str, new_name: &str) -> Result<(), GraphError> {
        let new_name = new_name.trim();
        if old_name.trim().is_empty() || new_name.is_empty() {
            return Err(GraphError::MissingInput);
        }

        let old = self.index_of(old_name, TopicRole::Old)?;
        if self.contains(new_name) {
            return Err(GraphError::DuplicateTopic(new_name.to_string()));
        }
        if new_name.chars().any(char::is_whitespace) {
            return Err(GraphError::InvalidName(new_name.to_string()));
        }

        let successors = self.ordered_neighbors(old, Direction::Outgoing);
        let predecessors = self.ordered_neighbors(old, Direction::Incoming);

        let key = self.graph[old].name.clone();
        self.indices.remove(&key);
        let Some(node) = self.graph.remove_node(old) else {
            return Err(GraphError::not_found(TopicRole::Old, old_name.trim()));
        };

        let new = self.insert_node(new_name, node.category, node.note);
        let remap = |idx: NodeIndex| if idx == old { new } else { idx };

        for succ in successors {
            self.graph.add_edge(new, remap(succ), ());
        }
        for pred in predecessors {
            // A self-loop was already restored from the successor side.
            if pred != old {
                self.graph.add_edge(pred, new, ());
            }
        }

        Ok(())
    }

    /// Deletes a topic together with every connection touching it.
    pub fn delete_topic(&mut self, name: &str) -> Result<(), GraphError> {
        let idx = self.index_of(name, TopicRole::Target)?;
        if let Some(node) = self.graph.remove_node(idx) {
            self.indices.remove(&node.name);
        }
        Ok(())
    }

    /// Replaces the note of a topic. Surrounding whitespace is dropped.
    pub fn set_note(&mut self, name: &str, text: &str) -> Result<(), GraphError> {
        let node = self.node_mut(name)?;
        node.note = text.trim().to_string();
        Ok(())
    }

    /// Replaces the category of a topic.
    pub fn set_category(&mut self, name: &str, category: Category) -> Result<(), GraphError> {
        let node = self.node_mut(name)?;
        node.category = category;
        Ok(())
    }

    /// Removes every topic, connection, category and note.
    pub fn reset(&mut self) {
        self.graph.clear();
        self.indices.clear();
        self.next_seq = 0;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns true if the topic exists.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn topic_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All topic names in insertion order.
    pub fn all_topics(&self) -> Vec<&str> {
        self.ordered_nodes().map(|(_, node)| node.name.as_str()).collect()
    }

    /// Topics `name` points to.
    pub fn neighbors_of(&self, name: &str) -> Result<Vec<&str>, GraphError> {
        let idx = self.index_of(name, TopicRole::Target)?;
        Ok(self.names(self.ordered_neighbors(idx, Direction::Outgoing)))
    }

    /// Topics pointing to `name`.
    pub fn predecessors_of(&self, name: &str) -> Result<Vec<&str>, GraphError> {
        let idx = self.index_of(name, TopicRole::Target)?;
        Ok(self.names(self.ordered_neighbors(idx, Direction::Incoming)))
    }

    /// Returns true if the directed edge `parent -> child` exists.
    pub fn has_edge(&self, parent: &str, child: &str) -> bool {
        match (self.lookup(parent), self.lookup(child)) {
            (Some(from), Some(to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }

    /// All connections as `(parent, child)` pairs.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.ordered_nodes()
            .flat_map(move |(idx, node)| {
                self.ordered_neighbors(idx, Direction::Outgoing)
                    .into_iter()
                    .map(move |succ| (node.name.as_str(), self.graph[succ].name.as_str()))
            })
            .collect()
    }

    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.node(name).map(|node| node.category)
    }

    pub fn note_of(&self, name: &str) -> Option<&str> {
        self.node(name).map(|node| node.note.as_str())
    }

    /// Everything a presentation layer shows for a picked topic.
    pub fn topic(&self, name: &str) -> Option<TopicView> {
        let idx = self.lookup(name)?;
        let node = &self.graph[idx];
        let owned = |v: Vec<&str>| -> Vec<String> { v.into_iter().map(str::to_string).collect() };

        Some(TopicView {
            name: node.name.clone(),
            category: node.category,
            note: node.note.clone(),
            successors: owned(self.names(self.ordered_neighbors(idx, Direction::Outgoing))),
            predecessors: owned(self.names(self.ordered_neighbors(idx, Direction::Incoming))),
        })
    }

    /// Distinct categories in use, sorted by label. Drives the legend.
    pub fn used_categories(&self) -> Vec<Category> {
        let mut used: Vec<Category> = self
            .graph
            .node_indices()
            .map(|idx| self.graph[idx].category)
            .collect();
        used.sort_by_key(|c| c.display_name());
        used.dedup();
        used
    }

    /// Finds topics by name.
    ///
    /// An exact match comes first, followed by case-insensitive substring
    /// matches in topic order. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut hits: Vec<&str> = self
            .all_topics()
            .into_iter()
            .filter(|name| *name != query && name.to_lowercase().contains(&needle))
            .collect();
        if let Some(idx) = self.lookup(query) {
            hits.insert(0, self.graph[idx].name.as_str());
        }
        hits
    }

    // =========================================================================
    // Unchecked construction (used by the codec)
    // =========================================================================

    /// Inserts a topic without name validation. Returns false if the name
    /// is already present.
    pub(crate) fn insert_unchecked(&mut self, name: &str, category: Category, note: String) -> bool {
        if self.indices.contains_key(name) {
            return false;
        }
        self.insert_node(name, category, note);
        true
    }

    /// Adds an edge between two present topics without exclusivity checks.
    /// Returns false if either endpoint is missing.
    pub(crate) fn link_unchecked(&mut self, parent: &str, child: &str) -> bool {
        let (Some(&from), Some(&to)) = (self.indices.get(parent), self.indices.get(child)) else {
            return false;
        };
        if !self.graph.contains_edge(from, to) {
            self.graph.add_edge(from, to, ());
        }
        true
    }

    /// Every topic as `(name, category, note)` in topic order, read straight
    /// from the node weights.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, Category, &str)> {
        self.ordered_nodes()
            .map(|(_, node)| (node.name.as_str(), node.category, node.note.as_str()))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn insert_node(&mut self, name: &str, category: Category, note: String) -> NodeIndex {
        let idx = self.graph.add_node(TopicNode {
            name: name.to_string(),
            category,
            note,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.indices.insert(name.to_string(), idx);
        idx
    }

    /// Finds a topic by its exact name, then by its trimmed name. Names
    /// loaded from a document are kept as written and may carry padding.
    fn lookup(&self, name: &str) -> Option<NodeIndex> {
        self.indices
            .get(name)
            .or_else(|| self.indices.get(name.trim()))
            .copied()
    }

    fn index_of(&self, name: &str, role: TopicRole) -> Result<NodeIndex, GraphError> {
        self.lookup(name)
            .ok_or_else(|| GraphError::not_found(role, name.trim()))
    }

    fn node(&self, name: &str) -> Option<&TopicNode> {
        self.lookup(name).map(|idx| &self.graph[idx])
    }

    fn node_mut(&mut self, name: &str) -> Result<&mut TopicNode, GraphError> {
        let idx = self.index_of(name, TopicRole::Target)?;
        Ok(&mut self.graph[idx])
    }

    fn ordered_nodes(&self) -> impl Iterator<Item = (NodeIndex, &TopicNode)> {
        let mut nodes: Vec<_> = self
            .graph
            .node_indices()
            .map(|idx| (idx, &self.graph[idx]))
            .collect();
        nodes.sort_by_key(|(_, node)| node.seq);
        nodes.into_iter()
    }

    /// petgraph yields the most recently added edge first; flip that to
    /// connection order.
    fn ordered_neighbors(&self, idx: NodeIndex, dir: Direction) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.neighbors_directed(idx, dir).collect();
        out.reverse();
        out
    }

    fn names(&self, indices: Vec<NodeIndex>) -> Vec<&str> {
        indices
            .into_iter()
            .map(|idx| self.graph[idx].name.as_str())
            .collect()
    }
}

/// Checks a name for a new topic.
fn validate_name(name: &str) -> Result<(), GraphError> {
    if name.is_empty() {
        return Err(GraphError::EmptyName);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(GraphError::InvalidName(name.to_string()));
    }
    Ok(())
}
