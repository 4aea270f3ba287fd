//! In-memory storage for the labeled directed graph
//!
//! The store owns every node in an arena (`NodeId` = arena index) and keeps
//! edge labels in a map keyed by the ordered `(source, destination)` pair.
//! Nodes and edge labels are created on first reference and never removed;
//! the graph only grows for the lifetime of the process.

use super::node::Node;
use super::types::{EdgeLabel, Label, NodeId};
use std::collections::HashMap;
use tracing::trace;

/// In-memory graph storage
///
/// Uses hash maps for O(1) lookups:
/// - nodes: arena of graph-owned `Node` instances
/// - ids: label -> NodeId (lookup-or-create interning)
/// - edge_labels: (source, destination) -> EdgeLabel
///
/// At most one label is stored per ordered node pair; inserting a second
/// edge for the same pair overwrites the previous label. Multi-edges
/// between the same ordered pair are not representable.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node arena; `NodeId` is an index into this vector
    nodes: Vec<Node>,

    /// Label interning table
    ids: HashMap<String, NodeId>,

    /// Edge label per ordered (source, destination) pair
    edge_labels: HashMap<(NodeId, NodeId), EdgeLabel>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            nodes: Vec::new(),
            ids: HashMap::new(),
            edge_labels: HashMap::new(),
        }
    }

    /// Look up the node for `label`, creating it on first mention
    ///
    /// Later calls always return the id assigned at first mention, so
    /// neighbor-set membership stays consistent across insertions.
    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = NodeId::new(self.nodes.len() as u64);
        self.nodes.push(Node::new(id, Label::new(label)));
        self.ids.insert(label.to_string(), id);
        id
    }

    /// Insert a directed labeled edge
    ///
    /// Ensures both endpoints exist as nodes, adds `destination` to
    /// `source`'s neighbor set, and records `label` for the ordered pair,
    /// overwriting any prior label for that exact pair. Always succeeds.
    pub fn insert_edge(
        &mut self,
        source: &str,
        destination: &str,
        label: impl Into<EdgeLabel>,
    ) {
        let src = self.intern(source);
        let dst = self.intern(destination);
        self.nodes[src.as_index()].add_neighbor(dst);
        self.edge_labels.insert((src, dst), label.into());
        trace!(source, destination, "inserted edge");
    }

    /// Get the label of the directed edge from `node1` to `node2`, if any
    pub fn edge_label(&self, node1: &str, node2: &str) -> Option<&str> {
        let src = self.resolve(node1)?;
        let dst = self.resolve(node2)?;
        self.edge_label_between(src, dst)
    }

    /// Get the label of the directed edge between two node ids, if any
    pub fn edge_label_between(&self, source: NodeId, destination: NodeId) -> Option<&str> {
        self.edge_labels
            .get(&(source, destination))
            .map(EdgeLabel::as_str)
    }

    /// Check if a node with this label exists
    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    /// Get the node for a label, if present
    pub fn get_node(&self, label: &str) -> Option<&Node> {
        let id = self.resolve(label)?;
        self.node(id)
    }

    /// Resolve a label to its node id, if present
    pub fn resolve(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_index())
    }

    /// Get a node's label by id
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_labels.len()
    }
}
