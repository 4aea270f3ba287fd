//! Node implementation for the labeled directed graph

use super::types::{Label, NodeId};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A node in the graph
///
/// Nodes have:
/// - A unique ID (arena index, assigned by the store)
/// - A unique label (the store never creates two nodes for one label)
/// - A set of outgoing neighbors, held by ID so the set is non-owning
///
/// The neighbor set is an `IndexSet` so iteration follows insertion order,
/// which makes traversal results deterministic for a given edge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Label for this node
    pub label: Label,

    /// Outgoing neighbors (targets of directed edges from this node)
    neighbors: IndexSet<NodeId>,
}

impl Node {
    /// Create a new node with no neighbors
    pub fn new(id: NodeId, label: impl Into<Label>) -> Self {
        Node {
            id,
            label: label.into(),
            neighbors: IndexSet::new(),
        }
    }

    /// Add an outgoing neighbor
    ///
    /// Returns `true` if the neighbor was not already present. Re-adding an
    /// existing neighbor keeps its original position in the iteration order.
    pub fn add_neighbor(&mut self, target: NodeId) -> bool {
        self.neighbors.insert(target)
    }

    /// Whether this node has a directed edge to `target`
    pub fn has_neighbor(&self, target: NodeId) -> bool {
        self.neighbors.contains(&target)
    }

    /// Iterate over outgoing neighbors in insertion order
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.iter().copied()
    }

    /// Number of outgoing neighbors
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }
}
