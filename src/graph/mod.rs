//! Labeled directed graph implementation
//!
//! This module implements the graph data model:
//! - Nodes identified by a unique string label
//! - Directed edges carrying exactly one label per ordered node pair
//! - In-memory arena storage with hash-based label interning
//!
//! The graph may be and generally is cyclic; no validation is performed at
//! insertion time.

pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use node::Node;
pub use store::GraphStore;
pub use types::{EdgeLabel, Label, NodeId};
