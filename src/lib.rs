//! Waypath
//!
//! An in-memory directed, labeled-edge graph store with a simple-path
//! search engine. Given a graph built from `SOURCE LABEL DESTINATION`
//! edge triples, it answers three queries:
//!
//! - all simple directed paths between two nodes
//! - all simple directed paths of an exact edge length
//! - all shortest (fewest-edge) simple directed paths, ties included
//!
//! Paths are simple: no node is revisited, except that a query with
//! `start == end` closes a cycle by repeating the start node at the final
//! position. The visited set bounds the search on cyclic graphs. The
//! graph is unweighted; "shortest" means fewest edges.
//!
//! # Example
//!
//! ```rust
//! use waypath::graph::GraphStore;
//! use waypath::search;
//!
//! let mut store = GraphStore::new();
//! store.insert_edge("A", "B", "road");
//! store.insert_edge("B", "C", "rail");
//! store.insert_edge("A", "C", "flight");
//!
//! let paths = search::shortest_paths(&store, "A", "C");
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].labels(&store), vec!["A", "C"]);
//! ```

#![warn(clippy::all)]

pub mod graph;
pub mod loader;
pub mod search;

// Re-export main types for convenience
pub use graph::{EdgeLabel, GraphStore, Label, Node, NodeId};
pub use loader::{load_edges, load_edges_from_path, LoadError, LoadResult};
pub use search::{all_paths, paths_of_length, shortest_paths, Path};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
