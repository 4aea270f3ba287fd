//! Path search engine
//!
//! Read-only queries over a [`GraphStore`](crate::graph::GraphStore):
//! all simple paths, paths of an exact edge length, and shortest paths.

pub mod paths;

pub use paths::{all_paths, paths_of_length, shortest_paths, Path};
