//! Simple-path enumeration over the graph store
//!
//! All three queries share one recursive depth-first backtracking core: a
//! current path plus a visited set of the nodes on it, both mutated on
//! entry and undone on every return so one traversal buffer serves the
//! whole search. The visited set enforces path simplicity and, with it,
//! termination on cyclic graphs. The end node is the one admissible
//! re-entry: arriving there is always terminal, so a shared start/end may
//! close a cycle but no interior node ever repeats.

use crate::graph::{GraphStore, NodeId};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A simple directed path through the graph
///
/// `nodes` always holds at least two entries: every query requires at
/// least one traversed edge, so a bare start node is never a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    pub nodes: Vec<NodeId>,
}

impl Path {
    /// Number of edges traversed by this path
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Node labels along the path, in order
    ///
    /// Ids not present in `store` are skipped; paths produced by this
    /// module only ever hold ids owned by the store they were searched on.
    pub fn labels<'a>(&self, store: &'a GraphStore) -> Vec<&'a str> {
        self.nodes.iter().filter_map(|&id| store.label(id)).collect()
    }

    /// Edge labels between consecutive nodes, in order
    pub fn edge_labels<'a>(&self, store: &'a GraphStore) -> Vec<&'a str> {
        self.nodes
            .windows(2)
            .filter_map(|pair| store.edge_label_between(pair[0], pair[1]))
            .collect()
    }
}

/// Find every simple directed path from `start` to `end`
///
/// A path is accepted when the walk reaches `end` having traversed at
/// least one edge, so `all_paths(store, "A", "A")` returns only cycles
/// that leave `A` and come back, never the trivial single-node path.
/// Unknown labels yield an empty result rather than an error.
pub fn all_paths(store: &GraphStore, start: &str, end: &str) -> Vec<Path> {
    let mut found = Vec::new();
    let (Some(start_id), Some(end_id)) = (store.resolve(start), store.resolve(end)) else {
        return found;
    };

    let mut path = Vec::new();
    let mut visited = HashSet::new();
    dfs_all(store, start_id, end_id, &mut path, &mut visited, &mut found);
    debug!(start, end, count = found.len(), "all-paths search finished");
    found
}

fn dfs_all(
    store: &GraphStore,
    current: NodeId,
    end: NodeId,
    path: &mut Vec<NodeId>,
    visited: &mut HashSet<NodeId>,
    found: &mut Vec<Path>,
) {
    visited.insert(current);
    path.push(current);

    if current == end && path.len() > 1 {
        found.push(Path { nodes: path.clone() });
    } else if let Some(node) = store.node(current) {
        for next in node.neighbors() {
            // `end` may always be re-entered: arrival there records and
            // never expands, so the only node a path can repeat is a
            // shared start/end closing a cycle.
            if next == end || !visited.contains(&next) {
                dfs_all(store, next, end, path, visited, found);
            }
        }
    }

    visited.remove(&current);
    path.pop();
}

/// Find every simple directed path from `start` to `end` with exactly
/// `length` edges
///
/// Expansion stops once the walk already holds `length` edges, since a
/// simple path cannot shrink. A `length` of 0 never matches: every
/// returned path traverses at least one edge, so the single-node path the
/// acceptance arithmetic would otherwise admit is excluded.
pub fn paths_of_length(store: &GraphStore, start: &str, end: &str, length: usize) -> Vec<Path> {
    let mut found = Vec::new();
    if length == 0 {
        return found;
    }
    let (Some(start_id), Some(end_id)) = (store.resolve(start), store.resolve(end)) else {
        return found;
    };

    let mut path = Vec::new();
    let mut visited = HashSet::new();
    dfs_length(
        store, start_id, end_id, length, &mut path, &mut visited, &mut found,
    );
    debug!(start, end, length, count = found.len(), "length search finished");
    found
}

fn dfs_length(
    store: &GraphStore,
    current: NodeId,
    end: NodeId,
    length: usize,
    path: &mut Vec<NodeId>,
    visited: &mut HashSet<NodeId>,
    found: &mut Vec<Path>,
) {
    visited.insert(current);
    path.push(current);

    if current == end && path.len() > 1 {
        // Any arrival at `end` is terminal; `end` may not repeat as an
        // interior node, so expanding past it can record nothing.
        if path.len() == length + 1 {
            found.push(Path { nodes: path.clone() });
        }
    } else if path.len() <= length {
        if let Some(node) = store.node(current) {
            for next in node.neighbors() {
                if next == end || !visited.contains(&next) {
                    dfs_length(store, next, end, length, path, visited, found);
                }
            }
        }
    }

    visited.remove(&current);
    path.pop();
}

/// Find every simple directed path from `start` to `end` with the minimum
/// edge count
///
/// Exhaustive depth-first search tracking the best edge count seen so far:
/// a strictly shorter arrival clears the result list, an equal one is
/// appended, a longer one is ignored. Branches longer than the current
/// best are still explored to exhaustion (no frontier expansion and no
/// best-based pruning); only the result set is minimal. Ties are all
/// returned, in discovery order.
pub fn shortest_paths(store: &GraphStore, start: &str, end: &str) -> Vec<Path> {
    let mut found = Vec::new();
    let (Some(start_id), Some(end_id)) = (store.resolve(start), store.resolve(end)) else {
        return found;
    };

    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut best = usize::MAX;
    dfs_shortest(
        store, start_id, end_id, &mut path, &mut visited, &mut best, &mut found,
    );
    debug!(start, end, count = found.len(), "shortest-paths search finished");
    found
}

fn dfs_shortest(
    store: &GraphStore,
    current: NodeId,
    end: NodeId,
    path: &mut Vec<NodeId>,
    visited: &mut HashSet<NodeId>,
    best: &mut usize,
    found: &mut Vec<Path>,
) {
    visited.insert(current);
    path.push(current);

    if current == end && path.len() > 1 {
        let edges = path.len() - 1;
        if edges < *best {
            found.clear();
            *best = edges;
            found.push(Path { nodes: path.clone() });
        } else if edges == *best {
            found.push(Path { nodes: path.clone() });
        }
        // A longer arrival records nothing; continuing past `end` cannot
        // produce a path either, since `end` may not repeat.
    } else if let Some(node) = store.node(current) {
        for next in node.neighbors() {
            if next == end || !visited.contains(&next) {
                dfs_shortest(store, next, end, path, visited, best, found);
            }
        }
    }

    visited.remove(&current);
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;

    fn labels(store: &GraphStore, paths: &[Path]) -> Vec<Vec<String>> {
        paths
            .iter()
            .map(|p| p.labels(store).iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn diamond() -> GraphStore {
        // A -> B -> D, A -> C -> D
        let mut store = GraphStore::new();
        store.insert_edge("A", "B", "ab");
        store.insert_edge("B", "D", "bd");
        store.insert_edge("A", "C", "ac");
        store.insert_edge("C", "D", "cd");
        store
    }

    fn triangle() -> GraphStore {
        // 3-cycle: A -> B -> C -> A
        let mut store = GraphStore::new();
        store.insert_edge("A", "B", "e");
        store.insert_edge("B", "C", "e");
        store.insert_edge("C", "A", "e");
        store
    }

    #[test]
    fn test_all_paths_diamond() {
        let store = diamond();
        let paths = all_paths(&store, "A", "D");
        assert_eq!(
            labels(&store, &paths),
            vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]
        );
    }

    #[test]
    fn test_all_paths_unreachable() {
        let mut store = GraphStore::new();
        store.insert_edge("A", "B", "x");
        assert!(all_paths(&store, "B", "A").is_empty());
    }

    #[test]
    fn test_all_paths_unknown_labels() {
        let store = diamond();
        assert!(all_paths(&store, "A", "Z").is_empty());
        assert!(all_paths(&store, "Z", "D").is_empty());
    }

    #[test]
    fn test_all_paths_same_start_end_without_cycle() {
        let store = diamond();
        // No cycle back to A, and the trivial single-node path is excluded
        assert!(all_paths(&store, "A", "A").is_empty());
    }

    #[test]
    fn test_all_paths_cycle_back_to_start() {
        let store = triangle();
        let paths = all_paths(&store, "A", "A");
        assert_eq!(labels(&store, &paths), vec![vec!["A", "B", "C", "A"]]);
    }

    #[test]
    fn test_all_cycles_through_start_are_found() {
        // Two distinct cycles close at A: A -> B -> A and A -> B -> C -> A.
        // The branch through C is explored after the arrival frame for the
        // short cycle has unwound.
        let mut store = GraphStore::new();
        store.insert_edge("A", "B", "e");
        store.insert_edge("B", "A", "e");
        store.insert_edge("B", "C", "e");
        store.insert_edge("C", "A", "e");

        let paths = all_paths(&store, "A", "A");
        assert_eq!(
            labels(&store, &paths),
            vec![vec!["A", "B", "A"], vec!["A", "B", "C", "A"]]
        );

        // Only the start/end node repeats, and only at the endpoints
        for path in &paths {
            let interior = &path.nodes[1..path.nodes.len() - 1];
            let mut seen = std::collections::HashSet::new();
            for id in interior {
                assert!(seen.insert(id));
            }
            assert!(!interior.contains(&path.nodes[0]));
        }

        let shortest = shortest_paths(&store, "A", "A");
        assert_eq!(labels(&store, &shortest), vec![vec!["A", "B", "A"]]);

        let two = paths_of_length(&store, "A", "A", 2);
        assert_eq!(labels(&store, &two), vec![vec!["A", "B", "A"]]);
    }

    #[test]
    fn test_self_loop_cycles() {
        let mut store = GraphStore::new();
        store.insert_edge("A", "A", "loop");
        store.insert_edge("A", "B", "e");

        let paths = all_paths(&store, "A", "A");
        assert_eq!(labels(&store, &paths), vec![vec!["A", "A"]]);

        let one = paths_of_length(&store, "A", "A", 1);
        assert_eq!(labels(&store, &one), vec![vec!["A", "A"]]);
        assert!(paths_of_length(&store, "A", "A", 2).is_empty());

        let shortest = shortest_paths(&store, "A", "A");
        assert_eq!(labels(&store, &shortest), vec![vec!["A", "A"]]);
    }

    #[test]
    fn test_end_reentry_does_not_leak_into_other_queries() {
        // B -> A exists, but a path from A to C must still never pass
        // through A twice.
        let mut store = GraphStore::new();
        store.insert_edge("A", "B", "e");
        store.insert_edge("B", "A", "e");
        store.insert_edge("A", "C", "e");

        let paths = all_paths(&store, "A", "C");
        assert_eq!(labels(&store, &paths), vec![vec!["A", "C"]]);
    }

    #[test]
    fn test_all_paths_terminates_on_cycle() {
        // Cycle plus an exit: search must not loop forever
        let mut store = GraphStore::new();
        store.insert_edge("A", "B", "e");
        store.insert_edge("B", "A", "e");
        store.insert_edge("B", "C", "e");
        let paths = all_paths(&store, "A", "C");
        assert_eq!(labels(&store, &paths), vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn test_all_paths_end_never_interior() {
        // C has onward edges, but no reported path may continue past the
        // end node.
        let mut store = GraphStore::new();
        store.insert_edge("A", "B", "e");
        store.insert_edge("B", "C", "e");
        store.insert_edge("C", "D", "e");
        store.insert_edge("D", "B", "e");
        let paths = all_paths(&store, "A", "C");
        assert_eq!(labels(&store, &paths), vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn test_paths_of_length_triangle() {
        let store = triangle();

        let three = paths_of_length(&store, "A", "A", 3);
        assert_eq!(labels(&store, &three), vec![vec!["A", "B", "C", "A"]]);

        assert!(paths_of_length(&store, "A", "A", 1).is_empty());
        assert!(paths_of_length(&store, "A", "A", 2).is_empty());
    }

    #[test]
    fn test_paths_of_length_filters_other_lengths() {
        // A -> D directly and A -> B -> D
        let mut store = GraphStore::new();
        store.insert_edge("A", "D", "ad");
        store.insert_edge("A", "B", "ab");
        store.insert_edge("B", "D", "bd");

        let one = paths_of_length(&store, "A", "D", 1);
        assert_eq!(labels(&store, &one), vec![vec!["A", "D"]]);

        let two = paths_of_length(&store, "A", "D", 2);
        assert_eq!(labels(&store, &two), vec![vec!["A", "B", "D"]]);

        assert!(paths_of_length(&store, "A", "D", 3).is_empty());
    }

    #[test]
    fn test_paths_of_length_zero_is_empty() {
        let store = triangle();
        assert!(paths_of_length(&store, "A", "A", 0).is_empty());
        assert!(paths_of_length(&store, "A", "B", 0).is_empty());
    }

    #[test]
    fn test_shortest_paths_prefers_fewer_edges() {
        // A -> B directly (1 edge) beats A -> C -> B (2 edges)
        let mut store = GraphStore::new();
        store.insert_edge("A", "B", "1");
        store.insert_edge("A", "C", "2");
        store.insert_edge("C", "B", "3");

        let paths = shortest_paths(&store, "A", "B");
        assert_eq!(labels(&store, &paths), vec![vec!["A", "B"]]);
    }

    #[test]
    fn test_shortest_paths_returns_all_ties() {
        let store = diamond();
        let paths = shortest_paths(&store, "A", "D");
        assert_eq!(
            labels(&store, &paths),
            vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]
        );
    }

    #[test]
    fn test_shortest_paths_clears_longer_discoveries() {
        // Longer path discovered before the shorter one: the neighbor
        // inserted first is the detour, so the result list gets cleared.
        let mut store = GraphStore::new();
        store.insert_edge("A", "B", "ab");
        store.insert_edge("B", "C", "bc");
        store.insert_edge("A", "C", "ac");

        let paths = shortest_paths(&store, "A", "C");
        assert_eq!(labels(&store, &paths), vec![vec!["A", "C"]]);
    }

    #[test]
    fn test_shortest_paths_same_start_end() {
        let store = triangle();
        let paths = shortest_paths(&store, "A", "A");
        assert_eq!(labels(&store, &paths), vec![vec!["A", "B", "C", "A"]]);

        let store = diamond();
        assert!(shortest_paths(&store, "A", "A").is_empty());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let store = diamond();
        let first = all_paths(&store, "A", "D");
        let second = all_paths(&store, "A", "D");
        assert_eq!(first, second);
    }

    #[test]
    fn test_path_serializes() {
        let store = diamond();
        let paths = all_paths(&store, "A", "D");
        let json = serde_json::to_value(&paths[0]).unwrap();
        assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_path_edge_labels() {
        let store = diamond();
        let paths = all_paths(&store, "A", "D");
        assert_eq!(paths[0].edge_labels(&store), vec!["ab", "bd"]);
        assert_eq!(paths[0].edge_count(), 2);
    }
}
