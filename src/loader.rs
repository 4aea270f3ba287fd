//! Edge-list loading
//!
//! Reads the line-oriented edge format `SOURCE LABEL DESTINATION` (three
//! whitespace-separated tokens per line) and feeds each triple into the
//! graph store. Blank lines are skipped; any other token count is a fatal
//! format error that halts construction.

use crate::graph::GraphStore;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading an edge list
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `SOURCE LABEL DESTINATION`, found {found} token(s)")]
    MalformedLine { line: usize, found: usize },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Load edge triples from a reader into `store`
///
/// Returns the number of lines inserted. Line numbers in errors are
/// 1-based.
pub fn load_edges<R: BufRead>(reader: R, store: &mut GraphStore) -> LoadResult<usize> {
    let mut inserted = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [source, label, destination] => {
                store.insert_edge(source, destination, *label);
                inserted += 1;
            }
            other => {
                return Err(LoadError::MalformedLine {
                    line: idx + 1,
                    found: other.len(),
                });
            }
        }
    }
    debug!(
        edges = inserted,
        nodes = store.node_count(),
        "edge list loaded"
    );
    Ok(inserted)
}

/// Load edge triples from a file into `store`
pub fn load_edges_from_path(path: impl AsRef<Path>, store: &mut GraphStore) -> LoadResult<usize> {
    let file = File::open(path)?;
    load_edges(BufReader::new(file), store)
}
