//! Plain-text edge lists.
//!
//! ```text
//! # comment
//! alice bob        an edge
//! bob   carol
//! dave             an isolated node
//! ```
//!
//! Labels are whitespace-free strings. Nodes are ordered by first
//! appearance. Blank lines and everything after `#` are ignored.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use centra_core::Graph;

/// Parse an edge list into a graph.
///
/// # Errors
///
/// Fails on a line with more than two labels, or when the edges do not
/// form a simple graph (self-loop, repeated edge).
pub fn parse_edge_list(input: &str) -> Result<Graph<String>> {
    let mut nodes: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut edges: Vec<(String, String)> = Vec::new();

    let mut note = |label: &str| {
        if seen.insert(label.to_string()) {
            nodes.push(label.to_string());
        }
    };

    for (line_no, raw) in input.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(before, _)| before);
        let labels: Vec<&str> = line.split_whitespace().collect();
        match labels.as_slice() {
            [] => {}
            [node] => note(*node),
            [from, to] => {
                note(*from);
                note(*to);
                edges.push(((*from).to_string(), (*to).to_string()));
            }
            _ => bail!(
                "line {}: expected one or two node labels, found {}",
                line_no + 1,
                labels.len()
            ),
        }
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "parsed edge list");
    Ok(Graph::new(nodes, edges)?)
}

/// Read and parse an edge-list file.
///
/// # Errors
///
/// Fails if the file cannot be read or does not parse (see
/// [`parse_edge_list`]).
pub fn load_edge_list(path: &Path) -> Result<Graph<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_edge_list(&content).with_context(|| format!("Failed to load graph from {}", path.display()))
}
