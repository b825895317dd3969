//! Betweenness centrality by per-pair shortest-path counting.
//!
//! # Overview
//!
//! Betweenness measures how often a node lies on shortest paths between
//! other pairs of nodes. For every unordered pair `{u, v}` of distinct
//! nodes, each third node `w` receives
//!
//! ```text
//! |{ p ∈ paths(u, v) : w ∈ p }| / |paths(u, v)|
//! ```
//!
//! where `paths(u, v)` is the full set of shortest paths between them.
//! Scores are unnormalized: a path graph `A - B - C` gives `B` exactly 1.0.
//!
//! # Algorithm
//!
//! 1. Run one BFS ([`ShortestPaths`]) from every node, keeping distances
//!    and shortest-path counts.
//! 2. For each pair `u < v` (graph order), a node `w` lies on some
//!    shortest `u → v` path exactly when `d(u, w) + d(w, v) == d(u, v)`,
//!    and then on `σ(u, w) · σ(w, v)` of the `σ(u, v)` paths.
//! 3. Add that fraction to `w`.
//!
//! This gives the same per-pair fraction as enumerating every path, without
//! materializing them: O(V²) memory for the BFS tables and O(V³) time,
//! where enumeration grows with the number of paths (exponential on grids).
//!
//! # Disconnected graphs
//!
//! [`betweenness_centrality`] scores each connected component's induced
//! subgraph independently and unions the results. No shortest path crosses
//! a component boundary, so this is exact.
//!
//! The merged map is grouped by component: components in order of their
//! first node, members in graph order within each. [`top_five`] breaks
//! score ties in that order.
//!
//! With the `parallel` feature, components are scored on the rayon pool;
//! `cargo test -p centra-core --features parallel` runs the same tests
//! against that path.
//!
//! [`top_five`]: crate::metrics::top_five

use tracing::{debug, instrument, trace};

use petgraph::graph::NodeIndex;

use crate::graph::{Component, Graph, NodeId, ShortestPaths, connected_components};
use crate::metrics::ScoreMap;

/// Betweenness of every node, for any graph.
///
/// - empty graph: empty map
/// - connected graph: [`betweenness_centrality_connected`] on the whole graph
/// - otherwise: connected mode on each component, merged component by
///   component
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn betweenness_centrality<N: NodeId>(graph: &Graph<N>) -> ScoreMap<N, f64> {
    if graph.is_empty() {
        return ScoreMap::new();
    }

    let components: Vec<Component<'_, N>> = connected_components(graph).collect();
    if components.len() == 1 {
        debug!("graph is connected; scoring as one component");
        return betweenness_centrality_connected(graph);
    }

    debug!(
        components = components.len(),
        "graph is disconnected; scoring per component"
    );

    let mut merged: ScoreMap<N, f64> = ScoreMap::with_capacity(graph.node_count());
    for partial in score_components(&components) {
        merged.extend(partial);
    }

    merged
}

/// Betweenness over the whole graph treated as one component.
///
/// Pairs with no path between them contribute nothing, so the result is
/// also correct on a disconnected graph; [`betweenness_centrality`] still
/// splits those first to keep each BFS table small. Keys follow the graph's
/// node order.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality_connected<N: NodeId>(graph: &Graph<N>) -> ScoreMap<N, f64> {
    let mut scores = vec![0.0_f64; graph.node_count()];
    let searches: Vec<ShortestPaths<'_, N>> = graph
        .node_indices()
        .map(|source| ShortestPaths::from_index(graph, source))
        .collect();

    for (ui, from_u) in searches.iter().enumerate() {
        for (vi, from_v) in searches.iter().enumerate().skip(ui + 1) {
            let v = NodeIndex::new(vi);
            let Some(d_uv) = from_u.distance_at(v) else {
                continue;
            };
            let total = from_u.path_count_at(v) as f64;

            // Skip the source; stop at the first node as far away as `v`.
            for &w in from_u.discovery_order().iter().skip(1) {
                let Some(d_uw) = from_u.distance_at(w) else {
                    continue;
                };
                if d_uw >= d_uv {
                    break;
                }
                if from_v.distance_at(w) == Some(d_uv - d_uw) {
                    let through =
                        from_u.path_count_at(w) as f64 * from_v.path_count_at(w) as f64;
                    scores[w.index()] += through / total;
                }
            }

            trace!(u = ui, v = vi, distance = d_uv, paths = total, "pair counted");
        }
    }

    graph.nodes().cloned().zip(scores).collect()
}

#[cfg(not(feature = "parallel"))]
fn score_components<N: NodeId>(components: &[Component<'_, N>]) -> Vec<ScoreMap<N, f64>> {
    components
        .iter()
        .map(|c| betweenness_centrality_connected(&c.subgraph()))
        .collect()
}

/// Each worker owns the score map of the component it scores; results come
/// back in component order and are merged by the caller.
#[cfg(feature = "parallel")]
fn score_components<N: NodeId>(components: &[Component<'_, N>]) -> Vec<ScoreMap<N, f64>> {
    use rayon::prelude::*;

    components
        .par_iter()
        .map(|c| betweenness_centrality_connected(&c.subgraph()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
