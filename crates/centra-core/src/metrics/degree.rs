//! Degree centrality: the number of edges incident to each node.

use tracing::instrument;

use crate::graph::{Graph, NodeId};
use crate::metrics::ScoreMap;

/// Count incident edges per node.
///
/// Every node starts at 0, so isolated nodes are present with score 0.
/// Each edge then increments both of its endpoints, which makes the scores
/// sum to twice the edge count.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn degree_centrality<N: NodeId>(graph: &Graph<N>) -> ScoreMap<N, usize> {
    let mut counts = vec![0_usize; graph.node_count()];

    for (a, b) in graph.edge_indices() {
        counts[a.index()] += 1;
        counts[b.index()] += 1;
    }

    graph.nodes().cloned().zip(counts).collect()
}
