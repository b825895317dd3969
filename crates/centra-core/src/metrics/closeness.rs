//! Closeness centrality: the inverse of the summed hop distance from a node
//! to every node it can reach.
//!
//! Only reachable nodes contribute to the sum. In a disconnected graph this
//! rewards nodes in small components (a node in a 2-node component scores
//! 1.0), so scores are only comparable within one component. A node whose
//! sum is zero, an isolated node or the only node of the graph, scores 0
//! instead of dividing by zero.

use tracing::instrument;

use crate::graph::{Graph, NodeId, ShortestPaths};
use crate::metrics::ScoreMap;

/// Compute `1 / Σ dist(n, m)` over reachable `m` for every node `n`.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality<N: NodeId>(graph: &Graph<N>) -> ScoreMap<N, f64> {
    graph
        .node_indices()
        .map(|idx| {
            let total = ShortestPaths::from_index(graph, idx).total_distance();
            let score = if total == 0 { 0.0 } else { 1.0 / total as f64 };
            (graph.node_at(idx).clone(), score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn path_of_three() {
        // A - B - C: sums are 3, 2, 3.
        let g = Graph::new(["A", "B", "C"], [("A", "B"), ("B", "C")]).expect("valid graph");
        let cc = closeness_centrality(&g);
        assert!(approx(cc["A"], 1.0 / 3.0));
        assert!(approx(cc["B"], 0.5));
        assert!(approx(cc["C"], 1.0 / 3.0));
    }

    #[test]
    fn isolated_and_single_nodes_score_zero() {
        let g = Graph::new([1, 2, 3], [(1, 2)]).expect("valid graph");
        let cc = closeness_centrality(&g);
        assert!(approx(cc[&3], 0.0));
        assert!(approx(cc[&1], 1.0));

        let single = Graph::new([9], Vec::new()).expect("valid graph");
        assert!(approx(closeness_centrality(&single)[&9], 0.0));
    }

    #[test]
    fn smaller_total_distance_scores_higher() {
        // Star: the centre is strictly closer to everything than any leaf.
        let g = Graph::from_edges([(0, 1), (0, 2), (0, 3), (0, 4)]).expect("valid graph");
        let cc = closeness_centrality(&g);
        for leaf in 1..=4 {
            assert!(cc[&0] > cc[&leaf]);
        }
        assert!(approx(cc[&0], 0.25));
        assert!(approx(cc[&1], 1.0 / 7.0));
    }

    #[test]
    fn unreachable_nodes_contribute_nothing() {
        // 1 - 2 and 3 - 4 - 5: node 1 sums to 1, node 4 sums to 2.
        let g = Graph::new([1, 2, 3, 4, 5], [(1, 2), (3, 4), (4, 5)]).expect("valid graph");
        let cc = closeness_centrality(&g);
        assert!(approx(cc[&1], 1.0));
        assert!(approx(cc[&4], 0.5));
    }
}
