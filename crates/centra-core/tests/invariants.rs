//! Property tests over random simple graphs.

use proptest::prelude::*;

use centra_core::graph::{Graph, ShortestPaths, connected_components};
use centra_core::metrics::{
    betweenness_centrality, betweenness_centrality_connected, closeness_centrality,
    degree_centrality, top_five,
};
use centra_core::ScoreMap;

/// A simple graph on `0..n` given by an inclusion flag per unordered pair.
fn arb_graph(max_nodes: usize) -> impl Strategy<Value = Graph<usize>> {
    (0..=max_nodes)
        .prop_flat_map(|n| {
            let pairs = n * n.saturating_sub(1) / 2;
            (Just(n), proptest::collection::vec(any::<bool>(), pairs))
        })
        .prop_map(|(n, flags)| {
            let pairs = (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j)));
            let edges: Vec<(usize, usize)> = pairs
                .zip(flags)
                .filter_map(|(pair, keep)| keep.then_some(pair))
                .collect();
            Graph::new(0..n, edges).expect("generated graph is simple")
        })
}

/// Two disjoint components: a connected graph on `0..a` and one on
/// `a..a + b`, each a spanning path plus random chords.
fn arb_two_components() -> impl Strategy<Value = Graph<usize>> {
    (2_usize..=5, 2_usize..=5)
        .prop_flat_map(|(a, b)| {
            (
                Just(a),
                Just(b),
                proptest::collection::vec(any::<bool>(), a * a),
                proptest::collection::vec(any::<bool>(), b * b),
            )
        })
        .prop_map(|(a, b, fa, fb)| {
            let mut edges = Vec::new();
            for (offset, size, flags) in [(0, a, fa), (a, b, fb)] {
                for i in 0..size {
                    for j in i + 1..size {
                        if j == i + 1 || flags[i * size + j] {
                            edges.push((offset + i, offset + j));
                        }
                    }
                }
            }
            Graph::new(0..a + b, edges).expect("generated graph is simple")
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn degree_sum_is_twice_edge_count(g in arb_graph(10)) {
        let total: usize = degree_centrality(&g).values().sum();
        prop_assert_eq!(total, 2 * g.edge_count());
    }

    #[test]
    fn every_node_is_scored_by_every_measure(g in arb_graph(9)) {
        let dc = degree_centrality(&g);
        let cc = closeness_centrality(&g);
        let bc = betweenness_centrality(&g);
        for node in g.nodes() {
            prop_assert!(dc.contains_key(node));
            prop_assert!(cc.contains_key(node));
            prop_assert!(bc.contains_key(node));
        }
        prop_assert_eq!(dc.len(), g.node_count());
        prop_assert_eq!(cc.len(), g.node_count());
        prop_assert_eq!(bc.len(), g.node_count());
    }

    #[test]
    fn isolated_nodes_score_zero(g in arb_graph(9)) {
        let dc = degree_centrality(&g);
        let cc = closeness_centrality(&g);
        for (node, &degree) in &dc {
            if degree == 0 {
                prop_assert!(close(cc[node], 0.0));
            }
        }
    }

    #[test]
    fn split_betweenness_equals_component_union(g in arb_two_components()) {
        let merged = betweenness_centrality(&g);

        let mut union: ScoreMap<usize, f64> = ScoreMap::new();
        for component in connected_components(&g) {
            union.extend(betweenness_centrality_connected(&component.subgraph()));
        }

        prop_assert_eq!(merged.keys().collect::<Vec<_>>(), union.keys().collect::<Vec<_>>());
        for (node, score) in &merged {
            prop_assert!(close(*score, union[node]), "node {}: {} vs {}", node, score, union[node]);
        }
    }

    #[test]
    fn split_and_whole_graph_betweenness_agree(g in arb_graph(8)) {
        let split = betweenness_centrality(&g);
        let whole = betweenness_centrality_connected(&g);
        for (node, score) in &split {
            prop_assert!(close(*score, whole[node]));
        }
    }

    #[test]
    fn enumerated_paths_match_bfs_counts(g in arb_graph(8)) {
        for source in g.nodes() {
            let sp = ShortestPaths::from_source(&g, source).expect("node exists");
            for target in g.nodes() {
                let paths = sp.paths_to(target);
                prop_assert_eq!(paths.len() as u64, sp.path_count_to(target));
                if let Some(d) = sp.distance_to(target) {
                    for path in &paths {
                        prop_assert_eq!(path.len(), d + 1);
                        prop_assert_eq!(path.first(), Some(source));
                        prop_assert_eq!(path.last(), Some(target));
                        for pair in path.windows(2) {
                            prop_assert!(g.contains_edge(&pair[0], &pair[1]));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn closeness_is_monotone_in_total_distance(g in arb_graph(9)) {
        let cc = closeness_centrality(&g);
        let totals: Vec<(usize, f64)> = g
            .nodes()
            .map(|n| {
                let sp = ShortestPaths::from_source(&g, n).expect("node exists");
                (sp.total_distance(), cc[n])
            })
            .filter(|(total, _)| *total > 0)
            .collect();
        for (ta, ca) in &totals {
            for (tb, cb) in &totals {
                if ta < tb {
                    prop_assert!(ca > cb);
                }
            }
        }
    }

    #[test]
    fn top_five_is_sorted_and_bounded(g in arb_graph(10)) {
        let bc = betweenness_centrality(&g);
        let top = top_five(&bc);
        prop_assert_eq!(top.len(), bc.len().min(5));
        for pair in top.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        if let Some(last) = top.last() {
            let beaten = bc.values().filter(|&&s| s > last.score).count();
            prop_assert!(beaten < 5);
        }
    }

    #[test]
    fn top_five_of_small_map_returns_every_entry(g in arb_graph(5)) {
        let dc = degree_centrality(&g);
        let top = top_five(&dc);
        prop_assert_eq!(top.len(), dc.len());
    }

    #[test]
    fn top_five_is_idempotent(g in arb_graph(10)) {
        let dc = degree_centrality(&g);
        let first = top_five(&dc);
        let padded: ScoreMap<usize, usize> = first.iter().map(|r| (r.node, r.score)).collect();
        prop_assert_eq!(top_five(&padded), first);
    }
}

#[test]
fn complete_graphs_are_uniform() {
    for n in 2_usize..=6 {
        let edges: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();
        let g = Graph::new(0..n, edges).expect("complete graph is simple");

        assert!(degree_centrality(&g).values().all(|&d| d == n - 1));

        let cc = closeness_centrality(&g);
        let first = cc[&0];
        assert!(cc.values().all(|&c| close(c, first)));

        assert!(betweenness_centrality(&g).values().all(|&b| close(b, 0.0)));
    }
}
