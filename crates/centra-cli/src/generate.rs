//! G(n, p) random graphs.
//!
//! Nodes are `0..n`; each unordered pair `{i, j}` with `i < j` becomes an
//! edge independently with probability `p`. The generator owns no state:
//! callers pass the RNG, so seeded runs are reproducible.

use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use centra_core::Graph;

/// Build an RNG from an optional seed; unseeded runs draw from OS entropy.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Sample a G(n, p) graph.
///
/// # Errors
///
/// Fails if `probability` is not within `[0, 1]`.
pub fn gnp_random_graph<R: Rng + ?Sized>(
    nodes: u32,
    probability: f64,
    rng: &mut R,
) -> Result<Graph<u32>> {
    if !(0.0..=1.0).contains(&probability) {
        bail!("edge probability must be within [0, 1], got {probability}");
    }

    let mut edges = Vec::new();
    for i in 0..nodes {
        for j in i + 1..nodes {
            if rng.gen_bool(probability) {
                edges.push((i, j));
            }
        }
    }

    debug!(nodes, probability, edges = edges.len(), "sampled G(n, p) graph");
    Graph::new(0..nodes, edges).context("sampled graph is not simple")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_graph() {
        let a = gnp_random_graph(20, 0.3, &mut rng_from_seed(Some(42))).expect("graph");
        let b = gnp_random_graph(20, 0.3, &mut rng_from_seed(Some(42))).expect("graph");
        let ea: Vec<(u32, u32)> = a.edges().map(|(x, y)| (*x, *y)).collect();
        let eb: Vec<(u32, u32)> = b.edges().map(|(x, y)| (*x, *y)).collect();
        assert_eq!(ea, eb);
    }

    #[test]
    fn extreme_probabilities() {
        let mut rng = rng_from_seed(Some(1));
        let empty = gnp_random_graph(10, 0.0, &mut rng).expect("graph");
        assert_eq!(empty.node_count(), 10);
        assert_eq!(empty.edge_count(), 0);

        let full = gnp_random_graph(10, 1.0, &mut rng).expect("graph");
        assert_eq!(full.edge_count(), 45);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let mut rng = rng_from_seed(Some(1));
        assert!(gnp_random_graph(5, 1.5, &mut rng).is_err());
        assert!(gnp_random_graph(5, -0.1, &mut rng).is_err());
        assert!(gnp_random_graph(5, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn zero_nodes() {
        let g = gnp_random_graph(0, 0.5, &mut rng_from_seed(Some(3))).expect("graph");
        assert!(g.is_empty());
    }
}
