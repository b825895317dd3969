//! `centra random`: rank the nodes of a G(n, p) random graph.

use clap::Args;
use tracing::info;

use centra_core::CentralityReport;

use crate::config::RandomConfig;
use crate::generate::{gnp_random_graph, rng_from_seed};
use crate::output::{OutputMode, render_report};

/// Arguments for `centra random`. Unset flags fall back to `[random]` in
/// the config file.
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Number of nodes.
    #[arg(short, long)]
    pub nodes: Option<u32>,

    /// Probability that each pair of nodes is joined by an edge.
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// RNG seed for a reproducible graph.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Run `centra random`.
///
/// # Errors
///
/// Fails if the probability is outside `[0, 1]` or output cannot be written.
pub fn run_random(args: &RandomArgs, defaults: &RandomConfig, output: OutputMode) -> anyhow::Result<()> {
    let nodes = args.nodes.unwrap_or(defaults.nodes);
    let probability = args.probability.unwrap_or(defaults.probability);
    let seed = args.seed.or(defaults.seed);

    info!(nodes, probability, seed = ?seed, "generating random graph");
    let mut rng = rng_from_seed(seed);
    let graph = gnp_random_graph(nodes, probability, &mut rng)?;

    let report = CentralityReport::analyze(&graph);
    render_report(output, &report)
}
