//! `centra load`: rank the nodes of a graph read from an edge-list file.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use centra_core::CentralityReport;

use crate::edgelist::load_edge_list;
use crate::output::{OutputMode, render_report};

/// Arguments for `centra load`.
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Edge-list file: one `a b` edge or lone `a` node per line, `#` comments.
    pub path: PathBuf,
}

/// Run `centra load`.
///
/// # Errors
///
/// Fails if the file cannot be read, is malformed, or describes an
/// invalid graph.
pub fn run_load(args: &LoadArgs, output: OutputMode) -> anyhow::Result<()> {
    info!(path = %args.path.display(), "loading edge list");
    let graph = load_edge_list(&args.path)?;

    let report = CentralityReport::analyze(&graph);
    render_report(output, &report)
}
