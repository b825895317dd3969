//! Output layer shared by every `centra` command.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` / hidden `--json` flag
//! 2. `[output] format` in the config file
//! 3. `FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 4. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.
//!
//! Text mode prints one tab-separated row per ranked node:
//! `measure  rank  node  score`.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use centra_core::{CentralityReport, Measure, NodeId};

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 56;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-optimized output (sections, aligned columns).
    Pretty,
    /// Tab-separated rows for scripts and pipes.
    Text,
    /// Machine-readable JSON: the full report, every score included.
    Json,
}

/// Core resolution logic, separated from I/O for testability.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    config_format: Option<OutputMode>,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    if json_flag {
        return OutputMode::Json;
    }

    if let Some(mode) = config_format {
        return mode;
    }

    if let Some(val) = format_env {
        match val.to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" => return OutputMode::Text,
            "pretty" => return OutputMode::Pretty,
            _ => {} // unknown value: fall through to TTY detection
        }
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from CLI flags, config, environment, and TTY.
pub fn resolve_output_mode(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    config_format: Option<OutputMode>,
) -> OutputMode {
    let env_val = std::env::var("FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(
        format_flag,
        json_flag,
        config_format,
        env_val.as_deref(),
        is_tty,
    )
}

// ---------------------------------------------------------------------------
// Report rendering
// ---------------------------------------------------------------------------

fn heading(measure: Measure) -> &'static str {
    match measure {
        Measure::Degree => "Top five nodes by degree centrality",
        Measure::Closeness => "Top five nodes by closeness centrality",
        Measure::Betweenness => "Top five nodes by betweenness centrality",
    }
}

fn format_score(measure: Measure, score: f64) -> String {
    match measure {
        Measure::Degree => format!("{score:.0}"),
        Measure::Closeness | Measure::Betweenness => format!("{score:.4}"),
    }
}

/// Pretty rendering: a summary line, then one section per measure.
pub fn write_pretty<N>(report: &CentralityReport<N>, w: &mut dyn Write) -> io::Result<()>
where
    N: NodeId + Display,
{
    writeln!(
        w,
        "Graph: {} nodes, {} edges, {} component{}",
        report.node_count,
        report.edge_count,
        report.component_count,
        if report.component_count == 1 { "" } else { "s" }
    )?;

    for measure in Measure::ALL {
        writeln!(w)?;
        pretty_section(w, heading(measure))?;
        let top = report.top(measure);
        if top.is_empty() {
            writeln!(w, "  (no nodes)")?;
        }
        for (rank, entry) in top.iter().enumerate() {
            writeln!(
                w,
                "  {:>2}. {:<20} {:>12}",
                rank + 1,
                entry.node.to_string(),
                format_score(measure, entry.score)
            )?;
        }
    }
    Ok(())
}

/// Text rendering: `measure\trank\tnode\tscore` rows, no header.
pub fn write_text<N>(report: &CentralityReport<N>, w: &mut dyn Write) -> io::Result<()>
where
    N: NodeId + Display,
{
    for measure in Measure::ALL {
        for (rank, entry) in report.top(measure).iter().enumerate() {
            writeln!(
                w,
                "{measure}\t{}\t{}\t{}",
                rank + 1,
                entry.node,
                format_score(measure, entry.score)
            )?;
        }
    }
    Ok(())
}

/// Render a report to stdout in the requested mode.
pub fn render_report<N>(mode: OutputMode, report: &CentralityReport<N>) -> anyhow::Result<()>
where
    N: NodeId + Display + Serialize,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
        OutputMode::Pretty => write_pretty(report, &mut out)?,
        OutputMode::Text => write_text(report, &mut out)?,
    }
    Ok(())
}

/// Render an error to stderr. JSON mode wraps it as `{"error": {...}}`.
pub fn render_error(mode: OutputMode, error: &anyhow::Error) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
            let wrapper = serde_json::json!({
                "error": {
                    "message": error.to_string(),
                    "causes": chain,
                },
            });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            writeln!(out, "error: {error:#}")?;
        }
    }
    Ok(())
}
