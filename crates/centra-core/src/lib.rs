#![forbid(unsafe_code)]
//! centra-core library.
//!
//! Degree, closeness and betweenness centrality for simple undirected
//! graphs, connected or not, plus top-five ranking per measure.
//!
//! # Conventions
//!
//! - **Errors**: Only graph construction fails, with [`InvalidGraph`].
//!   Every measure is infallible once a [`Graph`] exists.
//! - **Logging**: Use `tracing` macros (`info!`, `debug!`, `trace!`); the
//!   measures carry `#[instrument]` spans.
//! - **Ordering**: Score maps iterate in graph node order, except the
//!   disconnected betweenness map, which is grouped by component.
//! - **Features**: `parallel` scores components on rayon; test it with
//!   `cargo test -p centra-core --features parallel`.

pub mod error;
pub mod graph;
pub mod metrics;
pub mod report;

pub use error::InvalidGraph;
pub use graph::{Graph, NodeId};
pub use metrics::{Ranked, Ranking, ScoreMap};
pub use report::{CentralityReport, Measure, MeasureReport};
