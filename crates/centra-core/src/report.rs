//! One-shot analysis: all three measures plus their top-five rankings.

use std::fmt;

use serde::Serialize;
use tracing::{info, instrument};

use crate::graph::{Graph, NodeId, component_count};
use crate::metrics::{
    Ranked, Ranking, ScoreMap, betweenness_centrality, closeness_centrality, degree_centrality, top_five,
};

/// The centrality measures the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Degree,
    Closeness,
    Betweenness,
}

impl Measure {
    /// Every measure, in reporting order.
    pub const ALL: [Self; 3] = [Self::Degree, Self::Closeness, Self::Betweenness];

    /// Lower-case name used in logs and machine output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Closeness => "closeness",
            Self::Betweenness => "betweenness",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores for one measure and their top-five ranking.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureReport<N, S> {
    pub measure: Measure,
    pub scores: ScoreMap<N, S>,
    pub top: Ranking<N, S>,
}

impl<N: NodeId, S: PartialOrd + Copy> MeasureReport<N, S> {
    fn new(measure: Measure, scores: ScoreMap<N, S>) -> Self {
        let top = top_five(&scores);
        Self {
            measure,
            scores,
            top,
        }
    }
}

/// Degree, closeness and betweenness for one graph.
#[derive(Debug, Clone, Serialize)]
pub struct CentralityReport<N> {
    pub node_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    pub degree: MeasureReport<N, usize>,
    pub closeness: MeasureReport<N, f64>,
    pub betweenness: MeasureReport<N, f64>,
}

impl<N: NodeId> CentralityReport<N> {
    /// Run every measure over `graph`.
    #[must_use]
    #[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    pub fn analyze(graph: &Graph<N>) -> Self {
        let component_count = component_count(graph);
        info!(components = component_count, "analyzing graph");

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            component_count,
            degree: MeasureReport::new(Measure::Degree, degree_centrality(graph)),
            closeness: MeasureReport::new(Measure::Closeness, closeness_centrality(graph)),
            betweenness: MeasureReport::new(Measure::Betweenness, betweenness_centrality(graph)),
        }
    }

    /// The top five of `measure`, with scores widened to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn top(&self, measure: Measure) -> Ranking<N, f64> {
        match measure {
            Measure::Degree => self
                .degree
                .top
                .iter()
                .map(|r| Ranked {
                    node: r.node.clone(),
                    score: r.score as f64,
                })
                .collect(),
            Measure::Closeness => self.closeness.top.clone(),
            Measure::Betweenness => self.betweenness.top.clone(),
        }
    }
}
