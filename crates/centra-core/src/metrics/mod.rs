//! Centrality measures over a [`Graph`](crate::graph::Graph).
//!
//! # Overview
//!
//! Each measure answers a different question about node importance:
//!
//! - **Degree** (`degree`): how many neighbors does a node have?
//! - **Closeness** (`closeness`): how few hops separate a node from
//!   everything it can reach?
//! - **Betweenness** (`betweenness`): how often does a node sit on the
//!   shortest paths between other nodes?
//!
//! # Usage
//!
//! Every measure takes a `&Graph<N>` and returns a [`ScoreMap`] keyed by the
//! original node identifiers, in the graph's node order (betweenness on a
//! disconnected graph groups keys by component). Every node is present,
//! isolated ones included. [`topk::top_five`] ranks any score map.
//!
//! ```rust
//! use centra_core::graph::Graph;
//! use centra_core::metrics::{betweenness::betweenness_centrality, topk::top_five};
//!
//! let g = Graph::new(["A", "B", "C"], [("A", "B"), ("B", "C")]).unwrap();
//! let bc = betweenness_centrality(&g);
//! assert_eq!(top_five(&bc)[0].node, "B");
//! ```

use indexmap::IndexMap;

pub mod betweenness;
pub mod closeness;
pub mod degree;
pub mod topk;

/// Per-node scores, one entry per node.
///
/// Order matters: [`topk`] breaks ties by it.
pub type ScoreMap<N, S> = IndexMap<N, S>;

pub use betweenness::{betweenness_centrality, betweenness_centrality_connected};
pub use closeness::closeness_centrality;
pub use degree::degree_centrality;
pub use topk::{Ranked, Ranking, top_five, top_k};
