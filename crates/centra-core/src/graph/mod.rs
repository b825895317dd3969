//! Graph model and the traversal primitives the centrality measures share.
//!
//! # Overview
//!
//! ```text
//! caller node set + edge set
//!        ↓  model::Graph::new()            (validates, then immutable)
//! Graph<N>
//!   ├─ paths::ShortestPaths                (BFS distances, path counts, enumeration)
//!   └─ components::connected_components    (lazy component partition)
//! ```
//!
//! Every measure in [`crate::metrics`] borrows a `&Graph<N>`; none mutates
//! it.

pub mod components;
pub mod model;
pub mod paths;

// Re-export primary types at module level for convenience.
pub use components::{Component, Components, component_count, connected_components, is_connected};
pub use model::{Graph, NodeId};
pub use paths::{DistanceMap, PathSet, ShortestPaths, all_shortest_paths, distances_from};
