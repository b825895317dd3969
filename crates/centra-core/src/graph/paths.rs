//! Unweighted shortest paths: BFS distances and shortest-path enumeration.
//!
//! # Overview
//!
//! [`ShortestPaths`] runs one breadth-first traversal from a source and
//! keeps the per-node hop counts. Every shortest path to a target can then
//! be recovered by walking backwards from the target, stepping only to
//! neighbors exactly one hop closer to the source. No predecessor lists are
//! stored; the distance table alone identifies the shortest-path DAG.
//!
//! Shortest paths in an unweighted graph never repeat a node, so every
//! enumerated path is simple.
//!
//! ## Unreachable nodes
//!
//! Nodes the traversal never reaches have no distance. They are absent from
//! [`DistanceMap`] rather than assigned infinity, and their path set is
//! empty.

use std::collections::VecDeque;

use indexmap::IndexMap;
use petgraph::graph::NodeIndex;

use super::model::{Graph, NodeId};

/// Hop counts from a fixed source, in BFS discovery order. Only reachable
/// nodes are present.
pub type DistanceMap<N> = IndexMap<N, usize>;

/// Every shortest node sequence between two nodes, each starting at the
/// source and ending at the target.
pub type PathSet<N> = Vec<Vec<N>>;

/// Breadth-first distances from `source`.
///
/// Returns an empty map when `source` is not in the graph.
#[must_use]
pub fn distances_from<N: NodeId>(graph: &Graph<N>, source: &N) -> DistanceMap<N> {
    ShortestPaths::from_source(graph, source)
        .map(|sp| sp.distances())
        .unwrap_or_default()
}

/// Every shortest path from `source` to `target`.
///
/// - `source == target` yields the single zero-length path `[source]`.
/// - An unreachable or unknown target yields an empty set.
#[must_use]
pub fn all_shortest_paths<N: NodeId>(graph: &Graph<N>, source: &N, target: &N) -> PathSet<N> {
    ShortestPaths::from_source(graph, source)
        .map(|sp| sp.paths_to(target))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// ShortestPaths
// ---------------------------------------------------------------------------

/// The result of one BFS from a fixed source.
///
/// Answers distance, path-count and path-enumeration queries for any
/// number of targets without traversing the graph again.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, N> {
    graph: &'g Graph<N>,
    source: NodeIndex,
    /// `dist[i]`: hops from `source` to node `i`, `None` if unreachable.
    dist: Vec<Option<usize>>,
    /// `sigma[i]`: number of shortest paths from `source` to node `i`.
    sigma: Vec<u64>,
    /// Reached nodes in discovery order (source first).
    order: Vec<NodeIndex>,
}

impl<'g, N: NodeId> ShortestPaths<'g, N> {
    /// Traverse from `source`. `None` when `source` is not in the graph.
    #[must_use]
    pub fn from_source(graph: &'g Graph<N>, source: &N) -> Option<Self> {
        graph
            .index_of(source)
            .map(|idx| Self::from_index(graph, idx))
    }

    pub(crate) fn from_index(graph: &'g Graph<N>, source: NodeIndex) -> Self {
        let n = graph.node_count();
        let mut dist: Vec<Option<usize>> = vec![None; n];
        let mut sigma: Vec<u64> = vec![0; n];
        let mut order: Vec<NodeIndex> = Vec::with_capacity(n);
        let mut queue: VecDeque<NodeIndex> = VecDeque::new();

        dist[source.index()] = Some(0);
        sigma[source.index()] = 1;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            let Some(dv) = dist[v.index()] else {
                continue;
            };

            for w in graph.neighbor_indices(v) {
                let wi = w.index();
                if dist[wi].is_none() {
                    dist[wi] = Some(dv + 1);
                    queue.push_back(w);
                }
                if dist[wi] == Some(dv + 1) {
                    sigma[wi] = sigma[wi].saturating_add(sigma[v.index()]);
                }
            }
        }

        Self {
            graph,
            source,
            dist,
            sigma,
            order,
        }
    }

    /// The source node.
    #[must_use]
    pub fn source(&self) -> &N {
        self.graph.node_at(self.source)
    }

    /// Number of nodes reached, the source included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.order.len()
    }

    /// Hop count to `target`, or `None` if unknown or unreachable.
    #[must_use]
    pub fn distance_to(&self, target: &N) -> Option<usize> {
        self.graph
            .index_of(target)
            .and_then(|idx| self.dist[idx.index()])
    }

    /// Number of distinct shortest paths to `target` (0 if unreachable).
    ///
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub fn path_count_to(&self, target: &N) -> u64 {
        self.graph
            .index_of(target)
            .map_or(0, |idx| self.sigma[idx.index()])
    }

    /// The full distance map, in discovery order.
    #[must_use]
    pub fn distances(&self) -> DistanceMap<N> {
        self.order
            .iter()
            .filter_map(|&idx| {
                self.dist[idx.index()].map(|d| (self.graph.node_at(idx).clone(), d))
            })
            .collect()
    }

    /// Sum of hop counts over every reached node.
    #[must_use]
    pub fn total_distance(&self) -> usize {
        self.order
            .iter()
            .filter_map(|&idx| self.dist[idx.index()])
            .sum()
    }

    /// Reached nodes in discovery order, so by non-decreasing distance.
    pub(crate) fn discovery_order(&self) -> &[NodeIndex] {
        &self.order
    }

    pub(crate) fn distance_at(&self, idx: NodeIndex) -> Option<usize> {
        self.dist[idx.index()]
    }

    pub(crate) fn path_count_at(&self, idx: NodeIndex) -> u64 {
        self.sigma[idx.index()]
    }

    /// Every shortest path from the source to `target`.
    #[must_use]
    pub fn paths_to(&self, target: &N) -> PathSet<N> {
        let Some(idx) = self.graph.index_of(target) else {
            return Vec::new();
        };
        self.index_paths_to(idx)
            .into_iter()
            .map(|path| {
                path.into_iter()
                    .map(|i| self.graph.node_at(i).clone())
                    .collect()
            })
            .collect()
    }

    /// Index-level form of [`Self::paths_to`], used by the betweenness
    /// accumulator to avoid cloning identifiers.
    pub(crate) fn index_paths_to(&self, target: NodeIndex) -> Vec<Vec<NodeIndex>> {
        let Some(d) = self.dist[target.index()] else {
            return Vec::new();
        };

        let mut paths = Vec::new();
        let mut reversed = Vec::with_capacity(d + 1);
        reversed.push(target);
        self.walk_back(target, d, &mut reversed, &mut paths);
        paths
    }

    /// Extend the reversed partial path ending at `node` (at distance `d`)
    /// towards the source through every neighbor at distance `d - 1`.
    fn walk_back(
        &self,
        node: NodeIndex,
        d: usize,
        reversed: &mut Vec<NodeIndex>,
        out: &mut Vec<Vec<NodeIndex>>,
    ) {
        if node == self.source {
            out.push(reversed.iter().rev().copied().collect());
            return;
        }
        let Some(prev_d) = d.checked_sub(1) else {
            return;
        };

        for prev in self.graph.neighbor_indices(node) {
            if self.dist[prev.index()] == Some(prev_d) {
                reversed.push(prev);
                self.walk_back(prev, prev_d, reversed, out);
                reversed.pop();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
