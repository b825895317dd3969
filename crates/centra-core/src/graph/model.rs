//! The immutable undirected graph every centrality measure borrows.
//!
//! # Overview
//!
//! [`Graph`] wraps a petgraph [`UnGraph`] together with a lookup table from
//! caller-supplied node identifiers to petgraph [`NodeIndex`] values.
//! Construction validates the simple-graph invariants once; after that the
//! graph never changes.
//!
//! ## Ordering
//!
//! Nodes are stored in insertion order and [`Graph::nodes`] yields them in
//! that order. Score maps built over a graph inherit this order, which is
//! what makes top-k tie-breaking reproducible.
//!
//! ## Invariants
//!
//! - no self-loops
//! - no duplicate edges (`(a, b)` and `(b, a)` are the same edge)
//! - no duplicate nodes
//! - every edge endpoint is a known node

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::InvalidGraph;

/// Bounds every node identifier must satisfy.
///
/// Identifiers are opaque to the engine: they are cloned into score maps,
/// hashed for lookup, and rendered with `Debug` in error messages. `Send +
/// Sync` lets components be scored on worker threads.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug + Send + Sync {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug + Send + Sync {}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A simple, undirected, unweighted graph.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    graph: UnGraph<N, ()>,
    node_map: HashMap<N, NodeIndex>,
}

impl<N: NodeId> Graph<N> {
    /// Build a graph from an explicit node set and edge set.
    ///
    /// Nodes keep the order in which `nodes` yields them.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGraph`] if a node repeats, an edge is a self-loop,
    /// an edge references a node not in `nodes`, or an edge repeats (in
    /// either orientation).
    pub fn new<I, E>(nodes: I, edges: E) -> Result<Self, InvalidGraph>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::empty();
        for node in nodes {
            if graph.node_map.contains_key(&node) {
                return Err(InvalidGraph::DuplicateNode {
                    node: render(&node),
                });
            }
            graph.push_node(node);
        }

        for (from, to) in edges {
            graph.push_checked_edge(from, to, false)?;
        }

        Ok(graph)
    }

    /// Build a graph whose node set is exactly the edge endpoints, in order
    /// of first appearance.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGraph::SelfLoop`] or [`InvalidGraph::DuplicateEdge`].
    pub fn from_edges<E>(edges: E) -> Result<Self, InvalidGraph>
    where
        E: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::empty();
        for (from, to) in edges {
            graph.push_checked_edge(from, to, true)?;
        }
        Ok(graph)
    }

    fn empty() -> Self {
        Self {
            graph: UnGraph::default(),
            node_map: HashMap::new(),
        }
    }

    fn push_node(&mut self, node: N) -> NodeIndex {
        let idx = self.graph.add_node(node.clone());
        self.node_map.insert(node, idx);
        idx
    }

    /// Validate and insert one edge. With `admit_nodes`, unknown endpoints
    /// are added to the node set instead of rejected.
    fn push_checked_edge(&mut self, from: N, to: N, admit_nodes: bool) -> Result<(), InvalidGraph> {
        if from == to {
            return Err(InvalidGraph::SelfLoop { node: render(&from) });
        }

        let a = self.resolve_endpoint(&from, &to, &from, admit_nodes)?;
        let b = self.resolve_endpoint(&from, &to, &to, admit_nodes)?;

        // find_edge on an undirected graph matches either orientation.
        if self.graph.find_edge(a, b).is_some() {
            return Err(InvalidGraph::DuplicateEdge {
                from: render(&from),
                to: render(&to),
            });
        }

        self.graph.add_edge(a, b, ());
        Ok(())
    }

    fn resolve_endpoint(
        &mut self,
        from: &N,
        to: &N,
        endpoint: &N,
        admit_nodes: bool,
    ) -> Result<NodeIndex, InvalidGraph> {
        if let Some(&idx) = self.node_map.get(endpoint) {
            return Ok(idx);
        }
        if admit_nodes {
            return Ok(self.push_node(endpoint.clone()));
        }
        Err(InvalidGraph::UnknownNode {
            from: render(from),
            to: render(to),
            missing: render(endpoint),
        })
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph.node_weights()
    }

    /// All edges, each reported once with its endpoints in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()]))
    }

    /// Whether `node` belongs to the graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.node_map.contains_key(node)
    }

    /// Whether the undirected edge `{a, b}` exists.
    #[must_use]
    pub fn contains_edge(&self, a: &N, b: &N) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Neighbors of `node`. Empty for unknown nodes.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + use<'a, N> {
        self.index_of(node)
            .into_iter()
            .flat_map(move |idx| self.graph.neighbors(idx))
            .map(move |idx| &self.graph[idx])
    }

    /// Number of edges incident to `node`, or `None` for unknown nodes.
    #[must_use]
    pub fn degree(&self, node: &N) -> Option<usize> {
        self.index_of(node).map(|idx| self.graph.neighbors(idx).count())
    }

    /// The subgraph induced by `nodes`: those nodes (in the given order,
    /// unknown or repeated entries skipped) and every edge of `self` with
    /// both endpoints among them.
    #[must_use]
    pub fn induced_subgraph<'n, I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = &'n N>,
        N: 'n,
    {
        let members: Vec<NodeIndex> = nodes
            .into_iter()
            .filter_map(|node| self.index_of(node))
            .collect();
        self.induced_by_indices(&members)
    }

    pub(crate) fn induced_by_indices(&self, members: &[NodeIndex]) -> Self {
        let mut sub = Self::empty();
        let mut remap: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(members.len());
        let mut kept: Vec<(NodeIndex, NodeIndex)> = Vec::with_capacity(members.len());

        for &old in members {
            if remap.contains_key(&old) {
                continue;
            }
            let new = sub.push_node(self.graph[old].clone());
            remap.insert(old, new);
            kept.push((old, new));
        }

        // Each edge is seen from both endpoints; keep it from the lower index.
        for &(old, new) in &kept {
            for neighbor in self.graph.neighbors(old) {
                if neighbor.index() <= old.index() {
                    continue;
                }
                if let Some(&other) = remap.get(&neighbor) {
                    sub.graph.add_edge(new, other, ());
                }
            }
        }

        sub
    }

    // -----------------------------------------------------------------------
    // Index-level access for the algorithms in this crate
    // -----------------------------------------------------------------------

    pub(crate) fn index_of(&self, node: &N) -> Option<NodeIndex> {
        self.node_map.get(node).copied()
    }

    pub(crate) fn node_at(&self, idx: NodeIndex) -> &N {
        &self.graph[idx]
    }

    pub(crate) fn neighbor_indices(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    pub(crate) fn edge_indices(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target()))
    }
}

fn render<N: fmt::Debug>(node: &N) -> String {
    format!("{node:?}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
