//! Connected-component decomposition.
//!
//! [`connected_components`] returns a lazy iterator: each call to `next`
//! runs one BFS from the first unvisited node (in graph node order) and
//! yields the nodes it reached. Every node appears in exactly one
//! component. Calling [`connected_components`] again restarts from scratch.
//!
//! A [`Component`] borrows the parent graph and builds its induced subgraph
//! on demand. Because components are maximal, the induced subgraph carries
//! every edge incident to its members; no edge crosses a component
//! boundary.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::trace;

use super::model::{Graph, NodeId};

/// Lazily partition `graph` into connected components.
#[must_use]
pub fn connected_components<N: NodeId>(graph: &Graph<N>) -> Components<'_, N> {
    Components {
        graph,
        visited: vec![false; graph.node_count()],
        cursor: 0,
    }
}

/// `true` when the graph has exactly one connected component.
///
/// The empty graph has zero components and is therefore not connected.
#[must_use]
pub fn is_connected<N: NodeId>(graph: &Graph<N>) -> bool {
    connected_components(graph).take(2).count() == 1
}

/// Number of connected components.
#[must_use]
pub fn component_count<N: NodeId>(graph: &Graph<N>) -> usize {
    connected_components(graph).count()
}

// ---------------------------------------------------------------------------
// Components iterator
// ---------------------------------------------------------------------------

/// Iterator over the connected components of a graph.
#[derive(Debug)]
pub struct Components<'g, N> {
    graph: &'g Graph<N>,
    visited: Vec<bool>,
    /// Every node below this index has been visited.
    cursor: usize,
}

impl<'g, N: NodeId> Iterator for Components<'g, N> {
    type Item = Component<'g, N>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.visited.len() && self.visited[self.cursor] {
            self.cursor += 1;
        }
        if self.cursor >= self.visited.len() {
            return None;
        }

        let start = NodeIndex::new(self.cursor);
        let mut members = vec![start];
        let mut queue = VecDeque::from([start]);
        self.visited[start.index()] = true;

        while let Some(v) = queue.pop_front() {
            for w in self.graph.neighbor_indices(v) {
                if !self.visited[w.index()] {
                    self.visited[w.index()] = true;
                    members.push(w);
                    queue.push_back(w);
                }
            }
        }

        // Report members in graph node order, not discovery order.
        members.sort_unstable();
        trace!(start = self.cursor, size = members.len(), "component found");

        Some(Component {
            graph: self.graph,
            members,
        })
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// One maximal set of mutually reachable nodes.
#[derive(Debug, Clone)]
pub struct Component<'g, N> {
    graph: &'g Graph<N>,
    members: Vec<NodeIndex>,
}

impl<'g, N: NodeId> Component<'g, N> {
    /// Member nodes, in the parent graph's node order.
    pub fn nodes(&self) -> impl Iterator<Item = &'g N> + '_ {
        self.members.iter().map(|&idx| self.graph.node_at(idx))
    }

    /// Number of member nodes. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `node` is a member.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.graph
            .index_of(node)
            .is_some_and(|idx| self.members.binary_search(&idx).is_ok())
    }

    /// The induced subgraph on this component's members.
    #[must_use]
    pub fn subgraph(&self) -> Graph<N> {
        self.graph.induced_by_indices(&self.members)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
