//! Error taxonomy for graph construction.
//!
//! [`InvalidGraph`] is the only error the engine raises, and only while a
//! [`Graph`](crate::graph::Graph) is being built. Once a graph exists every
//! computation over it is infallible: isolated nodes score 0, unreachable
//! nodes are absent from distance maps, and an empty graph yields empty
//! score maps.
//!
//! Node identifiers are rendered with their `Debug` form so the error stays
//! non-generic and can cross `anyhow` boundaries.

/// A node or edge list that does not describe a simple undirected graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGraph {
    /// An edge endpoint is not in the node set.
    #[error("invalid graph: edge ({from}, {to}) references unknown node {missing}")]
    UnknownNode {
        from: String,
        to: String,
        missing: String,
    },

    /// The same unordered pair was supplied twice (in either orientation).
    #[error("invalid graph: duplicate edge ({from}, {to})")]
    DuplicateEdge { from: String, to: String },

    /// An edge joins a node to itself.
    #[error("invalid graph: self-loop on node {node}")]
    SelfLoop { node: String },

    /// The node set lists the same identifier twice.
    #[error("invalid graph: duplicate node {node}")]
    DuplicateNode { node: String },
}

impl InvalidGraph {
    /// Short machine-readable identifier for logs and JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownNode { .. } => "unknown_node",
            Self::DuplicateEdge { .. } => "duplicate_edge",
            Self::SelfLoop { .. } => "self_loop",
            Self::DuplicateNode { .. } => "duplicate_node",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InvalidGraph;

    #[test]
    fn messages_name_the_offending_nodes() {
        let err = InvalidGraph::UnknownNode {
            from: "1".into(),
            to: "9".into(),
            missing: "9".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid graph: edge (1, 9) references unknown node 9"
        );

        let err = InvalidGraph::SelfLoop { node: "\"a\"".into() };
        assert!(err.to_string().contains("self-loop"));
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            InvalidGraph::UnknownNode {
                from: String::new(),
                to: String::new(),
                missing: String::new(),
            }
            .kind(),
            InvalidGraph::DuplicateEdge {
                from: String::new(),
                to: String::new(),
            }
            .kind(),
            InvalidGraph::SelfLoop { node: String::new() }.kind(),
            InvalidGraph::DuplicateNode { node: String::new() }.kind(),
        ];
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());
    }
}
