// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error taxonomy for graph operations and searches

use crate::types::Vertex;
use thiserror::Error;

/// Failures reported by the graph store and the algorithms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The vertex is not part of the graph
    #[error("nonexistent vertex: {0}")]
    UnknownVertex(Vertex),

    /// No edge exists between the two vertices
    #[error("nonexistent edge: ({0}, {1})")]
    UnknownEdge(Vertex, Vertex),

    /// The vertex is already part of the graph
    #[error("vertex already exists in the graph: {0}")]
    VertexExists(Vertex),

    /// The edge is already part of the graph
    #[error("edge already exists in the graph: ({0}, {1})")]
    EdgeExists(Vertex, Vertex),

    /// No walk of any cost leads from one vertex to the other
    #[error("no walk from {from} to {to}")]
    NoWalk {
        /// Start vertex
        from: Vertex,
        /// End vertex
        to: Vertex,
    },

    /// No path leads from one vertex to the other in the DAG
    #[error("no path from {from} to {to}")]
    NoPath {
        /// Start vertex
        from: Vertex,
        /// End vertex
        to: Vertex,
    },

    /// A negative cost cycle makes minimum costs meaningless
    #[error("graph has negative cost cycles")]
    NegativeCycleDetected,

    /// The graph contains a cycle where a DAG is required
    #[error("graph is not a DAG")]
    NotADag,

    /// More edges were requested than the vertex count allows
    #[error("too many edges: {requested} requested, at most {max} possible")]
    TooManyEdges {
        /// Requested edge count
        requested: usize,
        /// Maximum edge count (vertices squared)
        max: usize,
    },

    /// User input could not be understood
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    /// Shorthand for an [`GraphError::InvalidInput`] error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
