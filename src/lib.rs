// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Dirgraph library - weighted directed graphs and the walks through them
//!
//! This crate provides an in-memory directed graph with integer edge costs
//! and a family of path/ordering algorithms over it: backward Dijkstra,
//! depth-first topological sorting, DAG longest paths and a length-bounded
//! Bellman-Ford that detects negative cycles.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algo;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod random;
pub mod session;

/// Core data types shared by the store and the algorithms
pub mod types {
    use crate::error::GraphError;
    use serde::{Deserialize, Serialize};
    use std::fmt;

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// A vertex identifier (non-negative integer)
    pub type Vertex = usize;

    /// An edge cost. Costs may be negative.
    pub type Cost = i64;

    // =========================================================================
    // Edge
    // =========================================================================

    /// A directed edge with its cost
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct Edge {
        /// Source vertex
        pub from: Vertex,
        /// Target vertex
        pub to: Vertex,
        /// Edge cost
        pub cost: Cost,
    }

    impl Edge {
        /// Create a new edge
        #[must_use]
        pub fn new(from: Vertex, to: Vertex, cost: Cost) -> Self {
            Self { from, to, cost }
        }
    }

    impl fmt::Display for Edge {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {}), {}", self.from, self.to, self.cost)
        }
    }

    // =========================================================================
    // Walks
    // =========================================================================

    /// A walk through the graph together with its total cost
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Walk {
        /// Vertices from source to target, inclusive
        pub vertices: Vec<Vertex>,
        /// Sum of the edge costs along consecutive vertices
        pub cost: Cost,
    }

    impl Walk {
        /// First vertex of the walk
        #[must_use]
        pub fn source(&self) -> Option<Vertex> {
            self.vertices.first().copied()
        }

        /// Last vertex of the walk
        #[must_use]
        pub fn target(&self) -> Option<Vertex> {
            self.vertices.last().copied()
        }

        /// Number of edges in the walk
        #[must_use]
        pub fn len(&self) -> usize {
            self.vertices.len().saturating_sub(1)
        }

        /// True for a walk with no edges
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    impl fmt::Display for Walk {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let hops: Vec<String> = self.vertices.iter().map(ToString::to_string).collect();
            write!(f, "{} (cost {})", hops.join(" -> "), self.cost)
        }
    }

    /// Outcome of a negative-cycle-aware walk search
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "outcome", rename_all = "snake_case")]
    pub enum WalkSearch {
        /// A minimum cost walk was found
        Found {
            /// The walk
            walk: Walk,
        },
        /// The target is not reachable within the length bound
        NotFound,
        /// A negative cost cycle is reachable from the start vertex
        NegativeCycle,
    }

    impl WalkSearch {
        /// Turn the outcome into a walk, mapping the other outcomes to errors
        pub fn into_walk(self, from: Vertex, to: Vertex) -> Result<Walk, GraphError> {
            match self {
                Self::Found { walk } => Ok(walk),
                Self::NotFound => Err(GraphError::NoWalk { from, to }),
                Self::NegativeCycle => Err(GraphError::NegativeCycleDetected),
            }
        }
    }

    // =========================================================================
    // Export Document
    // =========================================================================

    /// Serializable view of a whole graph
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GraphDocument {
        /// All vertices in ascending order
        #[serde(default)]
        pub vertices: Vec<Vertex>,
        /// All edges in ascending (from, to) order
        #[serde(default)]
        pub edges: Vec<Edge>,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::GraphError;
    pub use crate::graph::DirectedGraph;
    pub use crate::types::*;
}
