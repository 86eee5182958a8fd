// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Directed graph store with weighted edges

use crate::error::GraphError;
use crate::types::{Cost, Edge, GraphDocument, Vertex};
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A directed graph with at most one weighted edge per ordered vertex pair.
///
/// Outbound lists, inbound lists and the cost map always move together:
/// `w` is in `outbound(v)` exactly when `v` is in `inbound(w)` and the pair
/// `(v, w)` has a cost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Outbound neighbors per vertex, in insertion order
    outbound: BTreeMap<Vertex, Vec<Vertex>>,
    /// Inbound neighbors per vertex, in insertion order
    inbound: BTreeMap<Vertex, Vec<Vertex>>,
    /// Cost of every edge
    costs: BTreeMap<(Vertex, Vertex), Cost>,
}

impl DirectedGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with vertices `0..count` and no edges
    #[must_use]
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = Self::new();
        for vertex in 0..count {
            graph.outbound.insert(vertex, Vec::new());
            graph.inbound.insert(vertex, Vec::new());
        }
        graph
    }

    /// Create a graph with vertices `0..count` and the given edges
    pub fn from_edges(count: usize, edges: &[(Vertex, Vertex, Cost)]) -> Result<Self, GraphError> {
        let mut graph = Self::with_vertices(count);
        for &(from, to, cost) in edges {
            graph.add_edge(from, to, cost)?;
        }
        Ok(graph)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.outbound.len()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.costs.len()
    }

    /// Check if the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outbound.is_empty()
    }

    /// Check whether the vertex is part of the graph
    #[must_use]
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.outbound.contains_key(&vertex)
    }

    /// Fail with [`GraphError::UnknownVertex`] unless the vertex exists
    pub fn ensure_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(vertex))
        }
    }

    /// All vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.outbound.keys().copied()
    }

    /// All edges in ascending (from, to) order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.costs
            .iter()
            .map(|(&(from, to), &cost)| Edge::new(from, to, cost))
    }

    /// Vertices with no inbound and no outbound edges
    #[must_use]
    pub fn isolated_vertices(&self) -> Vec<Vertex> {
        self.vertices()
            .filter(|v| self.outbound[v].is_empty() && self.inbound[v].is_empty())
            .collect()
    }

    /// Check if there is an edge from `from` to `to`.
    ///
    /// An unknown `to` simply has no edge; an unknown `from` is an error.
    pub fn is_edge(&self, from: Vertex, to: Vertex) -> Result<bool, GraphError> {
        Ok(self.outbound(from)?.contains(&to))
    }

    /// Cost of the edge from `from` to `to`
    pub fn cost(&self, from: Vertex, to: Vertex) -> Result<Cost, GraphError> {
        self.ensure_vertex(from)?;
        self.costs
            .get(&(from, to))
            .copied()
            .ok_or(GraphError::UnknownEdge(from, to))
    }

    /// Outbound neighbors of a vertex, in insertion order
    pub fn outbound(&self, vertex: Vertex) -> Result<&[Vertex], GraphError> {
        self.outbound
            .get(&vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownVertex(vertex))
    }

    /// Inbound neighbors of a vertex, in insertion order
    pub fn inbound(&self, vertex: Vertex) -> Result<&[Vertex], GraphError> {
        self.inbound
            .get(&vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownVertex(vertex))
    }

    /// Number of edges ending in the vertex
    pub fn in_degree(&self, vertex: Vertex) -> Result<usize, GraphError> {
        self.inbound(vertex).map(<[Vertex]>::len)
    }

    /// Number of edges starting from the vertex
    pub fn out_degree(&self, vertex: Vertex) -> Result<usize, GraphError> {
        self.outbound(vertex).map(<[Vertex]>::len)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Add a vertex with empty neighbor lists
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            return Err(GraphError::VertexExists(vertex));
        }
        self.outbound.insert(vertex, Vec::new());
        self.inbound.insert(vertex, Vec::new());
        debug!(vertex, "added vertex");
        Ok(())
    }

    /// Remove a vertex and every edge incident to it
    pub fn remove_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        let Some(targets) = self.outbound.remove(&vertex) else {
            return Err(GraphError::UnknownVertex(vertex));
        };

        for to in targets {
            if let Some(sources) = self.inbound.get_mut(&to) {
                sources.retain(|&from| from != vertex);
            }
            self.costs.remove(&(vertex, to));
        }

        for from in self.inbound.remove(&vertex).unwrap_or_default() {
            if let Some(targets) = self.outbound.get_mut(&from) {
                targets.retain(|&to| to != vertex);
            }
            self.costs.remove(&(from, vertex));
        }

        debug!(vertex, "removed vertex");
        Ok(())
    }

    /// Add an edge between two existing vertices
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, cost: Cost) -> Result<(), GraphError> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;
        if self.costs.contains_key(&(from, to)) {
            return Err(GraphError::EdgeExists(from, to));
        }

        if let Some(targets) = self.outbound.get_mut(&from) {
            targets.push(to);
        }
        if let Some(sources) = self.inbound.get_mut(&to) {
            sources.push(from);
        }
        self.costs.insert((from, to), cost);
        debug!(from, to, cost, "added edge");
        Ok(())
    }

    /// Remove an existing edge
    pub fn remove_edge(&mut self, from: Vertex, to: Vertex) -> Result<(), GraphError> {
        if self.costs.remove(&(from, to)).is_none() {
            return Err(GraphError::UnknownEdge(from, to));
        }
        if let Some(targets) = self.outbound.get_mut(&from) {
            targets.retain(|&v| v != to);
        }
        if let Some(sources) = self.inbound.get_mut(&to) {
            sources.retain(|&v| v != from);
        }
        debug!(from, to, "removed edge");
        Ok(())
    }

    /// Overwrite the cost of an existing edge
    pub fn update_cost(&mut self, from: Vertex, to: Vertex, cost: Cost) -> Result<(), GraphError> {
        let slot = self
            .costs
            .get_mut(&(from, to))
            .ok_or(GraphError::UnknownEdge(from, to))?;
        *slot = cost;
        debug!(from, to, cost, "updated edge cost");
        Ok(())
    }

    /// Independent deep copy of the graph
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    // =========================================================================
    // Interop & Export
    // =========================================================================

    /// Build a petgraph view of the graph plus the vertex to node index map
    #[must_use]
    pub fn to_petgraph(&self) -> (DiGraph<Vertex, Cost>, HashMap<Vertex, NodeIndex>) {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        let mut indices = HashMap::with_capacity(self.vertex_count());

        for vertex in self.vertices() {
            indices.insert(vertex, graph.add_node(vertex));
        }
        for edge in self.edges() {
            graph.add_edge(indices[&edge.from], indices[&edge.to], edge.cost);
        }

        (graph, indices)
    }

    /// Export to DOT format for Graphviz, labelling edges with their cost
    #[must_use]
    pub fn to_dot(&self) -> String {
        let (graph, _) = self.to_petgraph();
        format!("{}", Dot::new(&graph))
    }

    /// Serializable view of the whole graph
    #[must_use]
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            vertices: self.vertices().collect(),
            edges: self.edges().collect(),
        }
    }
}
