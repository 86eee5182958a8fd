// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Random graph generation

use crate::error::GraphError;
use crate::graph::DirectedGraph;
use crate::types::Cost;
use rand::Rng;
use tracing::debug;

/// Upper bound for generated edge costs unless configured otherwise
pub const DEFAULT_MAX_COST: Cost = 200;

/// Generate a graph on vertices `0..vertex_count` with exactly `edge_count`
/// distinct edges.
///
/// Ordered pairs (self-loops included) and costs in `0..=max_cost` are
/// drawn uniformly; pairs that already have an edge are drawn again.
pub fn generate_random_graph<R: Rng>(
    vertex_count: usize,
    edge_count: usize,
    max_cost: Cost,
    rng: &mut R,
) -> Result<DirectedGraph, GraphError> {
    let max = vertex_count.saturating_mul(vertex_count);
    if edge_count > max {
        return Err(GraphError::TooManyEdges {
            requested: edge_count,
            max,
        });
    }
    if max_cost < 0 {
        return Err(GraphError::invalid("maximum cost must not be negative"));
    }

    let mut graph = DirectedGraph::with_vertices(vertex_count);
    let mut draws = 0usize;
    while graph.edge_count() < edge_count {
        let from = rng.random_range(0..vertex_count);
        let to = rng.random_range(0..vertex_count);
        let cost = rng.random_range(0..=max_cost);
        draws += 1;
        match graph.add_edge(from, to, cost) {
            Ok(()) | Err(GraphError::EdgeExists(..)) => {}
            Err(other) => return Err(other),
        }
    }

    debug!(vertex_count, edge_count, draws, "generated random graph");
    Ok(graph)
}
