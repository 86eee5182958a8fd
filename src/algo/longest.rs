// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Highest cost path in a DAG, one relaxation pass over a topological order

use super::topo::topological_order;
use crate::error::GraphError;
use crate::graph::DirectedGraph;
use crate::types::{Cost, Vertex, Walk};
use std::collections::HashMap;
use tracing::debug;

/// Distance of vertices not yet reached from the start vertex
const UNREACHED: Cost = Cost::MIN;

/// Find a highest cost path from `start` to `end`, given a topological
/// order of the graph.
///
/// Processing stops at `end`: nothing later in the order can reach it.
pub fn highest_cost_path(
    graph: &DirectedGraph,
    order: &[Vertex],
    start: Vertex,
    end: Vertex,
) -> Result<Walk, GraphError> {
    graph.ensure_vertex(start)?;
    graph.ensure_vertex(end)?;

    let mut distance: HashMap<Vertex, Cost> = graph.vertices().map(|v| (v, UNREACHED)).collect();
    let mut prev: HashMap<Vertex, Vertex> = HashMap::new();
    distance.insert(start, 0);

    for &vertex in order {
        if vertex == end {
            break;
        }
        let here = distance.get(&vertex).copied().unwrap_or(UNREACHED);
        if here == UNREACHED {
            continue;
        }
        for &next in graph.outbound(vertex)? {
            let candidate = here.saturating_add(graph.cost(vertex, next)?);
            if candidate > distance[&next] {
                distance.insert(next, candidate);
                prev.insert(next, vertex);
            }
        }
    }

    let cost = distance[&end];
    if cost == UNREACHED {
        return Err(GraphError::NoPath { from: start, to: end });
    }

    let mut vertices = vec![end];
    let mut current = end;
    while current != start {
        current = *prev
            .get(&current)
            .ok_or(GraphError::NoPath { from: start, to: end })?;
        vertices.push(current);
    }
    vertices.reverse();

    debug!(start, end, cost, hops = vertices.len() - 1, "highest cost path");
    Ok(Walk { vertices, cost })
}

/// Sort the graph topologically and find a highest cost path in it
pub fn longest_path(graph: &DirectedGraph, start: Vertex, end: Vertex) -> Result<Walk, GraphError> {
    let order = topological_order(graph).ok_or(GraphError::NotADag)?;
    highest_cost_path(graph, &order, start, end)
}
