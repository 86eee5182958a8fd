// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Length-bounded Bellman-Ford.
//!
//! Layer `k` holds, for every vertex reachable from the start by a walk of
//! exactly `k` edges, the minimum cost of such a walk:
//!
//! ```text
//!   layer[0]    = { start: 0 }
//!   layer[k][v] = min over edges (u, v) with u in layer[k-1] of layer[k-1][u] + cost(u, v)
//! ```
//!
//! Without negative cycles every cheapest walk can be shortened to a simple
//! path of at most `V - 1` edges. A vertex whose cheapest walk keeps getting
//! cheaper past that bound therefore proves a reachable negative cycle.

use crate::error::GraphError;
use crate::graph::DirectedGraph;
use crate::types::{Cost, Vertex, Walk, WalkSearch};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Exact-length minimum costs from a fixed start vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkLayers {
    start: Vertex,
    vertex_count: usize,
    layers: Vec<HashMap<Vertex, Cost>>,
}

impl WalkLayers {
    /// The vertex every walk starts from
    #[must_use]
    pub fn start(&self) -> Vertex {
        self.start
    }

    /// Longest walk length with a computed layer
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.layers.len() - 1
    }

    /// Minimum cost of a walk of exactly `length` edges ending in `vertex`
    #[must_use]
    pub fn cost(&self, length: usize, vertex: Vertex) -> Option<Cost> {
        self.layers.get(length)?.get(&vertex).copied()
    }

    /// Minimum cost over all walks of at most `length` edges ending in `vertex`
    #[must_use]
    pub fn best_within(&self, length: usize, vertex: Vertex) -> Option<Cost> {
        self.layers
            .iter()
            .take(length + 1)
            .filter_map(|layer| layer.get(&vertex).copied())
            .min()
    }

    /// Cheapest layer for `vertex` as `(length, cost)`, shortest length on ties
    #[must_use]
    pub fn cheapest(&self, vertex: Vertex) -> Option<(usize, Cost)> {
        let mut best: Option<(usize, Cost)> = None;
        for (length, layer) in self.layers.iter().enumerate() {
            if let Some(&cost) = layer.get(&vertex) {
                if best.map_or(true, |(_, current)| cost < current) {
                    best = Some((length, cost));
                }
            }
        }
        best
    }

    /// Check whether a negative cost cycle is reachable from the start
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        let simple = self.vertex_count.saturating_sub(1);
        if self.max_length() <= simple {
            return false;
        }

        let reached: HashSet<Vertex> = self
            .layers
            .iter()
            .flat_map(|layer| layer.keys().copied())
            .collect();

        reached.into_iter().any(|vertex| {
            match (
                self.best_within(simple, vertex),
                self.best_within(self.max_length(), vertex),
            ) {
                (Some(short), Some(long)) => long < short,
                _ => false,
            }
        })
    }

    /// Rebuild a minimum cost walk of exactly `length` edges into `target`.
    ///
    /// Steps backwards, taking the first inbound neighbor whose cost one
    /// layer down plus the edge cost matches the current layer.
    pub fn walk(&self, graph: &DirectedGraph, target: Vertex, length: usize) -> Result<Walk, GraphError> {
        let no_walk = GraphError::NoWalk {
            from: self.start,
            to: target,
        };
        let cost = self.cost(length, target).ok_or_else(|| no_walk.clone())?;

        let mut vertices = vec![target];
        let mut current = target;
        for k in (1..=length).rev() {
            let here = self.layers[k][&current];
            let below = &self.layers[k - 1];
            let prev = graph
                .inbound(current)?
                .iter()
                .copied()
                .find(|&p| {
                    below.get(&p).is_some_and(|&c| {
                        graph
                            .cost(p, current)
                            .is_ok_and(|edge| c.saturating_add(edge) == here)
                    })
                })
                .ok_or_else(|| no_walk.clone())?;
            vertices.push(prev);
            current = prev;
        }
        vertices.reverse();

        Ok(Walk { vertices, cost })
    }
}

/// Compute exact-length minimum costs from `start` for every length up to
/// `max_length`. Stops early once a layer comes out empty.
pub fn bounded_bellman_ford(
    graph: &DirectedGraph,
    start: Vertex,
    max_length: usize,
) -> Result<WalkLayers, GraphError> {
    graph.ensure_vertex(start)?;

    let mut layers = Vec::with_capacity(max_length + 1);
    layers.push(HashMap::from([(start, 0)]));

    for length in 1..=max_length {
        let previous: &HashMap<Vertex, Cost> = &layers[length - 1];
        let mut current: HashMap<Vertex, Cost> = HashMap::new();

        for (&from, &so_far) in previous {
            for &to in graph.outbound(from)? {
                let candidate = so_far.saturating_add(graph.cost(from, to)?);
                current
                    .entry(to)
                    .and_modify(|cost| *cost = (*cost).min(candidate))
                    .or_insert(candidate);
            }
        }

        if current.is_empty() {
            trace!(length, "no walks of this length, stopping");
            break;
        }
        layers.push(current);
    }

    Ok(WalkLayers {
        start,
        vertex_count: graph.vertex_count(),
        layers,
    })
}

/// Find a minimum cost walk from `start` to `end`, allowing negative costs.
///
/// Walks of up to twice the vertex count are considered. Reports
/// [`WalkSearch::NegativeCycle`] when a negative cycle is reachable from
/// `start`, since minimum costs are then unbounded.
pub fn min_cost_walk(graph: &DirectedGraph, start: Vertex, end: Vertex) -> Result<WalkSearch, GraphError> {
    graph.ensure_vertex(end)?;

    let max_length = 2 * graph.vertex_count();
    let layers = bounded_bellman_ford(graph, start, max_length)?;

    if layers.has_negative_cycle() {
        debug!(start, "negative cycle reachable");
        return Ok(WalkSearch::NegativeCycle);
    }

    match layers.cheapest(end) {
        Some((length, cost)) => {
            debug!(start, end, length, cost, "minimum cost walk");
            Ok(WalkSearch::Found {
                walk: layers.walk(graph, end, length)?,
            })
        }
        None => Ok(WalkSearch::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_vertex_negative_cycle() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1, 1), (1, 0, -3)]).unwrap();

        assert_eq!(min_cost_walk(&graph, 0, 1).unwrap(), WalkSearch::NegativeCycle);
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 5), (0, 2, 2), (2, 1, -4)]).unwrap();

        let WalkSearch::Found { walk } = min_cost_walk(&graph, 0, 1).unwrap() else {
            panic!("expected a walk");
        };
        assert_eq!(walk.vertices, vec![0, 2, 1]);
        assert_eq!(walk.cost, -2);
    }

    #[test]
    fn test_positive_cycle_is_harmless() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1, 1), (1, 0, 1)]).unwrap();

        let WalkSearch::Found { walk } = min_cost_walk(&graph, 0, 1).unwrap() else {
            panic!("expected a walk");
        };
        assert_eq!(walk.vertices, vec![0, 1]);
        assert_eq!(walk.cost, 1);
    }

    #[test]
    fn test_unreachable_target() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 1), (2, 1, 1)]).unwrap();

        assert_eq!(min_cost_walk(&graph, 0, 2).unwrap(), WalkSearch::NotFound);
    }

    #[test]
    fn test_unreachable_negative_cycle_ignored() {
        // the cycle 2 <-> 3 cannot be entered from 0
        let graph =
            DirectedGraph::from_edges(4, &[(0, 1, 7), (2, 3, -5), (3, 2, 1), (2, 0, 1)]).unwrap();

        let WalkSearch::Found { walk } = min_cost_walk(&graph, 0, 1).unwrap() else {
            panic!("expected a walk");
        };
        assert_eq!(walk.vertices, vec![0, 1]);
    }

    #[test]
    fn test_start_is_target() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1, 1)]).unwrap();

        let WalkSearch::Found { walk } = min_cost_walk(&graph, 0, 0).unwrap() else {
            panic!("expected a walk");
        };
        assert_eq!(walk.vertices, vec![0]);
        assert_eq!(walk.cost, 0);
    }

    #[test]
    fn test_layers_hold_exact_lengths() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 5)]).unwrap();
        let layers = bounded_bellman_ford(&graph, 0, 4).unwrap();

        assert_eq!(layers.start(), 0);
        assert_eq!(layers.cost(0, 0), Some(0));
        assert_eq!(layers.cost(1, 2), Some(5));
        assert_eq!(layers.cost(2, 2), Some(2));
        assert_eq!(layers.cost(1, 0), None);
        assert_eq!(layers.cheapest(2), Some((2, 2)));
        // nothing leaves vertex 2, so layer 3 would be empty
        assert_eq!(layers.max_length(), 2);
        assert_eq!(layers.walk(&graph, 2, 1).unwrap().vertices, vec![0, 2]);
    }

    #[test]
    fn test_unknown_vertices() {
        let graph = DirectedGraph::with_vertices(2);

        assert_eq!(min_cost_walk(&graph, 4, 0), Err(GraphError::UnknownVertex(4)));
        assert_eq!(min_cost_walk(&graph, 0, 4), Err(GraphError::UnknownVertex(4)));
    }

    #[test]
    fn test_outcome_into_walk() {
        let cyclic = DirectedGraph::from_edges(2, &[(0, 1, 1), (1, 0, -3)]).unwrap();
        let search = min_cost_walk(&cyclic, 0, 1).unwrap();
        assert_eq!(search.into_walk(0, 1), Err(GraphError::NegativeCycleDetected));

        let disconnected = DirectedGraph::with_vertices(2);
        let search = min_cost_walk(&disconnected, 0, 1).unwrap();
        assert_eq!(search.into_walk(0, 1), Err(GraphError::NoWalk { from: 0, to: 1 }));
    }
}
