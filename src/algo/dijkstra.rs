// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Backward Dijkstra: minimum cost walks from every vertex into one target

use crate::error::GraphError;
use crate::graph::DirectedGraph;
use crate::types::{Cost, Vertex, Walk};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};
use tracing::{debug, trace};

/// Distance recorded for vertices with no walk to the target
pub const UNREACHABLE: Cost = Cost::MAX;

/// Single-sink search result: distances into a fixed target plus the
/// successor of every reached vertex on its cheapest walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    target: Vertex,
    distance: BTreeMap<Vertex, Cost>,
    next: HashMap<Vertex, Vertex>,
}

impl ShortestPaths {
    /// The vertex every walk ends in
    #[must_use]
    pub fn target(&self) -> Vertex {
        self.target
    }

    /// Raw distance of a vertex, [`UNREACHABLE`] when it has no walk.
    /// `None` for vertices outside the searched graph.
    #[must_use]
    pub fn distance(&self, vertex: Vertex) -> Option<Cost> {
        self.distance.get(&vertex).copied()
    }

    /// Next vertex on the cheapest walk from `vertex` to the target
    #[must_use]
    pub fn successor(&self, vertex: Vertex) -> Option<Vertex> {
        self.next.get(&vertex).copied()
    }

    /// Rebuild the cheapest walk from `source` by following successors
    pub fn walk_from(&self, source: Vertex) -> Result<Walk, GraphError> {
        let cost = self
            .distance(source)
            .ok_or(GraphError::UnknownVertex(source))?;
        if cost == UNREACHABLE {
            return Err(GraphError::NoWalk {
                from: source,
                to: self.target,
            });
        }

        let mut vertices = vec![source];
        let mut current = source;
        while current != self.target {
            current = self.successor(current).ok_or(GraphError::NoWalk {
                from: source,
                to: self.target,
            })?;
            vertices.push(current);
        }

        Ok(Walk { vertices, cost })
    }
}

/// Run Dijkstra over the reversed graph rooted at `target`.
///
/// Costs must be non-negative for the distances to be minimal. Every vertex
/// is settled at most once, so the search terminates on any input.
pub fn backward_dijkstra(graph: &DirectedGraph, target: Vertex) -> Result<ShortestPaths, GraphError> {
    graph.ensure_vertex(target)?;

    let mut distance: BTreeMap<Vertex, Cost> =
        graph.vertices().map(|v| (v, UNREACHABLE)).collect();
    let mut next = HashMap::new();
    let mut settled = HashSet::new();
    let mut queue: BinaryHeap<Reverse<(Cost, Vertex)>> = BinaryHeap::new();

    distance.insert(target, 0);
    queue.push(Reverse((0, target)));

    while let Some(Reverse((dist, vertex))) = queue.pop() {
        if !settled.insert(vertex) {
            continue;
        }
        trace!(vertex, dist, "settled");

        for &prev in graph.inbound(vertex)? {
            if settled.contains(&prev) {
                continue;
            }
            let candidate = dist.saturating_add(graph.cost(prev, vertex)?);
            if candidate < distance[&prev] {
                distance.insert(prev, candidate);
                next.insert(prev, vertex);
                queue.push(Reverse((candidate, prev)));
            }
        }
    }

    debug!(target, reached = settled.len(), "backward dijkstra finished");
    Ok(ShortestPaths {
        target,
        distance,
        next,
    })
}

/// Find a lowest cost walk from `source` to `target`
pub fn lowest_cost_path(graph: &DirectedGraph, source: Vertex, target: Vertex) -> Result<Walk, GraphError> {
    graph.ensure_vertex(source)?;
    backward_dijkstra(graph, target)?.walk_from(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_cheaper_detour() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 4), (1, 2, 1), (0, 2, 10)]).unwrap();
        let walk = lowest_cost_path(&graph, 0, 2).unwrap();

        assert_eq!(walk.vertices, vec![0, 1, 2]);
        assert_eq!(walk.cost, 5);
    }

    #[test]
    fn test_unreachable_target() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 4), (2, 0, 1)]).unwrap();

        assert_eq!(
            lowest_cost_path(&graph, 0, 2),
            Err(GraphError::NoWalk { from: 0, to: 2 })
        );
    }

    #[test]
    fn test_source_is_target() {
        let graph = DirectedGraph::with_vertices(2);
        let walk = lowest_cost_path(&graph, 1, 1).unwrap();

        assert_eq!(walk.vertices, vec![1]);
        assert_eq!(walk.cost, 0);
    }

    #[test]
    fn test_unknown_endpoints() {
        let graph = DirectedGraph::with_vertices(2);

        assert_eq!(lowest_cost_path(&graph, 5, 0), Err(GraphError::UnknownVertex(5)));
        assert_eq!(lowest_cost_path(&graph, 0, 5), Err(GraphError::UnknownVertex(5)));
    }

    #[test]
    fn test_distances_to_target() {
        // 0 -> 1 -> 3, 0 -> 2 -> 3, 2 is the cheaper branch
        let graph =
            DirectedGraph::from_edges(5, &[(0, 1, 1), (1, 3, 5), (0, 2, 2), (2, 3, 1)]).unwrap();
        let paths = backward_dijkstra(&graph, 3).unwrap();

        assert_eq!(paths.target(), 3);
        assert_eq!(paths.distance(3), Some(0));
        assert_eq!(paths.distance(2), Some(1));
        assert_eq!(paths.distance(1), Some(5));
        assert_eq!(paths.distance(0), Some(3));
        assert_eq!(paths.distance(4), Some(UNREACHABLE));
        assert_eq!(paths.distance(9), None);
        assert_eq!(paths.successor(0), Some(2));
        assert_eq!(paths.walk_from(0).unwrap().vertices, vec![0, 2, 3]);
    }

    #[test]
    fn test_terminates_with_negative_cycle() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 1), (1, 0, -3), (1, 2, 1)]).unwrap();

        assert!(backward_dijkstra(&graph, 2).is_ok());
    }
}
