// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Depth-first topological sorting with cycle detection

use crate::graph::DirectedGraph;
use crate::types::Vertex;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Finished,
}

/// Order the vertices so that every edge points forward.
///
/// Each vertex is emitted once all of its inbound neighbors (prerequisites)
/// are finished. Roots are tried in ascending vertex order. Returns `None`
/// as soon as a vertex reaches one that is still in progress, i.e. the graph
/// has a cycle.
#[must_use]
pub fn topological_order(graph: &DirectedGraph) -> Option<Vec<Vertex>> {
    let mut marks: HashMap<Vertex, Mark> = HashMap::with_capacity(graph.vertex_count());
    let mut order = Vec::with_capacity(graph.vertex_count());
    // (vertex, index of the next inbound neighbor to visit)
    let mut stack: Vec<(Vertex, usize)> = Vec::new();

    for root in graph.vertices() {
        if marks.contains_key(&root) {
            continue;
        }
        marks.insert(root, Mark::InProgress);
        stack.push((root, 0));

        while let Some((vertex, cursor)) = stack.last_mut() {
            let prerequisites = graph.inbound(*vertex).unwrap_or_default();

            if let Some(&prev) = prerequisites.get(*cursor) {
                *cursor += 1;
                match marks.get(&prev) {
                    Some(Mark::InProgress) => {
                        debug!(vertex = *vertex, prev, "cycle found");
                        return None;
                    }
                    Some(Mark::Finished) => {}
                    None => {
                        marks.insert(prev, Mark::InProgress);
                        stack.push((prev, 0));
                    }
                }
            } else {
                let done = *vertex;
                stack.pop();
                marks.insert(done, Mark::Finished);
                order.push(done);
            }
        }
    }

    Some(order)
}

/// Check whether the graph is a directed acyclic graph
#[must_use]
pub fn is_dag(graph: &DirectedGraph) -> bool {
    topological_order(graph).is_some()
}
