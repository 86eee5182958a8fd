// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use dirgraph::algo::{min_cost_walk, topological_order};
use dirgraph::graph::DirectedGraph;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge(u8, u8, i8),
    RemoveEdge(u8, u8),
    SetCost(u8, u8, i8),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut graph = DirectedGraph::with_vertices(8);
    for op in ops {
        let _ = match op {
            Op::AddVertex(v) => graph.add_vertex(v.into()),
            Op::RemoveVertex(v) => graph.remove_vertex(v.into()),
            Op::AddEdge(u, v, c) => graph.add_edge(u.into(), v.into(), c.into()),
            Op::RemoveEdge(u, v) => graph.remove_edge(u.into(), v.into()),
            Op::SetCost(u, v, c) => graph.update_cost(u.into(), v.into(), c.into()),
        };
    }

    if let Some(order) = topological_order(&graph) {
        assert_eq!(order.len(), graph.vertex_count());
    }
    if graph.contains_vertex(0) && graph.contains_vertex(1) {
        let _ = min_cost_walk(&graph, 0, 1);
    }
});
