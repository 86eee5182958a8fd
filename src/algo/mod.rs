// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Path and ordering algorithms over a [`DirectedGraph`](crate::graph::DirectedGraph)
//!
//! Every algorithm borrows the graph immutably and returns a fresh value;
//! none of them keeps state between calls.

pub mod bellman_ford;
pub mod dijkstra;
pub mod longest;
pub mod topo;

pub use bellman_ford::{bounded_bellman_ford, min_cost_walk, WalkLayers};
pub use dijkstra::{backward_dijkstra, lowest_cost_path, ShortestPaths, UNREACHABLE};
pub use longest::{highest_cost_path, longest_path};
pub use topo::{is_dag, topological_order};
