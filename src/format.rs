// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Flat edge-list text format.
//!
//! ```text
//! <vertexCount> <edgeCount>
//! <source> <target> <cost>     one line per edge
//! <vertex>                     one line per isolated vertex
//! ```
//!
//! Tokens are whitespace separated integers; blank lines are ignored.

use crate::error::GraphError;
use crate::graph::DirectedGraph;
use crate::types::{Cost, Vertex};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures while reading or writing an edge list
#[derive(Debug, Error)]
pub enum FormatError {
    /// Underlying I/O failure
    #[error("failed to read or write graph: {0}")]
    Io(#[from] std::io::Error),

    /// A line does not follow the format
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What is wrong with the line
        message: String,
    },

    /// The described graph is inconsistent (e.g. a duplicated edge)
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Most vertices a header may add beyond the ones named in the body
pub const MAX_IMPLICIT_VERTICES: usize = 1 << 20;

fn parse_token<T: std::str::FromStr>(token: &str, what: &str, line: usize) -> Result<T, FormatError> {
    token.parse().map_err(|_| FormatError::Parse {
        line,
        message: format!("{what} must be an integer, got '{token}'"),
    })
}

/// Read a graph from an edge list.
///
/// Every vertex named on a line is created. When the header declares more
/// vertices than were named, the smallest unused ids from 0 upwards fill
/// the gap, so a bare edge list over `0..n` reads as expected. A header
/// that would add more than [`MAX_IMPLICIT_VERTICES`] such vertices is
/// rejected.
pub fn read_graph<R: BufRead>(reader: R) -> Result<DirectedGraph, FormatError> {
    let mut header: Option<(usize, usize, usize)> = None;
    let mut named: BTreeSet<Vertex> = BTreeSet::new();
    let mut edges: Vec<(Vertex, Vertex, Cost)> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        if header.is_none() {
            let [vertices, edge_count] = tokens[..] else {
                return Err(FormatError::Parse {
                    line: line_no,
                    message: "header must be '<vertexCount> <edgeCount>'".into(),
                });
            };
            header = Some((
                line_no,
                parse_token(vertices, "vertex count", line_no)?,
                parse_token(edge_count, "edge count", line_no)?,
            ));
            continue;
        }

        match tokens[..] {
            [vertex] => {
                named.insert(parse_token(vertex, "vertex", line_no)?);
            }
            [from, to, cost] => {
                let from: Vertex = parse_token(from, "source vertex", line_no)?;
                let to: Vertex = parse_token(to, "target vertex", line_no)?;
                let cost: Cost = parse_token(cost, "cost", line_no)?;
                named.insert(from);
                named.insert(to);
                edges.push((from, to, cost));
            }
            _ => {
                return Err(FormatError::Parse {
                    line: line_no,
                    message: format!(
                        "expected '<source> <target> <cost>' or '<vertex>', got {} tokens",
                        tokens.len()
                    ),
                });
            }
        }
    }

    let Some((header_line, vertex_count, edge_count)) = header else {
        return Err(FormatError::Parse {
            line: 1,
            message: "missing '<vertexCount> <edgeCount>' header".into(),
        });
    };

    let implicit = vertex_count.saturating_sub(named.len());
    if implicit > MAX_IMPLICIT_VERTICES {
        return Err(FormatError::Parse {
            line: header_line,
            message: format!(
                "header declares {vertex_count} vertices but only {} are listed",
                named.len()
            ),
        });
    }

    let mut candidate = 0;
    while named.len() < vertex_count {
        named.insert(candidate);
        candidate += 1;
    }

    let mut graph = DirectedGraph::new();
    for vertex in named {
        graph.add_vertex(vertex)?;
    }
    for (from, to, cost) in edges {
        graph.add_edge(from, to, cost)?;
    }

    if graph.vertex_count() != vertex_count {
        warn!(declared = vertex_count, found = graph.vertex_count(), "vertex count mismatch");
    }
    if graph.edge_count() != edge_count {
        warn!(declared = edge_count, found = graph.edge_count(), "edge count mismatch");
    }
    debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "read edge list");

    Ok(graph)
}

/// Parse a graph from edge-list text
pub fn parse_graph(text: &str) -> Result<DirectedGraph, FormatError> {
    read_graph(text.as_bytes())
}

/// Write a graph as an edge list: header, edges, then isolated vertices
pub fn write_graph<W: Write>(graph: &DirectedGraph, mut writer: W) -> Result<(), FormatError> {
    writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
    for edge in graph.edges() {
        writeln!(writer, "{} {} {}", edge.from, edge.to, edge.cost)?;
    }
    for vertex in graph.isolated_vertices() {
        writeln!(writer, "{vertex}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a graph as edge-list text
#[must_use]
pub fn to_edge_list(graph: &DirectedGraph) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_graph(graph, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Load a graph from an edge-list file
pub fn load(path: &Path) -> Result<DirectedGraph, FormatError> {
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}

/// Save a graph to an edge-list file, replacing its contents
pub fn save(graph: &DirectedGraph, path: &Path) -> Result<(), FormatError> {
    let file = File::create(path)?;
    write_graph(graph, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edge;

    #[test]
    fn test_write_edge_list() {
        let graph = DirectedGraph::from_edges(4, &[(1, 2, -1), (0, 1, 4)]).unwrap();

        insta::assert_snapshot!(to_edge_list(&graph).trim_end(), @r"
        4 2
        0 1 4
        1 2 -1
        3
        ");
    }

    #[test]
    fn test_round_trip_keeps_isolated_and_sparse_ids() {
        let mut graph = DirectedGraph::from_edges(5, &[(0, 4, 7), (4, 0, -2), (2, 2, 1)]).unwrap();
        graph.remove_vertex(1).unwrap();
        graph.add_vertex(10).unwrap();

        let loaded = parse_graph(&to_edge_list(&graph)).unwrap();

        assert_eq!(loaded, graph);
        assert_eq!(loaded.isolated_vertices(), vec![3, 10]);
    }

    #[test]
    fn test_header_fills_missing_vertices() {
        let loaded = parse_graph("5 2\n0 1 3\n\n1 2 4\n").unwrap();

        assert_eq!(loaded.vertex_count(), 5);
        assert_eq!(loaded.isolated_vertices(), vec![3, 4]);
        assert_eq!(
            loaded.edges().collect::<Vec<_>>(),
            vec![Edge::new(0, 1, 3), Edge::new(1, 2, 4)]
        );
    }

    #[test]
    fn test_oversized_header_rejected() {
        let err = parse_graph("20000000 0\n").unwrap_err();
        assert!(matches!(err, FormatError::Parse { line: 1, .. }), "{err}");

        let err = parse_graph("\n20000000 1\n0 1 5\n").unwrap_err();
        assert!(matches!(err, FormatError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_header_fill_up_to_limit() {
        let loaded = parse_graph("1000 0\n").unwrap();
        assert_eq!(loaded.vertex_count(), 1000);
        assert_eq!(loaded.vertices().last(), Some(999));
    }

    #[test]
    fn test_empty_graph() {
        let graph = DirectedGraph::new();

        assert_eq!(to_edge_list(&graph), "0 0\n");
        assert_eq!(parse_graph("0 0\n").unwrap(), graph);
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_graph("3 1\n0 x 2\n").unwrap_err();
        assert!(matches!(err, FormatError::Parse { line: 2, .. }), "{err}");

        let err = parse_graph("3 1\n0 1\n").unwrap_err();
        assert!(matches!(err, FormatError::Parse { line: 2, .. }), "{err}");

        let err = parse_graph("3\n").unwrap_err();
        assert!(matches!(err, FormatError::Parse { line: 1, .. }), "{err}");

        let err = parse_graph("\n\n").unwrap_err();
        assert!(matches!(err, FormatError::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn test_negative_vertex_rejected() {
        let err = parse_graph("2 1\n-1 0 3\n").unwrap_err();

        assert!(matches!(err, FormatError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let err = parse_graph("2 2\n0 1 3\n0 1 4\n").unwrap_err();

        assert!(matches!(err, FormatError::Graph(GraphError::EdgeExists(0, 1))));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 4), (1, 2, 1)]).unwrap();

        save(&graph, &path).unwrap();
        assert_eq!(load(&path).unwrap(), graph);
    }
}
