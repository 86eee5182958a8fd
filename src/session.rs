// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Session context and request dispatch.
//!
//! A [`Session`] owns the active graph and an optional saved copy of it.
//! Both the interactive shell and the one-shot CLI commands parse their
//! input into a [`Request`], execute it against a session and render the
//! resulting [`Reply`].

use crate::algo;
use crate::error::GraphError;
use crate::format;
use crate::graph::DirectedGraph;
use crate::random::{generate_random_graph, DEFAULT_MAX_COST};
use crate::types::{Cost, GraphDocument, Vertex, Walk, WalkSearch};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Shell help text
pub const HELP: &str = "\
Commands:
  count                     number of vertices and edges
  vertices                  list all vertices
  isolated                  list isolated vertices
  edge? <u> <v>             is there an edge from u to v
  degree <v>                in and out degree of v
  out <v> | in <v>          outbound / inbound neighbours of v
  neighbours <v>            both neighbour lists of v
  add-vertex <v>            add a vertex
  remove-vertex <v>         remove a vertex and its edges
  add-edge <u> <v> <cost>   add an edge
  remove-edge <u> <v>       remove an edge
  set-cost <u> <v> <cost>   change the cost of an edge
  show                      print vertices and edges
  copy                      save a copy of the current graph
  show-copy                 print the saved copy
  walk <u> <v>              lowest cost walk (backward Dijkstra)
  dag [<u> <v>]             topological order, optionally the highest cost path u -> v
  min-walk <u> <v>          minimum cost walk, negative costs allowed
  generate <n> <m>          replace the graph with a random one (in memory, use 'save' to keep it)
  load [<file>]             load an edge list
  save [<file>]             save the graph as an edge list
  help                      this text
  quit                      leave the shell";

// =============================================================================
// Requests
// =============================================================================

/// One dispatcher command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Vertex and edge counts
    Count,
    /// All vertices
    Vertices,
    /// Vertices without edges
    Isolated,
    /// Edge existence test
    IsEdge {
        /// Source vertex
        from: Vertex,
        /// Target vertex
        to: Vertex,
    },
    /// In and out degree
    Degree {
        /// Vertex to inspect
        vertex: Vertex,
    },
    /// Outbound neighbours
    Outbound {
        /// Vertex to inspect
        vertex: Vertex,
    },
    /// Inbound neighbours
    Inbound {
        /// Vertex to inspect
        vertex: Vertex,
    },
    /// Both neighbour lists
    Neighbours {
        /// Vertex to inspect
        vertex: Vertex,
    },
    /// Add a vertex
    AddVertex {
        /// New vertex
        vertex: Vertex,
    },
    /// Remove a vertex and its edges
    RemoveVertex {
        /// Vertex to remove
        vertex: Vertex,
    },
    /// Add an edge
    AddEdge {
        /// Source vertex
        from: Vertex,
        /// Target vertex
        to: Vertex,
        /// Edge cost
        cost: Cost,
    },
    /// Remove an edge
    RemoveEdge {
        /// Source vertex
        from: Vertex,
        /// Target vertex
        to: Vertex,
    },
    /// Change the cost of an edge
    SetCost {
        /// Source vertex
        from: Vertex,
        /// Target vertex
        to: Vertex,
        /// New cost
        cost: Cost,
    },
    /// Whole graph
    Show,
    /// Save a copy of the current graph
    Copy,
    /// Whole saved copy
    ShowCopy,
    /// Lowest cost walk with backward Dijkstra
    Walk {
        /// Start vertex
        from: Vertex,
        /// End vertex
        to: Vertex,
    },
    /// DAG test, topological order and optional highest cost path
    Dag {
        /// Endpoints of the highest cost path to compute
        longest: Option<(Vertex, Vertex)>,
    },
    /// Minimum cost walk with bounded Bellman-Ford
    MinWalk {
        /// Start vertex
        from: Vertex,
        /// End vertex
        to: Vertex,
    },
    /// Replace the graph with a random one
    Generate {
        /// Vertex count
        vertices: usize,
        /// Edge count
        edges: usize,
    },
    /// Load an edge list (the session file when no path is given)
    Load {
        /// File to read
        path: Option<PathBuf>,
    },
    /// Save the graph (to the session file when no path is given)
    Save {
        /// File to write
        path: Option<PathBuf>,
    },
    /// Command overview
    Help,
    /// Leave the shell
    Quit,
}

fn vertex_arg(token: &str) -> Result<Vertex, GraphError> {
    token
        .parse()
        .map_err(|_| GraphError::invalid(format!("vertex must be a non-negative integer, got '{token}'")))
}

fn cost_arg(token: &str) -> Result<Cost, GraphError> {
    token
        .parse()
        .map_err(|_| GraphError::invalid(format!("cost must be an integer, got '{token}'")))
}

fn count_arg(token: &str, what: &str) -> Result<usize, GraphError> {
    token
        .parse()
        .map_err(|_| GraphError::invalid(format!("{what} must be a non-negative integer, got '{token}'")))
}

impl Request {
    /// Parse one shell line
    pub fn parse(line: &str) -> Result<Self, GraphError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Err(GraphError::invalid("empty command"));
        };

        let request = match (name, args) {
            ("count", []) => Self::Count,
            ("vertices", []) => Self::Vertices,
            ("isolated", []) => Self::Isolated,
            ("edge?", [u, v]) => Self::IsEdge {
                from: vertex_arg(u)?,
                to: vertex_arg(v)?,
            },
            ("degree", [v]) => Self::Degree { vertex: vertex_arg(v)? },
            ("out", [v]) => Self::Outbound { vertex: vertex_arg(v)? },
            ("in", [v]) => Self::Inbound { vertex: vertex_arg(v)? },
            ("neighbours" | "neighbors", [v]) => Self::Neighbours { vertex: vertex_arg(v)? },
            ("add-vertex", [v]) => Self::AddVertex { vertex: vertex_arg(v)? },
            ("remove-vertex", [v]) => Self::RemoveVertex { vertex: vertex_arg(v)? },
            ("add-edge", [u, v, c]) => Self::AddEdge {
                from: vertex_arg(u)?,
                to: vertex_arg(v)?,
                cost: cost_arg(c)?,
            },
            ("remove-edge", [u, v]) => Self::RemoveEdge {
                from: vertex_arg(u)?,
                to: vertex_arg(v)?,
            },
            ("set-cost", [u, v, c]) => Self::SetCost {
                from: vertex_arg(u)?,
                to: vertex_arg(v)?,
                cost: cost_arg(c)?,
            },
            ("show", []) => Self::Show,
            ("copy", []) => Self::Copy,
            ("show-copy", []) => Self::ShowCopy,
            ("walk", [u, v]) => Self::Walk {
                from: vertex_arg(u)?,
                to: vertex_arg(v)?,
            },
            ("dag", []) => Self::Dag { longest: None },
            ("dag", [u, v]) => Self::Dag {
                longest: Some((vertex_arg(u)?, vertex_arg(v)?)),
            },
            ("min-walk", [u, v]) => Self::MinWalk {
                from: vertex_arg(u)?,
                to: vertex_arg(v)?,
            },
            ("generate", [n, m]) => Self::Generate {
                vertices: count_arg(n, "number of vertices")?,
                edges: count_arg(m, "number of edges")?,
            },
            ("load", []) => Self::Load { path: None },
            ("load", [path]) => Self::Load {
                path: Some(PathBuf::from(path)),
            },
            ("save", []) => Self::Save { path: None },
            ("save", [path]) => Self::Save {
                path: Some(PathBuf::from(path)),
            },
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            _ => {
                return Err(GraphError::invalid(format!(
                    "unknown command or wrong arguments: '{}' (try 'help')",
                    line.trim()
                )))
            }
        };
        Ok(request)
    }

    /// Whether executing the request changes the active graph
    #[must_use]
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::AddVertex { .. }
                | Self::RemoveVertex { .. }
                | Self::AddEdge { .. }
                | Self::RemoveEdge { .. }
                | Self::SetCost { .. }
                | Self::Generate { .. }
                | Self::Load { .. }
        )
    }
}

// =============================================================================
// Replies
// =============================================================================

/// Result of executing a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    /// Acknowledgement of a mutation or file operation
    Done {
        /// What happened
        message: String,
    },
    /// Vertex and edge counts
    Count {
        /// Number of vertices
        vertices: usize,
        /// Number of edges
        edges: usize,
    },
    /// A list of vertices
    Vertices {
        /// What the list holds
        label: String,
        /// The vertices
        vertices: Vec<Vertex>,
    },
    /// Edge existence
    IsEdge {
        /// Source vertex
        from: Vertex,
        /// Target vertex
        to: Vertex,
        /// Whether the edge exists
        exists: bool,
    },
    /// Vertex degrees
    Degree {
        /// Inspected vertex
        vertex: Vertex,
        /// Number of inbound edges
        in_degree: usize,
        /// Number of outbound edges
        out_degree: usize,
    },
    /// Neighbour lists of a vertex
    Neighbours {
        /// Inspected vertex
        vertex: Vertex,
        /// Outbound neighbours, if requested
        #[serde(skip_serializing_if = "Option::is_none")]
        outbound: Option<Vec<Vertex>>,
        /// Inbound neighbours, if requested
        #[serde(skip_serializing_if = "Option::is_none")]
        inbound: Option<Vec<Vertex>>,
    },
    /// A whole graph
    Graph {
        /// What the graph is
        label: String,
        /// Vertices and edges
        graph: GraphDocument,
    },
    /// A lowest cost walk
    Walk {
        /// The walk
        walk: Walk,
    },
    /// DAG test outcome
    Dag {
        /// Topological order, `None` when the graph has a cycle
        order: Option<Vec<Vertex>>,
        /// Highest cost path, when requested on a DAG
        #[serde(skip_serializing_if = "Option::is_none")]
        longest: Option<Walk>,
    },
    /// Minimum cost walk search outcome
    MinWalk {
        /// Start vertex
        from: Vertex,
        /// End vertex
        to: Vertex,
        /// Search outcome
        search: WalkSearch,
    },
    /// Help text
    Help {
        /// The text
        text: String,
    },
    /// The shell should stop
    Quit,
}

fn write_list(f: &mut fmt::Formatter<'_>, empty: &str, heading: &str, items: &[Vertex]) -> fmt::Result {
    if items.is_empty() {
        return write!(f, "{empty}");
    }
    write!(f, "{heading}")?;
    for item in items {
        write!(f, "\n  {item}")?;
    }
    Ok(())
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done { message } => write!(f, "{message}"),
            Self::Count { vertices, edges } => {
                write!(f, "Number of vertices is {vertices}, number of edges is {edges}")
            }
            Self::Vertices { label, vertices } => write_list(
                f,
                &format!("There are no {label}"),
                &format!("{}:", capitalize(label)),
                vertices,
            ),
            Self::IsEdge { from, to, exists } => {
                if *exists {
                    write!(f, "There is an edge from {from} to {to}")
                } else {
                    write!(f, "There isn't an edge from {from} to {to}")
                }
            }
            Self::Degree {
                vertex,
                in_degree,
                out_degree,
            } => write!(
                f,
                "Vertex {vertex}: out degree {out_degree}, in degree {in_degree}"
            ),
            Self::Neighbours {
                vertex,
                outbound,
                inbound,
            } => {
                let mut first = true;
                if let Some(outbound) = outbound {
                    write_list(
                        f,
                        &format!("Vertex {vertex} has no outbound neighbours"),
                        &format!("Outbound neighbours of {vertex}:"),
                        outbound,
                    )?;
                    first = false;
                }
                if let Some(inbound) = inbound {
                    if !first {
                        writeln!(f)?;
                    }
                    write_list(
                        f,
                        &format!("Vertex {vertex} has no inbound neighbours"),
                        &format!("Inbound neighbours of {vertex}:"),
                        inbound,
                    )?;
                }
                Ok(())
            }
            Self::Graph { label, graph } => {
                if graph.vertices.is_empty() {
                    return write!(f, "There are no vertices in the {label}");
                }
                write_list(f, "", &format!("Vertices of the {label}:"), &graph.vertices)?;
                if graph.edges.is_empty() {
                    write!(f, "\nThere are no edges in the {label}")
                } else {
                    write!(f, "\nEdges and costs of the {label}:")?;
                    for edge in &graph.edges {
                        write!(f, "\n  {edge}")?;
                    }
                    Ok(())
                }
            }
            Self::Walk { walk } => write!(f, "Lowest cost walk: {walk}"),
            Self::Dag { order, longest } => match order {
                None => write!(f, "Graph is not a DAG"),
                Some(order) => {
                    let order: Vec<String> = order.iter().map(ToString::to_string).collect();
                    write!(f, "Graph is a DAG\nTopological order: {}", order.join(" "))?;
                    if let Some(walk) = longest {
                        write!(f, "\nHighest cost path: {walk}")?;
                    }
                    Ok(())
                }
            },
            Self::MinWalk { from, to, search } => match search {
                WalkSearch::Found { walk } => write!(f, "Minimum cost walk: {walk}"),
                WalkSearch::NotFound => write!(f, "No walk from {from} to {to}"),
                WalkSearch::NegativeCycle => write!(f, "Graph has negative cost cycles"),
            },
            Self::Help { text } => write!(f, "{text}"),
            Self::Quit => write!(f, "Bye!"),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Session
// =============================================================================

/// Explicit session context: the active graph plus its optional saved copy
pub struct Session {
    graph: DirectedGraph,
    copy: Option<DirectedGraph>,
    file: Option<PathBuf>,
    max_random_cost: Cost,
    rng: StdRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DirectedGraph::new())
    }
}

impl Session {
    /// Create a session around a graph
    #[must_use]
    pub fn new(graph: DirectedGraph) -> Self {
        Self {
            graph,
            copy: None,
            file: None,
            max_random_cost: DEFAULT_MAX_COST,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Open the edge-list file as the session file; a missing file starts empty
    pub fn open(path: &Path) -> Result<Self> {
        let graph = if path.exists() {
            format::load(path).with_context(|| format!("Failed to load {}", path.display()))?
        } else {
            info!("{} does not exist yet, starting with an empty graph", path.display());
            DirectedGraph::new()
        };
        let mut session = Self::new(graph);
        session.file = Some(path.to_path_buf());
        Ok(session)
    }

    /// Use `path` as the session file without reading it
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Set the upper bound for generated edge costs
    #[must_use]
    pub fn with_max_random_cost(mut self, max_cost: Cost) -> Self {
        self.max_random_cost = max_cost;
        self
    }

    /// Make random generation reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The active graph
    #[must_use]
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// The saved copy, if one was taken
    #[must_use]
    pub fn copy(&self) -> Option<&DirectedGraph> {
        self.copy.as_ref()
    }

    /// The file the session was opened from or last saved to
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Write the active graph back to the session file
    pub fn save(&self) -> Result<PathBuf> {
        let path = self
            .file
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No file to save to; use 'save <file>'"))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        format::save(&self.graph, &path).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Execute one request against the session
    pub fn execute(&mut self, request: Request) -> Result<Reply> {
        let graph = &self.graph;
        let reply = match request {
            Request::Count => Reply::Count {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
            },
            Request::Vertices => Reply::Vertices {
                label: "vertices in the graph".into(),
                vertices: graph.vertices().collect(),
            },
            Request::Isolated => Reply::Vertices {
                label: "isolated vertices".into(),
                vertices: graph.isolated_vertices(),
            },
            Request::IsEdge { from, to } => Reply::IsEdge {
                from,
                to,
                exists: graph.is_edge(from, to)?,
            },
            Request::Degree { vertex } => Reply::Degree {
                vertex,
                in_degree: graph.in_degree(vertex)?,
                out_degree: graph.out_degree(vertex)?,
            },
            Request::Outbound { vertex } => Reply::Neighbours {
                vertex,
                outbound: Some(graph.outbound(vertex)?.to_vec()),
                inbound: None,
            },
            Request::Inbound { vertex } => Reply::Neighbours {
                vertex,
                outbound: None,
                inbound: Some(graph.inbound(vertex)?.to_vec()),
            },
            Request::Neighbours { vertex } => Reply::Neighbours {
                vertex,
                outbound: Some(graph.outbound(vertex)?.to_vec()),
                inbound: Some(graph.inbound(vertex)?.to_vec()),
            },
            Request::AddVertex { vertex } => {
                self.graph.add_vertex(vertex)?;
                done(format!("Vertex {vertex} added"))
            }
            Request::RemoveVertex { vertex } => {
                self.graph.remove_vertex(vertex)?;
                done(format!("Vertex {vertex} removed"))
            }
            Request::AddEdge { from, to, cost } => {
                self.graph.add_edge(from, to, cost)?;
                done(format!("Edge ({from}, {to}) added with cost {cost}"))
            }
            Request::RemoveEdge { from, to } => {
                self.graph.remove_edge(from, to)?;
                done(format!("Edge ({from}, {to}) removed"))
            }
            Request::SetCost { from, to, cost } => {
                self.graph.update_cost(from, to, cost)?;
                done(format!("Cost of edge ({from}, {to}) set to {cost}"))
            }
            Request::Show => Reply::Graph {
                label: "graph".into(),
                graph: graph.to_document(),
            },
            Request::Copy => {
                self.copy = Some(self.graph.snapshot());
                done("Graph copied".into())
            }
            Request::ShowCopy => Reply::Graph {
                label: "copied graph".into(),
                graph: self.copy.as_ref().map(DirectedGraph::to_document).unwrap_or_default(),
            },
            Request::Walk { from, to } => {
                if graph.edges().any(|e| e.cost < 0) {
                    warn!("graph has negative costs, 'min-walk' gives exact results");
                }
                Reply::Walk {
                    walk: algo::lowest_cost_path(graph, from, to)?,
                }
            }
            Request::Dag { longest } => match algo::topological_order(graph) {
                None => Reply::Dag {
                    order: None,
                    longest: None,
                },
                Some(order) => {
                    let longest = match longest {
                        Some((start, end)) => Some(algo::highest_cost_path(graph, &order, start, end)?),
                        None => None,
                    };
                    Reply::Dag {
                        order: Some(order),
                        longest,
                    }
                }
            },
            Request::MinWalk { from, to } => Reply::MinWalk {
                from,
                to,
                search: algo::min_cost_walk(graph, from, to)?,
            },
            Request::Generate { vertices, edges } => {
                self.graph = generate_random_graph(vertices, edges, self.max_random_cost, &mut self.rng)?;
                done(format!("Random graph generated with {vertices} vertices and {edges} edges"))
            }
            Request::Load { path } => {
                let path = self.resolve(path)?;
                self.graph =
                    format::load(&path).with_context(|| format!("Failed to load {}", path.display()))?;
                self.file = Some(path.clone());
                done(format!("Graph loaded from {}", path.display()))
            }
            Request::Save { path } => {
                let path = self.resolve(path)?;
                self.file = Some(path);
                let path = self.save()?;
                done(format!("Graph written to {}", path.display()))
            }
            Request::Help => Reply::Help { text: HELP.into() },
            Request::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    fn resolve(&self, path: Option<PathBuf>) -> Result<PathBuf> {
        path.or_else(|| self.file.clone())
            .ok_or_else(|| anyhow::anyhow!("No file given and the session has no file"))
    }
}

fn done(message: String) -> Reply {
    Reply::Done { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> Result<Reply> {
        session.execute(Request::parse(line)?)
    }

    #[test]
    fn test_parse_requests() {
        assert_eq!(
            Request::parse("add-edge 0 1 -5").unwrap(),
            Request::AddEdge { from: 0, to: 1, cost: -5 }
        );
        assert_eq!(Request::parse("  dag  ").unwrap(), Request::Dag { longest: None });
        assert_eq!(
            Request::parse("dag 0 3").unwrap(),
            Request::Dag { longest: Some((0, 3)) }
        );
        assert_eq!(Request::parse("load").unwrap(), Request::Load { path: None });
        assert_eq!(Request::parse("exit").unwrap(), Request::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Request::parse("add-vertex -1"),
            Err(GraphError::InvalidInput(_))
        ));
        assert!(matches!(Request::parse("add-edge 0 1 x"), Err(GraphError::InvalidInput(_))));
        assert!(matches!(Request::parse("walk 0"), Err(GraphError::InvalidInput(_))));
        assert!(matches!(Request::parse("fly"), Err(GraphError::InvalidInput(_))));
        assert!(matches!(Request::parse(""), Err(GraphError::InvalidInput(_))));
    }

    #[test]
    fn test_mutating_requests() {
        assert!(Request::AddVertex { vertex: 1 }.mutates());
        assert!(Request::Generate { vertices: 1, edges: 0 }.mutates());
        assert!(!Request::Walk { from: 0, to: 1 }.mutates());
        assert!(!Request::Copy.mutates());
    }

    #[test]
    fn test_copy_is_a_snapshot() {
        let mut session = Session::new(DirectedGraph::with_vertices(2));
        run(&mut session, "add-edge 0 1 3").unwrap();
        run(&mut session, "copy").unwrap();
        run(&mut session, "remove-edge 0 1").unwrap();

        assert_eq!(session.graph().edge_count(), 0);
        assert_eq!(session.copy().unwrap().edge_count(), 1);
    }

    #[test]
    fn test_failures_leave_session_usable() {
        let mut session = Session::new(DirectedGraph::with_vertices(2));

        let err = run(&mut session, "add-edge 0 5 1").unwrap_err();
        assert_eq!(err.downcast_ref::<GraphError>(), Some(&GraphError::UnknownVertex(5)));

        let reply = run(&mut session, "count").unwrap();
        assert_eq!(reply, Reply::Count { vertices: 2, edges: 0 });
    }

    #[test]
    fn test_walk_and_dag_replies() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 4), (1, 2, 1), (0, 2, 10)]).unwrap();
        let mut session = Session::new(graph);

        let reply = run(&mut session, "walk 0 2").unwrap();
        assert_eq!(reply.to_string(), "Lowest cost walk: 0 -> 1 -> 2 (cost 5)");

        let reply = run(&mut session, "dag 0 2").unwrap();
        assert_eq!(
            reply.to_string(),
            "Graph is a DAG\nTopological order: 0 1 2\nHighest cost path: 0 -> 2 (cost 10)"
        );
    }

    #[test]
    fn test_min_walk_reports_negative_cycle() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1, 1), (1, 0, -3)]).unwrap();
        let mut session = Session::new(graph);

        let reply = run(&mut session, "min-walk 0 1").unwrap();
        assert_eq!(reply.to_string(), "Graph has negative cost cycles");
        assert!(run(&mut session, "dag").unwrap().to_string().contains("not a DAG"));
    }

    #[test]
    fn test_generate_is_seeded() {
        let mut first = Session::default().with_seed(9).with_max_random_cost(10);
        let mut second = Session::default().with_seed(9).with_max_random_cost(10);
        run(&mut first, "generate 5 7").unwrap();
        run(&mut second, "generate 5 7").unwrap();

        assert_eq!(first.graph(), second.graph());
        assert!(first.graph().edges().all(|e| e.cost <= 10));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.txt");
        let mut session = Session::new(DirectedGraph::from_edges(2, &[(0, 1, 4)]).unwrap());

        assert!(run(&mut session, "save").is_err());
        run(&mut session, &format!("save {}", path.display())).unwrap();
        assert_eq!(session.file(), Some(path.as_path()));

        let mut reopened = Session::open(&path).unwrap();
        assert_eq!(reopened.graph(), session.graph());
        run(&mut reopened, "add-vertex 7").unwrap();
        run(&mut reopened, "load").unwrap();
        assert!(!reopened.graph().contains_vertex(7));
    }

    #[test]
    fn test_generate_stays_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.txt");
        let mut session = Session::default().with_file(&path).with_seed(3);

        run(&mut session, "generate 4 3").unwrap();
        assert!(!path.exists());
        assert!(HELP.contains("use 'save' to keep it"));

        run(&mut session, "save").unwrap();
        assert_eq!(Session::open(&path).unwrap().graph(), session.graph());
    }

    #[test]
    fn test_reply_json() {
        let reply = Reply::Count { vertices: 2, edges: 1 };
        let json = serde_json::to_value(&reply).unwrap();

        assert_eq!(json["reply"], "count");
        assert_eq!(json["vertices"], 2);
    }

    #[test]
    fn test_empty_lists_render_messages() {
        let mut session = Session::default();

        assert_eq!(
            run(&mut session, "isolated").unwrap().to_string(),
            "There are no isolated vertices"
        );
        assert_eq!(
            run(&mut session, "show-copy").unwrap().to_string(),
            "There are no vertices in the copied graph"
        );
    }
}
