// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! dirgraph CLI - directed weighted graphs and walk searches

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use dirgraph::commands::{self, CommandContext};
use dirgraph::config;
use dirgraph::session::Request;
use dirgraph::types::{Cost, Vertex};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dirgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "DIRGRAPH_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Graph file (edge-list format) to operate on
    #[arg(short, long, env = "DIRGRAPH_FILE", global = true)]
    file: Option<PathBuf>,

    /// Disable colored output (any `NO_COLOR` value except a falsey one)
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the graph with a random one
    Generate {
        /// Number of vertices
        vertices: usize,

        /// Number of edges
        edges: usize,

        /// Seed for reproducible graphs
        #[arg(long)]
        seed: Option<u64>,

        /// Upper bound for edge costs
        #[arg(long)]
        max_cost: Option<Cost>,
    },

    /// Show vertex and edge counts
    Info,

    /// Print every vertex and edge
    Show,

    /// List all vertices
    Vertices,

    /// List vertices without edges
    Isolated,

    /// Manage vertices
    Vertex {
        /// Action: add, remove, degree, out, in, neighbours
        action: String,

        /// Vertex id
        vertex: Vertex,
    },

    /// Manage edges
    Edge {
        /// Action: add, remove, check, cost
        action: String,

        /// Source vertex
        from: Vertex,

        /// Target vertex
        to: Vertex,

        /// Edge cost (for add and cost)
        #[arg(allow_negative_numbers = true)]
        cost: Option<Cost>,
    },

    /// Lowest cost walk (backward Dijkstra)
    Walk {
        /// Start vertex
        from: Vertex,

        /// End vertex
        to: Vertex,
    },

    /// Test for a DAG, print a topological order and optionally the highest cost path
    Dag {
        /// Start vertex of the highest cost path
        #[arg(long, requires = "to")]
        from: Option<Vertex>,

        /// End vertex of the highest cost path
        #[arg(long, requires = "from")]
        to: Option<Vertex>,
    },

    /// Minimum cost walk with negative cycle detection (bounded Bellman-Ford)
    MinWalk {
        /// Start vertex
        from: Vertex,

        /// End vertex
        to: Vertex,
    },

    /// Export graph to various formats
    Export {
        /// Output format (dot, json, edges)
        #[arg(short = 'F', long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive shell
    Shell,

    /// Show configuration
    Config {
        /// Single key to print
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn init_logging(cli: &Cli, default_level: &str) {
    let level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => default_level,
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = config::load(cli.config.as_deref())?;

    init_logging(&cli, &settings.log_level);

    let ctx = CommandContext {
        file: cli.file.clone().unwrap_or_else(|| settings.graph_file()),
        json: cli.json,
        color: settings.color && !cli.no_color,
        max_random_cost: settings.max_random_cost,
    };
    tracing::debug!("graph file: {}", ctx.file.display());

    // Execute command
    match cli.command {
        Commands::Generate {
            vertices,
            edges,
            seed,
            max_cost,
        } => commands::generate::run(&ctx, vertices, edges, seed, max_cost),
        Commands::Info => commands::run_request(&ctx, Request::Count),
        Commands::Show => commands::run_request(&ctx, Request::Show),
        Commands::Vertices => commands::run_request(&ctx, Request::Vertices),
        Commands::Isolated => commands::run_request(&ctx, Request::Isolated),
        Commands::Vertex { action, vertex } => commands::vertex::run(&ctx, &action, vertex),
        Commands::Edge {
            action,
            from,
            to,
            cost,
        } => commands::edge::run(&ctx, &action, from, to, cost),
        Commands::Walk { from, to } => commands::run_request(&ctx, Request::Walk { from, to }),
        Commands::Dag { from, to } => {
            let longest = from.zip(to);
            commands::run_request(&ctx, Request::Dag { longest })
        }
        Commands::MinWalk { from, to } => {
            commands::run_request(&ctx, Request::MinWalk { from, to })
        }
        Commands::Export { format, output } => commands::export::run(&ctx, &format, output),
        Commands::Shell => commands::shell::run(&ctx),
        Commands::Config { key } => commands::config::run(&settings, key.as_deref()),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
