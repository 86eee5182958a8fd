// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - exports the graph to various formats

use super::CommandContext;
use crate::format;
use crate::graph::DirectedGraph;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// JSON format
    Json,
    /// Edge-list text format
    Edges,
}

impl ExportFormat {
    /// Parse format from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Some(Self::Dot),
            "json" => Some(Self::Json),
            "edges" | "txt" | "edge-list" => Some(Self::Edges),
            _ => None,
        }
    }

    /// Render a graph in this format
    pub fn render(&self, graph: &DirectedGraph) -> Result<String> {
        Ok(match self {
            Self::Dot => graph.to_dot(),
            Self::Json => serde_json::to_string_pretty(&graph.to_document())
                .context("Failed to serialize graph to JSON")?,
            Self::Edges => format::to_edge_list(graph),
        })
    }
}

/// Run the export command
pub fn run(ctx: &CommandContext, format: &str, output: Option<PathBuf>) -> Result<()> {
    info!("Exporting to {}", format);

    let export_format = ExportFormat::parse(format)
        .ok_or_else(|| anyhow::anyhow!("Unknown export format: {}. Supported: dot, json, edges", format))?;

    let session = ctx.open_session()?;
    let graph = session.graph();
    if graph.is_empty() {
        eprintln!("Warning: Graph is empty. Run 'dirgraph generate' first.");
    }

    let content = export_format.render(graph)?;

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
