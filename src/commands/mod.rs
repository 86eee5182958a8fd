// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod edge;
pub mod export;
pub mod generate;
pub mod shell;
pub mod vertex;

use crate::session::{Reply, Request, Session};
use crate::types::Cost;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Graph file the command works on
    pub file: PathBuf,
    /// Print replies as JSON
    pub json: bool,
    /// Colored output
    pub color: bool,
    /// Upper bound for random edge costs
    pub max_random_cost: Cost,
}

impl CommandContext {
    /// Open a session on the graph file
    pub fn open_session(&self) -> Result<Session> {
        Ok(Session::open(&self.file)?.with_max_random_cost(self.max_random_cost))
    }
}

/// Execute a single request against the graph file, writing the file back
/// when the request changed the graph
pub fn run_request(ctx: &CommandContext, request: Request) -> Result<()> {
    let mut session = ctx.open_session()?;
    let mutates = request.mutates();

    let reply = session.execute(request)?;
    if mutates {
        let path = session.save()?;
        info!("Saved graph to {}", path.display());
    }

    print_reply(&reply, ctx.json)
}

/// Print a reply as text or JSON
pub fn print_reply(reply: &Reply, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(reply).context("Failed to serialize reply")?;
        println!("{text}");
    } else {
        println!("{reply}");
    }
    Ok(())
}
