// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Generate command - writes a random graph to the graph file

use super::{print_reply, CommandContext};
use crate::session::{Request, Session};
use crate::types::Cost;
use anyhow::Result;
use tracing::info;

/// Run the generate command
pub fn run(
    ctx: &CommandContext,
    vertices: usize,
    edges: usize,
    seed: Option<u64>,
    max_cost: Option<Cost>,
) -> Result<()> {
    let mut session = Session::default()
        .with_file(&ctx.file)
        .with_max_random_cost(max_cost.unwrap_or(ctx.max_random_cost));
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }

    let reply = session.execute(Request::Generate { vertices, edges })?;
    let path = session.save()?;
    info!("Wrote random graph to {}", path.display());

    print_reply(&reply, ctx.json)
}
