// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Edge management commands - create, remove, inspect and re-cost edges

use super::{run_request, CommandContext};
use crate::session::Request;
use crate::types::{Cost, Vertex};
use anyhow::Result;

/// Run edge command
pub fn run(ctx: &CommandContext, action: &str, from: Vertex, to: Vertex, cost: Option<Cost>) -> Result<()> {
    let request = match action {
        "add" | "create" => Request::AddEdge {
            from,
            to,
            cost: cost.ok_or_else(|| anyhow::anyhow!("a cost is required to add an edge"))?,
        },
        "remove" | "delete" | "rm" => Request::RemoveEdge { from, to },
        "check" | "exists" => Request::IsEdge { from, to },
        "cost" | "set-cost" => Request::SetCost {
            from,
            to,
            cost: cost.ok_or_else(|| anyhow::anyhow!("the new cost is required"))?,
        },
        other => {
            anyhow::bail!("Unknown action: {}. Valid: add, remove, check, cost", other);
        }
    };

    run_request(ctx, request)
}
