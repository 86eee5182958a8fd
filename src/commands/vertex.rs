// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Vertex management commands

use super::{run_request, CommandContext};
use crate::session::Request;
use crate::types::Vertex;
use anyhow::Result;

/// Run vertex command
pub fn run(ctx: &CommandContext, action: &str, vertex: Vertex) -> Result<()> {
    let request = match action {
        "add" | "create" => Request::AddVertex { vertex },
        "remove" | "delete" | "rm" => Request::RemoveVertex { vertex },
        "degree" => Request::Degree { vertex },
        "out" => Request::Outbound { vertex },
        "in" => Request::Inbound { vertex },
        "neighbours" | "neighbors" => Request::Neighbours { vertex },
        other => {
            anyhow::bail!(
                "Unknown action: {}. Valid: add, remove, degree, out, in, neighbours",
                other
            );
        }
    };

    run_request(ctx, request)
}
