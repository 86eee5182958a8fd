// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Interactive shell over a graph session
//!
//! Reads one request per line, executes it against an in-memory session and
//! prints the reply. Errors are reported and the loop carries on; the graph
//! is only written back on an explicit `save`.

use super::CommandContext;
use crate::session::{Reply, Request, Session};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "dirgraph> ";

/// Run the shell on stdin/stdout
pub fn run(ctx: &CommandContext) -> Result<()> {
    let session = ctx.open_session()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(session, stdin.lock(), stdout.lock(), ctx.color)
}

/// Run the shell over arbitrary input and output streams
pub fn run_with<R: BufRead, W: Write>(
    mut session: Session,
    input: R,
    mut output: W,
    color: bool,
) -> Result<()> {
    if color {
        writeln!(output, "{}", "dirgraph shell - type 'help' for commands".bold())?;
    } else {
        writeln!(output, "dirgraph shell - type 'help' for commands")?;
    }

    let mut lines = input.lines();
    loop {
        if color {
            write!(output, "{}", PROMPT.cyan())?;
        } else {
            write!(output, "{PROMPT}")?;
        }
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = Request::parse(&line)
            .map_err(anyhow::Error::from)
            .and_then(|request| session.execute(request));

        match outcome {
            Ok(Reply::Quit) => {
                writeln!(output, "{}", Reply::Quit)?;
                break;
            }
            Ok(reply) => writeln!(output, "{reply}")?,
            Err(err) => {
                tracing::debug!("request failed: {err:#}");
                if color {
                    writeln!(output, "{} {err:#}", "error:".red().bold())?;
                } else {
                    writeln!(output, "error: {err:#}")?;
                }
            }
        }
    }

    Ok(())
}
