// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - shows the effective settings

use crate::config::Settings;
use anyhow::{Context, Result};

/// Print all settings as TOML, or the value of a single key
pub fn run(settings: &Settings, key: Option<&str>) -> Result<()> {
    let Some(key) = key else {
        print!("{}", settings.to_toml()?);
        return Ok(());
    };

    tracing::info!("Getting {}", key);
    let table = toml::Value::try_from(settings).context("Failed to serialize settings")?;
    match table.get(key) {
        Some(toml::Value::String(value)) => println!("{value}"),
        Some(value) => println!("{value}"),
        None if key == "graph_file" => println!("{}", settings.graph_file().display()),
        None => anyhow::bail!("Unknown configuration key: {}", key),
    }
    Ok(())
}
