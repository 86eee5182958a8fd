// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use crate::random::DEFAULT_MAX_COST;
use crate::types::Cost;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for settings (`DIRGRAPH_LOG_LEVEL`, ...)
pub const ENV_PREFIX: &str = "DIRGRAPH";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "hyperpolymath", "dirgraph")
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory for persistent data
    pub data_dir: PathBuf,
    /// Graph file used when `--file` is not given (defaults to `<data_dir>/graph.txt`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_file: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Upper bound for randomly generated edge costs
    pub max_random_cost: Cost,
    /// Colored shell output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: project_dirs()
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".dirgraph")),
            graph_file: None,
            log_level: "info".to_string(),
            max_random_cost: DEFAULT_MAX_COST,
            color: true,
        }
    }
}

impl Settings {
    /// The graph file to operate on when none is given explicitly
    #[must_use]
    pub fn graph_file(&self) -> PathBuf {
        self.graph_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("graph.txt"))
    }

    /// Render the effective settings as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize settings")
    }
}

/// Default location of the configuration file
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.toml"))
}

/// Load settings: defaults, then the TOML file, then `DIRGRAPH_*` variables.
///
/// An explicitly given file must exist; the default one is optional.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let mut builder = ::config::Config::builder();

    match path {
        Some(path) => {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(true),
            );
        }
        None => {
            if let Some(default) = default_config_path() {
                builder = builder.add_source(
                    ::config::File::from(default)
                        .format(::config::FileFormat::Toml)
                        .required(false),
                );
            }
        }
    }

    builder = builder.add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let settings = builder
        .build()
        .context("Failed to read configuration")?
        .try_deserialize::<Settings>()
        .context("Invalid configuration")?;

    tracing::debug!(?settings, "loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.max_random_cost, 200);
        assert!(settings.color);
        assert_eq!(settings.graph_file(), settings.data_dir.join("graph.txt"));
    }

    #[test]
    fn test_load_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dirgraph.toml");
        fs::write(
            &path,
            "log_level = \"debug\"\nmax_random_cost = 50\ngraph_file = \"/tmp/g.txt\"\n",
        )
        .unwrap();

        let settings = load(Some(&path)).unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.max_random_cost, 50);
        assert_eq!(settings.graph_file(), PathBuf::from("/tmp/g.txt"));
        assert!(settings.color);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();

        assert!(load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_to_toml() {
        let text = Settings::default().to_toml().unwrap();

        assert!(text.contains("log_level = \"info\""));
        assert!(text.contains("max_random_cost = 200"));
        assert!(!text.contains("graph_file"));
    }
}
