// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE        ← Additional settings files (can repeat)
//! --root DIR           ← paths.root override
//! --versions-file FILE ← paths.versions_file override
//! --dry                ← Compute rewrites without writing
//! --log-level N        ← Console verbosity (0-6)
//! --file-log-level     ← File verbosity (overrides --log-level)
//!
//! Precedence: CLI flags > --config > dsr.toml > defaults
//! ```

use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_SETTINGS_FILE;
use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Project root; relative paths resolve against it.
    #[arg(short = 'C', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to the Gradle version catalog, relative to the root.
    #[arg(long = "versions-file", value_name = "FILE")]
    pub versions_file: Option<PathBuf>,

    /// Reports what would change without writing any file.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = parse_log_level)]
    pub file_log_level: Option<LogLevel>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disables auto loading of dsr.toml, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Directory searched for `dsr.toml`.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        self.root.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Builds the settings loader for these options.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be converted to a settings value.
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = ConfigLoader::new();
        if !self.no_default_config {
            loader = loader.add_toml_file_optional(self.root_dir().join(DEFAULT_SETTINGS_FILE));
        }
        for path in &self.configs {
            loader = loader.add_toml_file(path);
        }
        if let Some(root) = &self.root {
            loader = loader.set("paths.root", root.display().to_string())?;
        }
        if let Some(file) = &self.versions_file {
            loader = loader.set("paths.versions_file", file.display().to_string())?;
        }
        Ok(loader)
    }
}

fn parse_log_level(value: &str) -> std::result::Result<LogLevel, String> {
    let level: u8 = value
        .parse()
        .map_err(|e| format!("invalid log level '{value}': {e}"))?;
    LogLevel::try_from(level).map_err(|e| e.to_string())
}
