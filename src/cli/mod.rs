// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for ds-release using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! dsr [global options] <command>
//! version
//! tag [--prefix P] [--fallback X.Y.Z]
//! readme [--target FILE]...
//! settings [--json]
//! ```

pub mod global;
pub mod readme;
pub mod settings;
pub mod tag;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::readme::ReadmeArgs;
use crate::cli::settings::SettingsArgs;
use crate::cli::tag::TagArgs;
use clap::{Parser, Subcommand};

/// Release helpers for the data-saver Kotlin library.
#[derive(Debug, Parser)]
#[command(
    name = "dsr",
    author,
    version,
    about = "data-saver release helpers",
    long_about = "ds-release Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads versions from gradle/libs.versions.toml. `dsr tag` prints\n\
                  the release tag, `dsr readme` syncs the versions shown in the\n\
                  README files.",
    after_help = "SETTINGS:\n\n\
                  dsr looks for an optional `dsr.toml` in the project root\n\
                  (--root, default: current directory). Additional files can be\n\
                  given with --config; they are loaded after dsr.toml and override\n\
                  it. Use --no-default-config to skip dsr.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Prints the release tag for the project version.
    Tag(TagArgs),

    /// Updates version strings in the README files.
    Readme(ReadmeArgs),

    /// Lists the effective settings.
    Settings(SettingsArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
