// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Readme command arguments.

use clap::Args;

/// Arguments for the `readme` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReadmeArgs {
    /// Documentation file to update, relative to the root.
    /// Can be specified multiple times; replaces `readme.targets`.
    #[arg(short = 't', long = "target", value_name = "FILE", action = clap::ArgAction::Append)]
    pub targets: Vec<String>,
}
