// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tag command arguments.

use clap::Args;

/// Arguments for the `tag` command.
#[derive(Debug, Clone, Default, Args)]
pub struct TagArgs {
    /// Overrides the tag prefix (default: "v").
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Overrides the version printed when the catalog has none (default: 1.0.0).
    #[arg(long = "fallback", value_name = "VERSION")]
    pub fallback: Option<String>,
}
