// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;

/// Arguments for the `settings` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SettingsArgs {
    /// Prints the settings as JSON instead of `key = value` lines.
    #[arg(long)]
    pub json: bool,
}
