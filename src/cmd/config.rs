// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings-related commands for ds-release.

use anyhow::Context;

use crate::cli::settings::SettingsArgs;
use crate::config::Settings;
use crate::error::Result;

/// Display the loaded settings files and the effective settings.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_settings_command(
    args: &SettingsArgs,
    settings: &Settings,
    config_files: &[String],
) -> Result<()> {
    if args.json {
        let json =
            serde_json::to_string_pretty(settings).context("failed to serialize settings")?;
        println!("{json}");
        return Ok(());
    }

    if config_files.is_empty() {
        println!("No settings files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
    println!();
    for line in settings.format_options() {
        println!("{line}");
    }
    Ok(())
}
