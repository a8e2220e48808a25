// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release tag for the current project version.
//!
//! Best effort: a catalog without a project version yields the fallback tag
//! (`v1.0.0`) so release automation always gets a value. Only an unreadable
//! catalog is fatal.

use anyhow::Context;
use tracing::debug;

use crate::catalog::VersionCatalog;
use crate::cli::tag::TagArgs;
use crate::config::Settings;
use crate::config::types::{TagConfig, is_dotted_version};
use crate::error::Result;

/// Prints the release tag on stdout.
///
/// # Errors
///
/// Returns an error if the version catalog cannot be read or the fallback
/// override is not a dotted number.
pub async fn run_tag_command(args: &TagArgs, settings: &Settings) -> Result<()> {
    let tag = resolve_tag(args, settings).await?;
    println!("{tag}");
    Ok(())
}

/// Computes the release tag without printing it.
///
/// # Errors
///
/// Same as [`run_tag_command`].
pub async fn resolve_tag(args: &TagArgs, settings: &Settings) -> Result<String> {
    let tag_config = effective_tag_config(args, &settings.tag)?;
    let catalog = VersionCatalog::load(&settings.versions_path())
        .await
        .context("failed to determine release tag")?;

    let version = match catalog.find(&settings.keys.project)? {
        Some(version) => version,
        None => {
            debug!(
                path = %catalog.path().display(),
                key = %settings.keys.project,
                fallback = %tag_config.fallback_version,
                "Project version not found, using fallback"
            );
            tag_config.fallback_version.clone()
        }
    };

    Ok(tag_config.format(&version))
}

fn effective_tag_config(args: &TagArgs, base: &TagConfig) -> Result<TagConfig> {
    let mut config = base.clone();
    if let Some(prefix) = &args.prefix {
        config.prefix.clone_from(prefix);
    }
    if let Some(fallback) = &args.fallback {
        anyhow::ensure!(
            is_dotted_version(fallback),
            "--fallback expects digits separated by '.', got '{fallback}'"
        );
        config.fallback_version.clone_from(fallback);
    }
    Ok(config)
}
