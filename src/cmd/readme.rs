// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Readme command: sync versions shown in the documentation.
//!
//! ```text
//! 1. extract   kotlin + project from the catalog   (fatal on failure)
//! 2. update    README.md, README_en.md             (per-file, non-fatal)
//! 3. summarize changed files | all up to date
//! ```
//!
//! Extraction finishes before any target is opened, so a broken catalog
//! never leaves the documentation half updated.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info};

use crate::catalog::VersionCatalog;
use crate::cli::readme::ReadmeArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::readme::{ReadmeRewriter, TargetOutcome, UpdateSummary, update_targets};

/// Main handler for the readme command.
///
/// # Errors
///
/// Returns an error if the version catalog is missing or unreadable, or if
/// either version key is absent. Per-file failures are reported and do not
/// produce an error.
pub async fn run_readme_command(
    args: &ReadmeArgs,
    settings: &Settings,
    dry_run: bool,
) -> Result<UpdateSummary> {
    println!("🚀 Updating README versions...");

    let path = settings.versions_path();
    let catalog = VersionCatalog::load(&path)
        .await
        .context("failed to extract versions")?;
    let versions = catalog
        .versions(&settings.keys)
        .context("failed to extract versions")?;
    info!(
        path = %catalog.path().display(),
        toolchain = %versions.toolchain,
        project = %versions.project,
        "Extracted versions"
    );

    println!("📝 {} version: {}", settings.keys.toolchain, versions.toolchain);
    println!("📝 {} version: {}", settings.keys.project, versions.project);

    let rewriter = ReadmeRewriter::from_config(&settings.readme)?;
    let targets = resolve_targets(args, settings);
    info!(count = targets.len(), dry_run, "Updating documentation targets");

    let summary = update_targets(&targets, &rewriter, &versions, dry_run).await;

    for report in &summary.reports {
        if let TargetOutcome::Failed { message } = &report.outcome {
            error!(file = %report.name, "{message}");
            eprintln!("{report}");
        } else {
            println!("{report}");
        }
    }
    println!("{}", summary.summary_line());

    Ok(summary)
}

/// `--target` flags replace the configured list.
fn resolve_targets(args: &ReadmeArgs, settings: &Settings) -> Vec<(String, PathBuf)> {
    if args.targets.is_empty() {
        settings.readme_targets()
    } else {
        args.targets
            .iter()
            .map(|name| (name.clone(), settings.paths.resolve(name)))
            .collect()
    }
}
