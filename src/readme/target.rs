// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-file update of documentation targets.
//!
//! ```text
//! NotStarted --exists?--no--> Missing ------------------+
//!     |                                                 |
//!    yes                                                v
//!     v                                             Reported
//!   Loaded --rewrite--> same?  --yes--> Unchanged ----->^
//!     |                   |                             |
//!   read err              no --dry--> Outdated -------->^
//!     |                   |                             |
//!     v                   +--write--> Rewritten ------->^
//!   Failed <--write err---+                             |
//!     +------------------------------------------------>+
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use super::rewrite::ReadmeRewriter;
use crate::catalog::Versions;
use crate::error::{DsrResult, TargetError};
use crate::utility::fs::write::write_atomic_async;

/// Final state of one documentation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    /// File does not exist; skipped.
    Missing,
    /// Rewrite produced identical text; file untouched.
    Unchanged,
    /// New text written.
    Rewritten,
    /// Dry run: file differs but was not written.
    Outdated,
    /// Read or write failed; processing moved on.
    Failed { message: String },
}

impl TargetOutcome {
    /// True when the file's content differs from the current versions.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Rewritten | Self::Outdated)
    }
}

/// Outcome of one target together with its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    /// Name as configured, used in messages.
    pub name: String,
    /// Resolved path.
    pub path: PathBuf,
    pub outcome: TargetOutcome,
}

impl TargetReport {
    /// Human-readable status line for stdout.
    #[must_use]
    pub fn status_line(&self) -> String {
        let name = &self.name;
        match &self.outcome {
            TargetOutcome::Missing => format!("⚠️  Warning: README file not found: {name}"),
            TargetOutcome::Unchanged => format!("ℹ️  {name}: no update needed"),
            TargetOutcome::Rewritten => format!("✅ {name} updated"),
            TargetOutcome::Outdated => format!("📝 {name} would be updated (dry run)"),
            TargetOutcome::Failed { message } => format!("❌ {name}: update failed - {message}"),
        }
    }
}

impl fmt::Display for TargetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_line())
    }
}

/// Ordered reports for all targets of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub reports: Vec<TargetReport>,
    pub dry_run: bool,
}

impl UpdateSummary {
    /// Names of targets whose content changed (or would change).
    #[must_use]
    pub fn changed_files(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_changed())
            .map(|r| r.name.as_str())
            .collect()
    }

    /// True when no target changed.
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        self.changed_files().is_empty()
    }

    /// Closing summary line.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let changed = self.changed_files();
        if changed.is_empty() {
            "ℹ️  All files are up to date".to_string()
        } else if self.dry_run {
            format!(
                "✨ {} file(s) would be updated: {}",
                changed.len(),
                changed.join(", ")
            )
        } else {
            format!(
                "✨ Updated {} file(s): {}",
                changed.len(),
                changed.join(", ")
            )
        }
    }
}

/// Updates one target. Never fails; errors become [`TargetOutcome::Failed`].
pub async fn update_target(
    name: &str,
    path: &Path,
    rewriter: &ReadmeRewriter,
    versions: &Versions,
    dry_run: bool,
) -> TargetReport {
    let outcome = match fs::try_exists(path).await {
        Ok(false) => {
            warn!(path = %path.display(), "README file not found, skipping");
            TargetOutcome::Missing
        }
        Ok(true) => match rewrite_target(path, rewriter, versions, dry_run).await {
            Ok(outcome) => outcome,
            Err(e) => TargetOutcome::Failed {
                message: e.to_string(),
            },
        },
        Err(source) => TargetOutcome::Failed {
            message: TargetError::ReadError {
                path: path.display().to_string(),
                source,
            }
            .to_string(),
        },
    };

    debug!(target_file = name, outcome = ?outcome, "Processed documentation target");
    TargetReport {
        name: name.to_string(),
        path: path.to_path_buf(),
        outcome,
    }
}

async fn rewrite_target(
    path: &Path,
    rewriter: &ReadmeRewriter,
    versions: &Versions,
    dry_run: bool,
) -> DsrResult<TargetOutcome> {
    let original = fs::read_to_string(path)
        .await
        .map_err(|source| TargetError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

    let updated = rewriter.rewrite(&original, versions);
    if updated == original.as_str() {
        return Ok(TargetOutcome::Unchanged);
    }

    if dry_run {
        return Ok(TargetOutcome::Outdated);
    }

    write_atomic_async(path, updated.into_owned())
        .await
        .map_err(|source| TargetError::WriteError {
            path: path.display().to_string(),
            source,
        })?;
    Ok(TargetOutcome::Rewritten)
}

/// Visits every target in order, exactly once.
pub async fn update_targets(
    targets: &[(String, PathBuf)],
    rewriter: &ReadmeRewriter,
    versions: &Versions,
    dry_run: bool,
) -> UpdateSummary {
    let mut reports = Vec::with_capacity(targets.len());
    for (name, path) in targets {
        reports.push(update_target(name, path, rewriter, versions, dry_run).await);
    }
    UpdateSummary { reports, dry_run }
}
