// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/
//!   dsr.toml                     (optional settings)
//!   gradle/libs.versions.toml    (version catalog)
//!   README.md, README_en.md      (documentation targets)
//! ```
//!
//! Relative paths resolve against `root`; absolute paths are kept as-is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the Gradle version catalog, relative to the root.
pub const DEFAULT_VERSIONS_FILE: &str = "gradle/libs.versions.toml";

/// Project layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root (default: current directory).
    pub root: PathBuf,
    /// Version catalog path (default: `gradle/libs.versions.toml`).
    pub versions_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            versions_file: PathBuf::from(DEFAULT_VERSIONS_FILE),
        }
    }
}

impl PathsConfig {
    /// Resolves `path` against the root.
    #[must_use]
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Full path to the version catalog.
    #[must_use]
    pub fn versions_path(&self) -> PathBuf {
        self.resolve(&self.versions_file)
    }
}
