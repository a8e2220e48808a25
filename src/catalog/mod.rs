// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version lookup in the Gradle version catalog.
//!
//! ```text
//! gradle/libs.versions.toml
//!   [versions]
//!   kotlin  = "1.9.0"   <- toolchain key
//!   project = "1.4.2"   <- project key
//! ```
//!
//! The catalog is matched as plain text with `<key>\s*=\s*"([\d.]+)"`, not
//! parsed as TOML. The first match wins. A value that is not a dotted number
//! counts as missing.

use std::path::{Path, PathBuf};

use regex::Regex;
use tokio::fs;
use tracing::debug;

use crate::config::types::KeysConfig;
use crate::error::{CatalogError, DsrResult};

/// In-memory copy of the version catalog.
#[derive(Debug, Clone)]
pub struct VersionCatalog {
    path: PathBuf,
    content: String,
}

/// Versions required by the README updater.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versions {
    /// Kotlin toolchain version.
    pub toolchain: String,
    /// Library release version.
    pub project: String,
}

impl VersionCatalog {
    /// Reads the catalog at `path`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the file is missing and
    /// `CatalogError::ReadError` for any other read failure.
    pub async fn load(path: &Path) -> DsrResult<Self> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::NotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            Err(source) => {
                return Err(CatalogError::ReadError {
                    path: path.display().to_string(),
                    source,
                }
                .into());
            }
        };

        debug!(path = %path.display(), bytes = content.len(), "Loaded version catalog");
        Ok(Self::from_content(path, content))
    }

    /// Wraps already-loaded catalog text.
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up the version assigned to `key`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPattern` if the key produces an invalid
    /// regex. Absence is `Ok(None)`.
    pub fn find(&self, key: &str) -> DsrResult<Option<String>> {
        let pattern = version_pattern(key)?;
        Ok(pattern
            .captures(&self.content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()))
    }

    /// Like [`find`](Self::find), but absence is an error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::KeyNotFound` if the key is absent.
    pub fn require(&self, key: &str) -> DsrResult<String> {
        self.find(key)?.ok_or_else(|| {
            CatalogError::KeyNotFound {
                key: key.to_string(),
                path: self.path.display().to_string(),
            }
            .into()
        })
    }

    /// Extracts both versions; either one missing fails the whole lookup.
    ///
    /// The toolchain key is checked first.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::KeyNotFound` naming the first missing key.
    pub fn versions(&self, keys: &KeysConfig) -> DsrResult<Versions> {
        let toolchain = self.require(&keys.toolchain)?;
        let project = self.require(&keys.project)?;
        Ok(Versions { toolchain, project })
    }
}

/// Builds the lookup regex for a catalog key.
///
/// # Errors
///
/// Returns `CatalogError::InvalidPattern` if compilation fails.
pub fn version_pattern(key: &str) -> std::result::Result<Regex, CatalogError> {
    Regex::new(&format!(r#"{}\s*=\s*"([\d.]+)""#, regex::escape(key))).map_err(|source| {
        CatalogError::InvalidPattern {
            key: key.to_string(),
            source,
        }
    })
}
