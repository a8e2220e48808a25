// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! Settings: PathsConfig, KeysConfig, TagConfig, ReadmeConfig
//! ```
//!
//! Defaults reproduce the data-saver repository layout.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Catalog key names looked up as `<key> = "<digits-and-dots>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeysConfig {
    /// Library release version key.
    pub project: String,
    /// Kotlin toolchain version key.
    pub toolchain: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            project: "project".to_string(),
            toolchain: "kotlin".to_string(),
        }
    }
}

/// Version tag output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagConfig {
    /// Prepended to the version.
    pub prefix: String,
    /// Used when the catalog has no project version.
    pub fallback_version: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            prefix: "v".to_string(),
            fallback_version: "1.0.0".to_string(),
        }
    }
}

impl TagConfig {
    /// Formats a tag for `version`.
    #[must_use]
    pub fn format(&self, version: &str) -> String {
        format!("{}{version}", self.prefix)
    }
}

/// Documentation rewrite settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadmeConfig {
    /// Documentation files, visited in order.
    pub targets: Vec<String>,
    /// Literal text in front of the version in the Kotlin badge.
    pub badge_prefix: String,
    /// `logo=` query value that closes the badge.
    pub badge_logo: String,
    /// Maven group id of the published artifacts.
    pub group_id: String,
    /// Shared artifact name prefix of all sibling artifacts.
    pub artifact_prefix: String,
    /// Core artifact, rewritten before the siblings.
    pub core_artifact: String,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            targets: vec!["README.md".to_string(), "README_en.md".to_string()],
            badge_prefix: "Kotlin-".to_string(),
            badge_logo: "kotlin".to_string(),
            group_id: "io.github.FunnySaltyFish".to_string(),
            artifact_prefix: "data-saver-".to_string(),
            core_artifact: "data-saver-core".to_string(),
        }
    }
}

/// Returns true for non-empty strings made of digits and dots.
#[must_use]
pub fn is_dotted_version(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

pub(super) fn require_non_empty(
    section: &str,
    key: &str,
    value: &str,
) -> std::result::Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
