// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool settings for ds-release.
//!
//! These are the tool's own knobs, not the version catalog it reads.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/dsr.toml (optional)
//! 3. --config FILE (repeatable, required)
//! 4. CLI overrides (--root, --versions-file, --target)
//! ```
//!
//! # Example
//!
//! ```toml
//! [paths]
//! versions_file = "gradle/libs.versions.toml"
//!
//! [readme]
//! targets = ["README.md", "docs/README_zh.md"]
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{KeysConfig, ReadmeConfig, TagConfig, is_dotted_version, require_non_empty};

/// Name of the optional settings file looked up in the root.
pub const DEFAULT_SETTINGS_FILE: &str = "dsr.toml";

/// Complete tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// File locations.
    pub paths: PathsConfig,
    /// Catalog key names.
    pub keys: KeysConfig,
    /// Version tag output.
    pub tag: TagConfig,
    /// Documentation rewriting.
    pub readme: ReadmeConfig,
}

impl Settings {
    /// Create a new settings builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ds_release::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("dsr.toml")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Full path to the version catalog.
    #[must_use]
    pub fn versions_path(&self) -> PathBuf {
        self.paths.versions_path()
    }

    /// Documentation targets as `(display name, resolved path)` pairs.
    #[must_use]
    pub fn readme_targets(&self) -> Vec<(String, PathBuf)> {
        self.readme
            .targets
            .iter()
            .map(|name| (name.clone(), self.paths.resolve(name)))
            .collect()
    }

    /// Validate values that serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for empty key names, an empty
    /// target list, or a fallback version that is not a dotted number.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        require_non_empty("keys", "project", &self.keys.project)?;
        require_non_empty("keys", "toolchain", &self.keys.toolchain)?;
        require_non_empty("readme", "badge_prefix", &self.readme.badge_prefix)?;
        require_non_empty("readme", "group_id", &self.readme.group_id)?;
        require_non_empty("readme", "core_artifact", &self.readme.core_artifact)?;

        if self.readme.targets.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "readme".to_string(),
                key: "targets".to_string(),
                message: "at least one target is required".to_string(),
            });
        }

        if !is_dotted_version(&self.tag.fallback_version) {
            return Err(ConfigError::InvalidValue {
                section: "tag".to_string(),
                key: "fallback_version".to_string(),
                message: format!(
                    "expected digits separated by '.', got '{}'",
                    self.tag.fallback_version
                ),
            });
        }

        Ok(())
    }

    /// Format settings for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("paths.root", self.paths.root.display().to_string());
        options.insert(
            "paths.versions_file",
            self.paths.versions_file.display().to_string(),
        );
        options.insert("keys.project", self.keys.project.clone());
        options.insert("keys.toolchain", self.keys.toolchain.clone());
        options.insert("tag.prefix", self.tag.prefix.clone());
        options.insert("tag.fallback_version", self.tag.fallback_version.clone());
        options.insert("readme.targets", self.readme.targets.join(", "));
        options.insert("readme.badge_prefix", self.readme.badge_prefix.clone());
        options.insert("readme.badge_logo", self.readme.badge_logo.clone());
        options.insert("readme.group_id", self.readme.group_id.clone());
        options.insert("readme.artifact_prefix", self.readme.artifact_prefix.clone());
        options.insert("readme.core_artifact", self.readme.core_artifact.clone());

        let max_key_len = options.keys().map(|key| key.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
