// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered regex rules that move documentation to the current versions.
//!
//! | Rule      | Pattern (defaults)                                                  | Version   |
//! |-----------|---------------------------------------------------------------------|-----------|
//! | badge     | `(Kotlin-)[\d.]+(-[A-F0-9]+?\?logo=kotlin)`                          | toolchain |
//! | core      | `(implementation\s+"io\.github\.FunnySaltyFish:data-saver-core:).+?(")` | project   |
//! | siblings  | `(implementation\s+"io\.github\.FunnySaltyFish:data-saver-[^:]+:).+?(")` | project   |
//!
//! Group 1 and group 2 are kept verbatim; only the text between them changes.

use std::borrow::Cow;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::catalog::Versions;
use crate::config::types::ReadmeConfig;
use crate::error::{ConfigError, DsrResult};

/// Which extracted version a rule writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Toolchain,
    Project,
}

impl VersionSource {
    fn pick(self, versions: &Versions) -> &str {
        match self {
            Self::Toolchain => versions.toolchain.as_str(),
            Self::Project => versions.project.as_str(),
        }
    }
}

/// A single substitution: `<prefix>version<suffix>`.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    source: VersionSource,
}

impl RewriteRule {
    fn new(name: &'static str, pattern: &str, source: VersionSource) -> DsrResult<Self> {
        let pattern = Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
            section: "readme".to_string(),
            key: name.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            name,
            pattern,
            source,
        })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn source(&self) -> VersionSource {
        self.source
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Applies the rule, returning `None` when nothing matched.
    fn apply(&self, text: &str, version: &str) -> Option<String> {
        match self
            .pattern
            .replace_all(text, |caps: &Captures<'_>| format!("{}{version}{}", &caps[1], &caps[2]))
        {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        }
    }
}

/// The badge, core, and sibling rules in application order.
#[derive(Debug, Clone)]
pub struct ReadmeRewriter {
    rules: Vec<RewriteRule>,
}

impl ReadmeRewriter {
    /// Builds the rules from the `[readme]` settings.
    ///
    /// All settings values are regex-escaped.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a rule fails to compile.
    pub fn from_config(config: &ReadmeConfig) -> DsrResult<Self> {
        let badge = format!(
            r"({})[\d.]+(-[A-F0-9]+?\?logo={})",
            regex::escape(&config.badge_prefix),
            regex::escape(&config.badge_logo),
        );
        let group = regex::escape(&config.group_id);
        let core = format!(
            r#"(implementation\s+"{group}:{}:).+?(")"#,
            regex::escape(&config.core_artifact),
        );
        let siblings = format!(
            r#"(implementation\s+"{group}:{}[^:]+:).+?(")"#,
            regex::escape(&config.artifact_prefix),
        );

        let rules = vec![
            RewriteRule::new("badge", &badge, VersionSource::Toolchain)?,
            RewriteRule::new("core", &core, VersionSource::Project)?,
            RewriteRule::new("siblings", &siblings, VersionSource::Project)?,
        ];
        for rule in &rules {
            debug!(rule = rule.name(), pattern = rule.pattern(), "Compiled rewrite rule");
        }

        Ok(Self { rules })
    }

    #[must_use]
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Runs every rule in order over `text`.
    ///
    /// Borrowed when no rule matched. An owned result can still equal the
    /// input if every match already carried the current version.
    #[must_use]
    pub fn rewrite<'a>(&self, text: &'a str, versions: &Versions) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for rule in &self.rules {
            let replaced = rule.apply(&current, rule.source().pick(versions));
            if let Some(rewritten) = replaced {
                trace!(rule = rule.name(), source = ?rule.source(), "Rewrite rule matched");
                current = Cow::Owned(rewritten);
            }
        }
        current
    }
}
