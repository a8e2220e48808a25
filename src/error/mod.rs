// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        DsrError (~16 bytes)
//!               |
//!   +-----------+-----------+
//!   |           |           |
//!   v           v           v
//! Catalog     Config      Target
//!   Box         Box         Box
//!
//! Sub-errors (unboxed internally):
//!   Catalog  NotFound, ReadError, KeyNotFound, InvalidPattern
//!   Config   ParseError, InvalidValue
//!   Target   ReadError, WriteError
//! ```
//!
//! Catalog and config errors are fatal. Target errors are caught per
//! documentation file and never abort the run.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DsrError`].
pub type DsrResult<T> = std::result::Result<T, DsrError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum DsrError {
    /// Version catalog could not be read or queried.
    #[error("catalog error: {0}")]
    Catalog(#[from] Box<CatalogError>),

    /// Tool settings are invalid.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// A documentation target could not be read or written.
    #[error("target error: {0}")]
    Target(#[from] Box<TargetError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DsrError {
                fn from(err: $error) -> Self {
                    DsrError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    CatalogError => Catalog,
    ConfigError => Config,
    TargetError => Target,
}

// --- Catalog Errors ---

/// Errors raised while reading versions from the Gradle version catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file does not exist.
    #[error("version file not found: {path}")]
    NotFound { path: String },

    /// Catalog file exists but could not be read.
    #[error("failed to read version file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A required version key is absent or not a dotted number.
    #[error("unable to extract '{key}' version from {path}")]
    KeyNotFound { key: String, path: String },

    /// The lookup pattern for a key could not be compiled.
    #[error("invalid lookup pattern for key '{key}': {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}

// --- Config Errors ---

/// Errors in the tool's own settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse or merge the settings sources.
    #[error("failed to load settings: {message}")]
    ParseError { message: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Target Errors ---

/// Per-file errors while updating documentation targets.
#[derive(Debug, Error)]
pub enum TargetError {
    /// Failed to read the target.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the rewritten target.
    #[error("failed to write '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
