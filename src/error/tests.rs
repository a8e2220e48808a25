// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CatalogError, ConfigError, DsrError, DsrResult, TargetError};

#[test]
fn test_catalog_error_display() {
    let err = CatalogError::KeyNotFound {
        key: "kotlin".to_string(),
        path: "gradle/libs.versions.toml".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"unable to extract 'kotlin' version from gradle/libs.versions.toml"
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "tag".to_string(),
        key: "fallback_version".to_string(),
        message: "expected digits separated by '.', got 'abc'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'fallback_version' in section '[tag]': expected digits separated by '.', got 'abc'"
    );
}

#[test]
fn test_boxed_from_wraps_variant() {
    let err: DsrError = TargetError::WriteError {
        path: "README.md".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    }
    .into();
    assert!(matches!(err, DsrError::Target(_)));
    assert!(err.to_string().starts_with("target error: failed to write 'README.md'"));
}

#[test]
fn test_dsr_error_size() {
    // Every variant is a thin Box, so the enum stays at two words.
    let size = std::mem::size_of::<DsrError>();
    assert!(size <= 16, "DsrError is {size} bytes, expected <= 16");
}

#[test]
fn test_dsr_result_size() {
    let size = std::mem::size_of::<DsrResult<()>>();
    assert!(size <= 16, "DsrResult<()> is {size} bytes, expected <= 16");
}
