// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["dsr", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "dsr",
        "-l",
        "4",
        "-C",
        "/tmp/data-saver",
        "--dry",
        "--versions-file",
        "libs.toml",
        "readme",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(LogLevel::DEBUG));
    assert_eq!(cli.global.root, Some(PathBuf::from("/tmp/data-saver")));
    assert_eq!(cli.global.versions_file, Some(PathBuf::from("libs.toml")));
    assert!(cli.global.dry);
    assert!(matches!(cli.command, Some(Command::Readme(_))));
}

#[test]
fn test_parse_log_level_out_of_range() {
    let err = Cli::try_parse_from(["dsr", "-l", "7", "tag"]).unwrap_err();
    assert!(err.to_string().contains("log level must be 0-6, got 7"));
    assert!(Cli::try_parse_from(["dsr", "-l", "loud", "tag"]).is_err());
}

#[test]
fn test_root_dir_defaults_to_cwd() {
    let cli = Cli::try_parse_from(["dsr", "tag"]).unwrap();
    assert_eq!(cli.global.root_dir(), std::path::Path::new("."));
}

#[test]
fn test_config_loader_applies_overrides() {
    let cli = Cli::try_parse_from([
        "dsr",
        "--no-default-config",
        "--root",
        "repo",
        "--versions-file",
        "catalog.toml",
        "tag",
    ])
    .unwrap();
    let loader = cli.global.config_loader().unwrap();
    assert!(loader.loaded_files().is_empty());

    let settings = loader.build().unwrap();
    assert_eq!(settings.paths.root, PathBuf::from("repo"));
    assert_eq!(
        settings.versions_path(),
        PathBuf::from("repo").join("catalog.toml")
    );
}
