// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use ds_release::cli::{Cli, Command};
use ds_release::logging::LogLevel;
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["dsr", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["dsr", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["dsr"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Tag Command
// =============================================================================

#[test]
fn cli_tag_no_args() {
    let cli = Cli::try_parse_from(["dsr", "tag"]).unwrap();
    let Some(Command::Tag(args)) = cli.command else {
        panic!("expected tag command");
    };
    assert!(args.prefix.is_none());
    assert!(args.fallback.is_none());
}

#[test]
fn cli_tag_overrides() {
    let cli =
        Cli::try_parse_from(["dsr", "tag", "--prefix", "release-", "--fallback", "0.9.0"]).unwrap();
    let Some(Command::Tag(args)) = cli.command else {
        panic!("expected tag command");
    };
    assert_eq!(args.prefix.as_deref(), Some("release-"));
    assert_eq!(args.fallback.as_deref(), Some("0.9.0"));
}

// =============================================================================
// Readme Command
// =============================================================================

#[test]
fn cli_readme_default_targets() {
    let cli = Cli::try_parse_from(["dsr", "readme"]).unwrap();
    let Some(Command::Readme(args)) = cli.command else {
        panic!("expected readme command");
    };
    assert!(args.targets.is_empty());
}

#[test]
fn cli_readme_repeated_targets() {
    let cli = Cli::try_parse_from([
        "dsr",
        "readme",
        "--target",
        "README.md",
        "-t",
        "docs/README_zh.md",
    ])
    .unwrap();
    let Some(Command::Readme(args)) = cli.command else {
        panic!("expected readme command");
    };
    assert_eq!(args.targets, vec!["README.md", "docs/README_zh.md"]);
}

#[test]
fn cli_readme_dry_run_global() {
    let cli = Cli::try_parse_from(["dsr", "--dry", "readme"]).unwrap();
    assert!(cli.global.dry);
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_repeated_config_files() {
    let cli = Cli::try_parse_from([
        "dsr",
        "-c",
        "base.toml",
        "--config",
        "local.toml",
        "--no-default-config",
        "settings",
        "--json",
    ])
    .unwrap();
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("base.toml"), PathBuf::from("local.toml")]
    );
    assert!(cli.global.no_default_config);
    let Some(Command::Settings(args)) = cli.command else {
        panic!("expected settings command");
    };
    assert!(args.json);
}

#[test]
fn cli_log_options() {
    let cli = Cli::try_parse_from([
        "dsr",
        "--log-level",
        "0",
        "--file-log-level",
        "5",
        "--log-file",
        "logs/dsr.log",
        "tag",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(LogLevel::SILENT));
    assert_eq!(cli.global.file_log_level, Some(LogLevel::TRACE));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("logs/dsr.log")));
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["dsr", "publish"]).is_err());
}
