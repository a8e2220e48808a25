// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for settings layering.

use clap::Parser;
use ds_release::cli::Cli;
use ds_release::config::Settings;
use std::path::PathBuf;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("dsr").chain(args.iter().copied())).unwrap()
}

#[test]
fn settings_from_root_dsr_toml() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(
        temp.path().join("dsr.toml"),
        "[readme]\ntargets = [\"README.md\"]\n",
    )
    .unwrap();
    let root = temp.path().to_str().unwrap();

    let settings = cli(&["--root", root, "readme"])
        .global
        .config_loader()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.readme.targets, vec!["README.md".to_string()]);
    assert_eq!(settings.paths.root, PathBuf::from(root));
}

#[test]
fn settings_no_default_config_skips_dsr_toml() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("dsr.toml"), "[tag]\nprefix = \"x\"\n").unwrap();
    let root = temp.path().to_str().unwrap();

    let settings = cli(&["--root", root, "--no-default-config", "tag"])
        .global
        .config_loader()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.tag.prefix, "v");
}

#[test]
fn settings_explicit_config_overrides_dsr_toml() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("dsr.toml"), "[tag]\nprefix = \"a-\"\n").unwrap();
    let extra = temp.path().join("ci.toml");
    std::fs::write(&extra, "[tag]\nprefix = \"b-\"\n").unwrap();
    let root = temp.path().to_str().unwrap();

    let loader = cli(&["--root", root, "--config", extra.to_str().unwrap(), "tag"])
        .global
        .config_loader()
        .unwrap();
    assert_eq!(loader.loaded_files().len(), 2);

    let settings = loader.build().unwrap();
    assert_eq!(settings.tag.prefix, "b-");
}

#[test]
fn settings_missing_explicit_config_fails() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("missing.toml");

    let result = cli(&["--no-default-config", "--config", missing.to_str().unwrap(), "tag"])
        .global
        .config_loader()
        .unwrap()
        .build();

    assert!(result.is_err());
}

#[test]
fn settings_serialize_as_json() {
    let settings = Settings::default();
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["readme"]["core_artifact"], "data-saver-core");
    assert_eq!(json["paths"]["versions_file"], "gradle/libs.versions.toml");
}
