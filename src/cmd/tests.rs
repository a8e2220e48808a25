// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::readme::run_readme_command;
use super::tag::resolve_tag;
use crate::cli::readme::ReadmeArgs;
use crate::cli::tag::TagArgs;
use crate::config::Settings;
use crate::config::paths::PathsConfig;
use crate::readme::TargetOutcome;
use tempfile::TempDir;

const BADGE_LINE: &str = "![Kotlin](https://img.shields.io/badge/Kotlin-1.8.0-7F52FF?logo=kotlin)\n";

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn settings_for(root: &Path) -> Settings {
    Settings {
        paths: PathsConfig {
            root: root.to_path_buf(),
            ..PathsConfig::default()
        },
        ..Settings::default()
    }
}

fn write_catalog(root: &Path, content: &str) {
    let gradle = root.join("gradle");
    std::fs::create_dir_all(&gradle).unwrap();
    std::fs::write(gradle.join("libs.versions.toml"), content).unwrap();
}

#[tokio::test]
async fn test_tag_from_project_version() {
    let temp = temp_dir();
    write_catalog(temp.path(), "[versions]\nproject = \"2.3.1\"\n");

    let tag = resolve_tag(&TagArgs::default(), &settings_for(temp.path()))
        .await
        .unwrap();
    assert_eq!(tag, "v2.3.1");
}

#[tokio::test]
async fn test_tag_falls_back_without_project_key() {
    let temp = temp_dir();
    write_catalog(temp.path(), "[versions]\nkotlin = \"1.9.0\"\n");

    let tag = resolve_tag(&TagArgs::default(), &settings_for(temp.path()))
        .await
        .unwrap();
    assert_eq!(tag, "v1.0.0");
}

#[tokio::test]
async fn test_tag_overrides() {
    let temp = temp_dir();
    write_catalog(temp.path(), "");

    let args = TagArgs {
        prefix: Some("release-".to_string()),
        fallback: Some("0.1".to_string()),
    };
    let tag = resolve_tag(&args, &settings_for(temp.path())).await.unwrap();
    assert_eq!(tag, "release-0.1");
}

#[tokio::test]
async fn test_tag_rejects_bad_fallback() {
    let temp = temp_dir();
    write_catalog(temp.path(), "");

    let args = TagArgs {
        fallback: Some("next".to_string()),
        ..TagArgs::default()
    };
    assert!(resolve_tag(&args, &settings_for(temp.path())).await.is_err());
}

#[tokio::test]
async fn test_tag_missing_catalog_is_fatal() {
    let temp = temp_dir();
    let err = resolve_tag(&TagArgs::default(), &settings_for(temp.path()))
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("version file not found"));
}

#[tokio::test]
async fn test_readme_missing_kotlin_touches_nothing() {
    let temp = temp_dir();
    write_catalog(temp.path(), "[versions]\nproject = \"1.4.2\"\n");
    let readme = temp.path().join("README.md");
    std::fs::write(&readme, BADGE_LINE).unwrap();

    let err = run_readme_command(&ReadmeArgs::default(), &settings_for(temp.path()), false)
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("unable to extract 'kotlin' version"));
    assert_eq!(std::fs::read_to_string(&readme).unwrap(), BADGE_LINE);
}

#[tokio::test]
async fn test_readme_missing_english_file() {
    let temp = temp_dir();
    write_catalog(temp.path(), "kotlin = \"1.9.0\"\nproject = \"1.4.2\"\n");
    std::fs::write(temp.path().join("README.md"), BADGE_LINE).unwrap();

    let summary = run_readme_command(&ReadmeArgs::default(), &settings_for(temp.path()), false)
        .await
        .unwrap();

    let outcomes: Vec<_> = summary.reports.iter().map(|r| &r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![&TargetOutcome::Rewritten, &TargetOutcome::Missing]
    );
    assert_eq!(summary.changed_files(), vec!["README.md"]);
}

#[tokio::test]
async fn test_readme_target_flag_replaces_list() {
    let temp = temp_dir();
    write_catalog(temp.path(), "kotlin = \"1.9.0\"\nproject = \"1.4.2\"\n");
    std::fs::create_dir(temp.path().join("docs")).unwrap();
    std::fs::write(temp.path().join("docs/guide.md"), BADGE_LINE).unwrap();

    let args = ReadmeArgs {
        targets: vec!["docs/guide.md".to_string()],
    };
    let summary = run_readme_command(&args, &settings_for(temp.path()), false)
        .await
        .unwrap();

    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.reports[0].name, "docs/guide.md");
    assert_eq!(summary.reports[0].outcome, TargetOutcome::Rewritten);
}
