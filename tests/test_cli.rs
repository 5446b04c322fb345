//! Tests for CLI argument parsing and the binary entry points

mod common;

use assert_cmd::Command;
use clap::Parser;
use common::{legacy_config, schema_complete_config, write_temp_config};
use linkmig::cli::{Cli, Commands};
use predicates::prelude::*;
use std::path::PathBuf;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["linkmig"]);

    assert!(cli.path.is_none());
    assert!(!cli.yes, "confirmation should be on by default");
    assert_eq!(cli.schema_version, 3, "default schema version should be 3");
    assert!(cli.command.is_none());
}

#[test]
fn test_cli_positional_path() {
    let cli = Cli::parse_from(["linkmig", "apps.links.json"]);

    assert_eq!(cli.path, Some(PathBuf::from("apps.links.json")));
}

#[test]
fn test_cli_yes_flags() {
    let short = Cli::parse_from(["linkmig", "apps.links.json", "-y"]);
    let long = Cli::parse_from(["linkmig", "apps.links.json", "--yes"]);

    assert!(short.yes);
    assert!(long.yes);
}

#[test]
fn test_cli_custom_schema_version() {
    let cli = Cli::parse_from(["linkmig", "--schema-version", "5"]);

    assert_eq!(cli.schema_version, 5);
}

#[test]
fn test_cli_check_subcommand() {
    let cli = Cli::parse_from(["linkmig", "check", "apps.links.json"]);

    match cli.command {
        Some(Commands::Check {
            path,
            schema_version,
        }) => {
            assert_eq!(path, PathBuf::from("apps.links.json"));
            assert_eq!(schema_version, 3);
        }
        other => panic!("expected check subcommand, got {other:?}"),
    }
}

#[test]
fn test_check_missing_file_fails() {
    Command::cargo_bin("linkmig")
        .unwrap()
        .args(["check", "/no/such/dir/absent.links.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_check_rejects_wrong_suffix() {
    Command::cargo_bin("linkmig")
        .unwrap()
        .args(["check", "config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a shortcut link config file"));
}

#[test]
fn test_check_reports_without_writing() {
    let original = legacy_config().to_string();
    let (_dir, path) = write_temp_config(&original);

    Command::cargo_bin("linkmig")
        .unwrap()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("would update"));

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(after, original, "check must never write");
}

#[test]
fn test_check_up_to_date_config() {
    let (_dir, path) = write_temp_config(&schema_complete_config().to_string());

    Command::cargo_bin("linkmig")
        .unwrap()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn test_migrate_with_yes_writes_normalized_config() {
    let (_dir, path) = write_temp_config(&legacy_config().to_string());

    Command::cargo_bin("linkmig")
        .unwrap()
        .arg(&path)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    let migrated: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(migrated["version"], 3);
    for link in migrated["program_links"].as_array().unwrap() {
        assert!(!link["uuid"].as_str().unwrap().is_empty());
    }
}

#[test]
fn test_migrate_up_to_date_file_writes_nothing() {
    let original = schema_complete_config().to_string();
    let (_dir, path) = write_temp_config(&original);

    Command::cargo_bin("linkmig")
        .unwrap()
        .arg(&path)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("no update needed"));

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(after, original);
}
