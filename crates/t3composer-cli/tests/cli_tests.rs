//! CLI integration tests for t3composer.
//!
//! Every test runs against a temporary working directory holding a known
//! `t3composer.json`, so results do not depend on the user's configuration.

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::process::Command;
use t3composer_test_utils::fixtures::Fixtures;
use t3composer_test_utils::temp_project::TempProject;

/// Get the t3composer binary command.
fn t3composer() -> Command {
    Command::new(cargo_bin!("t3composer"))
}

/// Command running inside a project with the fixture configuration.
fn in_project(project: &TempProject) -> Command {
    let mut cmd = t3composer();
    cmd.arg("--working-dir").arg(project.path());
    cmd
}

fn fixture_project() -> TempProject {
    TempProject::new()
        .with_config(Fixtures::config_json())
        .build()
        .unwrap()
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.arg("--format").arg("json").output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

fn json_stderr(cmd: &mut Command) -> Value {
    let output = cmd
        .args(["--quiet", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success(), "command succeeded: {output:?}");
    serde_json::from_slice(&output.stderr).unwrap()
}

// ========== Help and Version Tests ==========

#[test]
fn test_help_output() {
    t3composer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compose TYPO3 Composer requirements"))
        .stdout(predicate::str::contains("form"))
        .stdout(predicate::str::contains("require"))
        .stdout(predicate::str::contains("purge"));
}

#[test]
fn test_version_output() {
    t3composer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("t3composer"));
}

#[test]
fn test_no_arguments_prints_help() {
    t3composer()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ========== Constraint Tests ==========

#[test]
fn test_constraint_for_release() {
    t3composer()
        .args(["constraint", "12.4.3"])
        .assert()
        .success()
        .stdout("^12.4\n");
}

#[test]
fn test_constraint_for_development() {
    t3composer()
        .args(["constraint", "12.4.3", "--dev"])
        .assert()
        .success()
        .stdout("^12.4.3@dev\n");
}

#[test]
fn test_constraint_json_includes_upcoming_versions() {
    let value = json_stdout(t3composer().args(["constraint", "11.5.33"]));
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["constraint"], "^11.5");
    assert_eq!(value["data"]["next_minor"], "11.6");
    assert_eq!(value["data"]["next_patch"], "11.5.34");
}

// ========== Catalog Tests ==========

#[test]
fn test_packages_for_major() {
    let project = fixture_project();
    in_project(&project)
        .args(["packages", "--major", "8", "--names-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typo3/cms-context-help"));

    in_project(&project)
        .args(["packages", "--major", "12", "--names-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typo3/cms-core"))
        .stdout(predicate::str::contains("typo3/cms-context-help").not());
}

#[test]
fn test_single_package_lookup() {
    let project = fixture_project();
    in_project(&project)
        .args(["packages", "typo3-cms-core", "--names-only"])
        .assert()
        .success()
        .stdout("typo3/cms-core\n");
}

#[test]
fn test_unknown_package_fails() {
    let project = fixture_project();
    let value = json_stderr(in_project(&project).args(["packages", "typo3/cms-nothing"]));
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "E0101");
}

#[test]
fn test_bundle_fields() {
    let project = fixture_project();
    let value = json_stdout(in_project(&project).args(["bundles", "typo3/minimal"]));
    let rendered = value["data"].to_string();
    assert!(rendered.contains("typo3-cms-core"), "{rendered}");
}

#[test]
fn test_unknown_bundle_fails() {
    let project = fixture_project();
    let value = json_stderr(in_project(&project).args(["bundles", "typo3/nothing"]));
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "E0102");
}

// ========== Form Tests ==========

#[test]
fn test_form_preselects_latest_lts() {
    let project = fixture_project();
    let value = json_stdout(in_project(&project).args(["form", "--versions-only"]));
    assert_eq!(value["data"]["name"], "typo3_version");
    assert_eq!(value["data"]["data"], Fixtures::DEFAULT_CONSTRAINT);
}

#[test]
fn test_form_text_output() {
    let project = fixture_project();
    in_project(&project)
        .arg("form")
        .assert()
        .success()
        .stdout(predicate::str::contains("TYPO3 Version"))
        .stdout(predicate::str::contains("typo3-cms-core"));
}

#[test]
fn test_form_without_lts_fails() {
    let project = TempProject::new()
        .with_config(Fixtures::config_without_lts_json())
        .build()
        .unwrap();
    let value = json_stderr(in_project(&project).arg("form"));
    assert_eq!(value["error"]["code"], "E0201");
}

// ========== Submission Tests ==========

#[test]
fn test_clean_removes_unavailable_packages() {
    let project = fixture_project();
    let value = json_stdout(in_project(&project).args([
        "clean",
        "typo3_version=^11",
        "typo3-cms-about=1",
        "typo3-cms-core=1",
    ]));
    assert_eq!(value["data"]["major"], 11);
    assert_eq!(value["data"]["removed"], serde_json::json!(["typo3-cms-about"]));
    assert_eq!(
        value["data"]["submission"],
        serde_json::json!({"typo3_version": "^11", "typo3-cms-core": "1"})
    );
}

#[test]
fn test_clean_reads_input_file() {
    let project = fixture_project();
    let input = project
        .write_json("submission.json", &Fixtures::legacy_submission_json())
        .unwrap();
    let value = json_stdout(
        in_project(&project)
            .arg("clean")
            .arg("--input")
            .arg(&input),
    );
    assert_eq!(value["data"]["removed"], serde_json::json!(["typo3-cms-about"]));
}

#[test]
fn test_clean_rejects_malformed_pair() {
    let project = fixture_project();
    let value = json_stderr(in_project(&project).args(["clean", "typo3-cms-core"]));
    assert_eq!(value["error"]["code"], "E0401");
}

#[test]
fn test_require_command_line() {
    let project = fixture_project();
    in_project(&project)
        .args([
            "require",
            "typo3_version=^12.4",
            "typo3-cms-core=1",
            "typo3/cms-backend=1",
            "typo3-cms-about=1",
        ])
        .assert()
        .success()
        .stdout(
            "composer require \"typo3/cms-backend:^12.4\" \"typo3/cms-core:^12.4\"\n",
        );
}

#[test]
fn test_require_composer_json() {
    let project = fixture_project();
    let output = in_project(&project)
        .args(["require", "--json", "typo3_version=^12.4", "typo3-cms-core=1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"require": {"typo3/cms-core": "^12.4"}}));
}

#[test]
fn test_require_without_packages_warns() {
    let project = fixture_project();
    in_project(&project)
        .args(["require", "typo3_version=^12.4"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no package selected"));
}

// ========== Cache Purge Tests ==========

#[test]
fn test_purge_major_version() {
    let project = fixture_project();
    in_project(&project)
        .args(["purge", "12"])
        .assert()
        .success()
        .stdout("major-version-12\nmajor-version\nrequirements-12\nreleases-12\nrelease\n");
}

#[test]
fn test_purge_releases_only() {
    let project = fixture_project();
    let value = json_stdout(in_project(&project).args(["purge", "6.2", "--releases-only"]));
    assert_eq!(value["data"]["major_version"], "6.2");
    assert_eq!(value["data"]["tags"], serde_json::json!(["releases-6.2", "release"]));
    assert_eq!(value["data"]["invalidated_entries"], 5);
    assert_eq!(value["data"]["remaining_entries"], 9);
}

#[test]
fn test_purge_drops_tagged_entries() {
    let project = fixture_project();
    let value = json_stdout(in_project(&project).args(["purge", "12"]));
    // version list, form, major/12, requirements/12 and the four release lists
    assert_eq!(value["data"]["invalidated_entries"], 8);
    assert_eq!(value["data"]["remaining_entries"], 6);
}

#[test]
fn test_purge_reports_dropped_entries() {
    let project = fixture_project();
    in_project(&project)
        .args(["purge", "11"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dropped 8 cached entries, 6 remain"));
}

#[test]
fn test_purge_unknown_major_warns() {
    let project = fixture_project();
    in_project(&project)
        .args(["purge", "99"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a configured major version"));
}

// ========== Configuration Tests ==========

#[test]
fn test_validate_fixture_config() {
    let project = fixture_project();
    in_project(&project)
        .arg("validate")
        .assert()
        .success()
        .stderr(predicate::str::contains("configuration is valid"));
}

#[test]
fn test_validate_reports_cache_settings() {
    let project = fixture_project();
    in_project(&project)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("cache: 100 entries, ttl 600s"));
}

#[test]
fn test_cache_capacity_from_environment() {
    let project = fixture_project();
    let value = json_stdout(
        in_project(&project)
            .env("T3COMPOSER_CACHE_CAPACITY", "25")
            .env("T3COMPOSER_CACHE_TTL", "5m")
            .arg("validate"),
    );
    assert_eq!(value["data"]["cache"], serde_json::json!({"ttl": 300, "capacity": 25}));
}

#[test]
fn test_validate_rejects_invalid_config() {
    let project = TempProject::new()
        .with_config(Fixtures::invalid_config_json())
        .build()
        .unwrap();
    let value = json_stderr(in_project(&project).arg("validate"));
    assert_eq!(value["error"]["code"], "E1101");
}

#[test]
fn test_explicit_config_file() {
    let project = TempProject::new().build().unwrap();
    let config = project
        .write_json("release-data.json", &Fixtures::config_without_lts_json())
        .unwrap();
    t3composer()
        .arg("--config")
        .arg(&config)
        .arg("form")
        .assert()
        .failure()
        .stderr(predicate::str::contains("E0201"));
}

#[test]
fn test_malformed_config_is_reported() {
    let project = TempProject::new()
        .with_raw_config("{ \"major-versions\": [")
        .build()
        .unwrap();
    let value = json_stderr(in_project(&project).arg("packages"));
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "E1101");
}

#[test]
fn test_missing_explicit_config_fails() {
    t3composer()
        .args(["--config", "/nonexistent/t3composer.json", "packages"])
        .assert()
        .failure();
}
