//! End-to-end tests for the stubgen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn stubgen_cmd() -> Command {
    Command::cargo_bin("stubgen").unwrap()
}

/// Copy a fixture into a fresh temp dir so generated files never land in the repo.
fn stage_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let source = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let target = dir.path().join(name);
    fs::copy(&source, &target).unwrap();
    (dir, target)
}

#[test]
fn test_missing_input_prints_usage() {
    stubgen_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: stubgen myfile.js"));
}

#[test]
fn test_help_mentions_dry_run() {
    stubgen_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_generates_sibling_test_file() {
    let (dir, input) = stage_fixture("math.js");

    stubgen_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Test file generated at"))
        .stdout(predicate::str::contains("math.test.js"));

    let generated = fs::read_to_string(dir.path().join("math.test.js")).unwrap();
    let describes: Vec<_> = generated
        .lines()
        .filter(|line| line.starts_with("describe("))
        .collect();
    assert_eq!(
        describes,
        vec![
            "describe('add', () => {",
            "describe('mul', () => {",
            "describe('div', () => {",
            "describe('sub', () => {",
        ]
    );
    assert!(generated.starts_with("const { add } = require('./math');"));
    assert!(generated.contains("const { sub } = require('./math');"));
    assert!(!generated.ends_with('\n'));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let (dir, input) = stage_fixture("math.js");
    let output = dir.path().join("math.test.js");

    stubgen_cmd().arg(&input).assert().success();
    let first = fs::read(&output).unwrap();

    stubgen_cmd().arg(&input).assert().success();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_no_functions_writes_nothing() {
    let (dir, input) = stage_fixture("constants.js");

    stubgen_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No supported function definitions found to generate tests.",
        ));

    assert!(!dir.path().join("constants.test.js").exists());
}

#[test]
fn test_parse_error_fails_without_writing() {
    let (dir, input) = stage_fixture("broken.js");

    stubgen_cmd()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error generating tests"))
        .stderr(predicate::str::contains("Parse error in javascript"))
        .stderr(predicate::str::contains("broken.js"));

    assert!(!dir.path().join("broken.test.js").exists());
}

#[test]
fn test_missing_file_fails() {
    let dir = tempdir().unwrap();

    stubgen_cmd()
        .arg(dir.path().join("absent.js"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error generating tests"));
}

#[test]
fn test_dry_run_prints_without_writing() {
    let (dir, input) = stage_fixture("math.js");

    stubgen_cmd()
        .arg("--dry-run")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("describe('mul'"))
        .stderr(predicate::str::contains("Dry run"));

    assert!(!dir.path().join("math.test.js").exists());
}

#[test]
fn test_custom_suffix() {
    let (dir, input) = stage_fixture("math.js");

    stubgen_cmd()
        .args(["--suffix", "spec"])
        .arg(&input)
        .assert()
        .success();

    assert!(dir.path().join("math.spec.js").exists());
    assert!(!dir.path().join("math.test.js").exists());
}

#[test]
fn test_strict_exports_skips_non_function_values() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("version.js");
    fs::write(&input, "exports.VERSION = '1.0.0';\n").unwrap();

    stubgen_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Test file generated at"));
    fs::remove_file(dir.path().join("version.test.js")).unwrap();

    stubgen_cmd()
        .arg("--strict-exports")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No supported function definitions"));
    assert!(!dir.path().join("version.test.js").exists());
}

#[test]
fn test_config_file_sets_suffix() {
    let (dir, input) = stage_fixture("math.js");
    let config = dir.path().join("stubgen.yml");
    fs::write(&config, "output:\n  test_suffix: unit\n").unwrap();

    stubgen_cmd()
        .arg("--config")
        .arg(&config)
        .arg(&input)
        .assert()
        .success();

    assert!(dir.path().join("math.unit.js").exists());
}

#[test]
fn test_non_javascript_input_is_refused() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("README");
    fs::write(&input, "function add() {}").unwrap();

    stubgen_cmd()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error generating tests"));

    assert_eq!(fs::read_to_string(&input).unwrap(), "function add() {}");
}

#[test]
fn test_module_property_assignments_are_exports() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("legacy.js");
    fs::write(
        &input,
        "module.exports = function (a, b) { return a + b; };\nmodule.helper = (a, b) => a;\n",
    )
    .unwrap();

    stubgen_cmd().arg(&input).assert().success();

    let generated = fs::read_to_string(dir.path().join("legacy.test.js")).unwrap();
    assert!(generated.starts_with("const { exports } = require('./legacy');"));
    assert!(generated.contains("describe('helper', () => {"));
}
