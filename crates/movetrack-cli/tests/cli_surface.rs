//! Argument parsing and error reporting of the binary itself.

use assert_cmd::cargo::cargo_bin_cmd;
use movetrack_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("movetrack");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("suppliers"))
        .stdout(predicate::str::contains("--snapshot"));
}

#[test]
fn test_import_requires_a_file() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("movetrack");
    world
        .configure_command(&mut cmd)
        .arg("import")
        .assert()
        .failure();
}

#[test]
fn test_missing_csv_reports_path() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("movetrack");
    world
        .configure_command(&mut cmd)
        .args(["import", "does-not-exist.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to open CSV"))
        .stderr(predicate::str::contains("does-not-exist.csv"));
}

#[test]
fn test_unknown_tab_is_rejected_by_parser() {
    let world = TestWorld::new();
    let file = world.write_file("supplier.json", "{}").unwrap();

    let mut cmd = cargo_bin_cmd!("movetrack");
    world
        .configure_command(&mut cmd)
        .arg("suppliers")
        .arg(&file)
        .args(["--tab", "supplier9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown supplier 'supplier9'"));
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new().with_config("validation = \"strict\"\n");
    let mut cmd = cargo_bin_cmd!("movetrack");
    world
        .configure_command(&mut cmd)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("movetrack");
    let output = world
        .configure_command(&mut cmd)
        .args(["--log-level", "debug", "--format", "json", "list"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["content"]["total"], 0);
    assert!(String::from_utf8_lossy(&output.stderr).contains("store opened"));
}
