//! Integration tests for the liftrx binary.
//!
//! These tests verify end-to-end behavior including:
//! - Scaling subcommands and their text/JSON output
//! - Warm-up generation and CSV export
//! - Config defaults and catalog validation

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Helper to create a scratch directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with no user config in scope
fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("liftrx"));
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/liftrx-test-config")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run liftrx");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout prescription engine"));
}

#[test]
fn test_weighted_high_intensity() {
    cli()
        .args(["weighted", "--sets", "4", "--reps", "8", "--rest", "60"])
        .args(["--intensity", "high", "--one-rep-max", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sets: 5"))
        .stdout(predicate::str::contains("Reps: 7"))
        .stdout(predicate::str::contains("Rest: 45s"))
        .stdout(predicate::str::contains("%1RM: 88%"))
        .stdout(predicate::str::contains("Weight: 175"))
        .stdout(predicate::str::contains("RPE: 8-9"));
}

#[test]
fn test_weighted_json_omits_weight_without_max() {
    let value = stdout_json(
        cli()
            .args(["weighted", "--sets", "4", "--reps", "5", "--rest", "120"])
            .args(["--intensity", "low", "--json"]),
    );
    assert_eq!(value["sets"], 3);
    assert_eq!(value["rest_seconds"], 150);
    assert_eq!(value["percent_of_one_rep_max"], 65);
    assert!(value["weight"].is_null());
}

#[test]
fn test_bodyweight_substitution() {
    cli()
        .args(["bodyweight", "plank", "--reps", "30s", "--rest", "30", "--intensity", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise: knee_plank (substituted for plank)"))
        .stdout(predicate::str::contains("Reps: 20s"))
        .stdout(predicate::str::contains("Rest: 38s"));
}

#[test]
fn test_bodyweight_unknown_exercise_still_scales() {
    cli()
        .args(["bodyweight", "handstand", "--reps", "10", "--rest", "60", "--intensity", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise: handstand"))
        .stdout(predicate::str::contains("Reps: 13"));
}

#[test]
fn test_adjust_youth() {
    cli()
        .args(["adjust", "--sets", "5", "--reps", "10", "--intensity", "high"])
        .args(["--age-group", "10-13", "--phase", "SSP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sets: 3"))
        .stdout(predicate::str::contains("Reps: 12"))
        .stdout(predicate::str::contains("Intensity: moderate"))
        .stdout(predicate::str::contains("%1RM range: 65-65%"));
}

#[test]
fn test_one_rep_max() {
    cli()
        .args(["one-rep-max", "--weight", "100", "--reps", "10", "--percent", "75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated 1RM: 133.3"))
        .stdout(predicate::str::contains("Target @ 75%: 100"));
}

#[test]
fn test_warmup_recovery_json() {
    let value = stdout_json(cli().args(["warmup", "recovery", "--json"]));
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 5);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item["section"], "warmup");
        assert_eq!(item["order_index"], i as u64);
    }
    assert_eq!(items[0]["warmup_phase"], "foam_rolling");
}

#[test]
fn test_warmup_without_optional_phase() {
    cli()
        .args(["warmup", "lower_a", "--no-optional"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mobility"))
        .stdout(predicate::str::contains("Power Primer"))
        .stdout(predicate::str::contains("Foam Rolling").not());
}

#[test]
fn test_warmup_start_index() {
    let value = stdout_json(cli().args(["warmup", "upper_a", "--start", "10", "--json"]));
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 12);
    assert_eq!(items[0]["order_index"], 10);
    assert_eq!(items[11]["order_index"], 21);
}

#[test]
fn test_warmup_csv_export() {
    let temp_dir = setup_test_dir();
    let csv_path = temp_dir.path().join("warmup.csv");

    cli()
        .args(["warmup", "power", "--csv"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 12 warm-up exercises"));

    let content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines[0].starts_with("order_index,exercise_slug"));
}

#[test]
fn test_warmup_rejects_unknown_day_type() {
    cli()
        .args(["warmup", "leg_day"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_resolve_single_weighted() {
    cli()
        .args(["resolve", "back_squat", "--sets", "4", "--reps", "8", "--rest", "60"])
        .args(["--intensity", "high", "--phase", "SSP", "--one-rep-max", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("back_squat - 5 x 7, rest 45s @ 88% (175), RPE 8-9"));
}

#[test]
fn test_resolve_file_json() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("day.json");
    fs::write(
        &path,
        r#"[
            {"exercise_slug": "push_up", "sets": 3, "reps": "12", "rest_seconds": 60,
             "order_index": 1},
            {"exercise_slug": "goblet_squat", "sets": 4, "reps": "10", "rest_seconds": 90,
             "intensity_percent": 70, "order_index": 0}
        ]"#,
    )
    .unwrap();

    let value = stdout_json(
        cli()
            .args(["resolve", "--intensity", "high", "--one-rep-max", "40", "--json", "--file"])
            .arg(&path),
    );
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["exercise_slug"], "goblet_squat");
    assert_eq!(items[0]["percent_of_one_rep_max"], 70);
    assert_eq!(items[0]["weight"], 27.5);
    assert_eq!(items[1]["exercise_slug"], "decline_push_up");
    assert_eq!(items[1]["is_substituted"], true);
}

#[test]
fn test_resolve_unknown_exercise_fails() {
    cli()
        .args(["resolve", "nordic_curl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nordic_curl"));
}

#[test]
fn test_validate_default_catalog() {
    cli()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog OK"));
}

#[test]
fn test_validate_reports_bad_pools() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("pools.json");
    fs::write(
        &path,
        r#"{"pools": {"recovery": {
            "foam_rolling": ["foam_roll_quads"],
            "mobility": ["cat_cow", "childs_pose", "pigeon_pose"]
        }}}"#,
    )
    .unwrap();

    cli()
        .args(["validate", "--pools"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog validation errors"))
        .stderr(predicate::str::contains("pigeon_pose"))
        .stderr(predicate::str::contains("needs 2"));
}

#[test]
fn test_custom_catalog_validation() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[{"slug": "plank", "name": "Plank", "tags": ["core", "wobbly"],
             "difficulty": "beginner"}]"#,
    )
    .unwrap();

    cli()
        .args(["validate", "--catalog"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("wobbly"));
}

#[test]
fn test_config_supplies_defaults() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[athlete]\nintensity = \"high\"\nage_group = \"14-17\"\n\n\
         [scaling]\nweight_increment = 5.0\n",
    )
    .unwrap();

    cli()
        .args(["weighted", "--sets", "4", "--reps", "8", "--rest", "60", "--one-rep-max", "200"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sets: 5"))
        .stdout(predicate::str::contains("Weight: 175"));

    cli()
        .args(["adjust", "--sets", "6", "--reps", "8"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sets: 5"))
        .stdout(predicate::str::contains("Intensity: high"));
}

#[test]
fn test_warmup_include_optional_overrides_config() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[warmup]\ninclude_optional = false\n").unwrap();

    cli()
        .args(["warmup", "lower_a", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Foam Rolling").not());

    cli()
        .args(["warmup", "lower_a", "--include-optional", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Foam Rolling"));
}

#[test]
fn test_warmup_optional_flags_conflict() {
    cli()
        .args(["warmup", "lower_a", "--no-optional", "--include-optional"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_warmup_custom_pools() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("pools.json");
    fs::write(
        &path,
        r#"{"pools": {"recovery": {
            "foam_rolling": ["foam_roll_glutes", "foam_roll_quads"],
            "mobility": ["hip_cars", "cat_cow", "childs_pose"]
        }}}"#,
    )
    .unwrap();

    let value = stdout_json(
        cli()
            .args(["warmup", "recovery", "--json", "--pools"])
            .arg(&path),
    );
    let slugs: Vec<&str> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["exercise_slug"].as_str().unwrap())
        .collect();
    assert_eq!(
        slugs,
        ["foam_roll_glutes", "foam_roll_quads", "hip_cars", "cat_cow", "childs_pose"]
    );
}

#[test]
fn test_resolve_empty_file_writes_header() {
    let temp_dir = setup_test_dir();
    let day_path = temp_dir.path().join("empty.json");
    let csv_path = temp_dir.path().join("out.csv");
    fs::write(&day_path, "[]").unwrap();

    cli()
        .args(["resolve", "--file"])
        .arg(&day_path)
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 0 prescriptions"));

    let content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(content.starts_with("order_index,exercise_slug,base_slug"), "{content:?}");
    assert_eq!(content.lines().count(), 1);
}
