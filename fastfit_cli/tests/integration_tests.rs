//! Integration tests for the fastfit binary.
//!
//! These tests verify end-to-end behavior including:
//! - Profile setup and persistence
//! - First-run navigation (setup required before display commands)
//! - Time-window resolution and tier-aware content selection
//! - Input validation at the form boundary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fastfit"))
}

/// Run a non-interactive setup with the given vitals
fn run_setup(data_dir: &Path, age: &str, weight: &str, height: &str, sex: &str) {
    cli()
        .arg("setup")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--age")
        .arg(age)
        .arg("--weight")
        .arg(weight)
        .arg("--height")
        .arg(height)
        .arg("--sex")
        .arg(sex)
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved"));
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fasting-day exercise schedule advisor",
        ));
}

#[test]
fn test_now_requires_setup() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("now")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("fastfit setup"));
}

#[test]
fn test_setup_writes_profile() {
    let temp_dir = setup_test_dir();
    run_setup(temp_dir.path(), "30", "70", "175", "male");

    let profile_path = temp_dir.path().join("profile.json");
    assert!(profile_path.exists());

    let contents = std::fs::read_to_string(&profile_path).expect("Failed to read profile");
    let profile: serde_json::Value = serde_json::from_str(&contents).expect("Invalid JSON");
    assert_eq!(profile["age_years"], 30);
    assert_eq!(profile["sex"], "male");
    assert_eq!(profile["setup_complete"], true);
}

#[test]
fn test_setup_rejects_out_of_range_age() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("setup")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--age")
        .arg("5")
        .arg("--weight")
        .arg("70")
        .arg("--height")
        .arg("175")
        .arg("--sex")
        .arg("male")
        .assert()
        .failure();

    assert!(!temp_dir.path().join("profile.json").exists());
}

#[test]
fn test_setup_rejects_unknown_timezone() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("setup")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--age")
        .arg("30")
        .arg("--weight")
        .arg("70")
        .arg("--height")
        .arg("175")
        .arg("--sex")
        .arg("male")
        .arg("--timezone")
        .arg("Nowhere/Null")
        .assert()
        .failure();
}

#[test]
fn test_now_at_evening_standard_tier() {
    let temp_dir = setup_test_dir();
    run_setup(temp_dir.path(), "30", "70", "175", "male");

    cli()
        .arg("now")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--at")
        .arg("20:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("AFTER IFTAR"))
        .stdout(predicate::str::contains("BEST TIME"))
        .stdout(predicate::str::contains("Running / Moderate Cardio"))
        .stdout(predicate::str::contains("Standard intensity"));
}

#[test]
fn test_now_at_evening_light_tier_for_senior() {
    let temp_dir = setup_test_dir();
    run_setup(temp_dir.path(), "70", "70", "170", "male");

    // Age 70 → Light tier → the gentle After-Iftar variant, still BEST
    cli()
        .arg("now")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--at")
        .arg("20:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("Walking / Gentle Cycling"))
        .stdout(predicate::str::contains("BEST TIME"))
        .stdout(predicate::str::contains("Light intensity"));
}

#[test]
fn test_now_end_boundary_is_exclusive() {
    let temp_dir = setup_test_dir();
    run_setup(temp_dir.path(), "30", "70", "175", "male");

    // 4:00 AM belongs to Suhoor → Fajr, not Pre-Suhoor
    cli()
        .arg("now")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--at")
        .arg("04:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUHOOR → FAJR"));
}

#[test]
fn test_now_wraps_past_midnight() {
    let temp_dir = setup_test_dir();
    run_setup(temp_dir.path(), "30", "70", "175", "male");

    cli()
        .arg("now")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--at")
        .arg("00:30")
        .assert()
        .success()
        .stdout(predicate::str::contains("LATE NIGHT"));
}

#[test]
fn test_now_rejects_malformed_time() {
    let temp_dir = setup_test_dir();
    run_setup(temp_dir.path(), "30", "70", "175", "male");

    cli()
        .arg("now")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--at")
        .arg("25:99")
        .assert()
        .failure();
}

#[test]
fn test_schedule_lists_all_windows() {
    let temp_dir = setup_test_dir();
    run_setup(temp_dir.path(), "30", "70", "175", "male");

    let assert = cli()
        .arg("schedule")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    let output = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for period in [
        "Pre-Suhoor",
        "Suhoor → Fajr",
        "Morning Fast",
        "Afternoon Fast",
        "Late Afternoon",
        "Near Iftar",
        "Just After Iftar",
        "After Iftar",
        "Evening",
        "Late Night",
    ] {
        assert!(output.contains(period), "missing period '{}'", period);
    }
}

#[test]
fn test_profile_shows_derived_stats() {
    let temp_dir = setup_test_dir();
    run_setup(temp_dir.path(), "30", "70", "175", "male");

    cli()
        .arg("profile")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI 22.9"))
        .stdout(predicate::str::contains("BMR ~1649 kcal/day"));
}

#[test]
fn test_setup_prefills_keep_timezone() {
    let temp_dir = setup_test_dir();

    // First setup with an explicit zone
    cli()
        .arg("setup")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--age")
        .arg("30")
        .arg("--weight")
        .arg("70")
        .arg("--height")
        .arg("175")
        .arg("--sex")
        .arg("male")
        .arg("--timezone")
        .arg("Asia/Riyadh")
        .assert()
        .success();

    // Re-run without --timezone: the stored zone must survive the rewrite
    run_setup(temp_dir.path(), "31", "71", "175", "male");

    let contents =
        std::fs::read_to_string(temp_dir.path().join("profile.json")).expect("read profile");
    let profile: serde_json::Value = serde_json::from_str(&contents).expect("Invalid JSON");
    assert_eq!(profile["age_years"], 31);
    assert_eq!(profile["timezone"], "Asia/Riyadh");
}

#[test]
fn test_watch_single_tick() {
    let temp_dir = setup_test_dir();
    run_setup(temp_dir.path(), "30", "70", "175", "male");

    cli()
        .arg("watch")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--ticks")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("TIME").or(predicate::str::contains("AVOID")));
}

#[test]
fn test_timezones_filter() {
    cli()
        .arg("timezones")
        .arg("riyadh")
        .assert()
        .success()
        .stdout(predicate::str::contains("Asia/Riyadh"));
}
