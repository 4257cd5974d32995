//! CLI E2E tests for the tle-harness binary.
//!
//! Validates:
//! - No-argument runs read SGP4-VER.TLE from the working directory
//! - Sample lines carry seven fixed-width fields
//! - Rejected lines go to stderr, never stdout
//! - A missing input file is reported but still exits 0
//! - Disabling checksum verification lets stale-checksum records propagate
//! - A broken config file exits 10

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

// ============================================================================
// Helpers
// ============================================================================

const VANGUARD_1: &str = "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753";
const VANGUARD_2: &str = "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";
const COSMOS_1: &str = "1 06251U 62025E   06176.82412014  .00008885  00000-0  12808-3 0  3985";
const COSMOS_2: &str = "2 06251  58.0579  54.0425 0030035 139.1568 221.1854 15.56387291  6774";

/// Get a Command for the tle-harness binary with a clean environment.
fn harness() -> Command {
    let mut cmd = cargo_bin_cmd!("tle-harness");
    cmd.timeout(Duration::from_secs(60))
        .env_remove("RUST_LOG")
        .env_remove("TLE_HARNESS_INPUT")
        .env_remove("TLE_HARNESS_CONFIG")
        .env("XDG_CONFIG_HOME", "/nonexistent-tle-harness-config");
    cmd
}

fn stdout_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Default input
// ============================================================================

#[test]
fn test_reads_default_file_from_working_directory() {
    let dir = tempdir().unwrap();
    let content = format!(
        "# verification cases\n{VANGUARD_1}\n{VANGUARD_2}     0.00      4320.0        360.00\n\n{COSMOS_1}\n{COSMOS_2}\n"
    );
    fs::write(dir.path().join("SGP4-VER.TLE"), content).unwrap();

    let output = harness()
        .current_dir(dir.path())
        .assert()
        .success()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let lines = stdout_lines(&output);
    // Two headers and 13 samples per record.
    assert_eq!(lines.len(), 2 + 13 + 13, "unexpected output:\n{}", lines.join("\n"));
    assert_eq!(lines[0], "  5  xx");
    assert_eq!(lines[14], "  6251  xx");

    let first = &lines[1];
    assert!(first.starts_with("       0.00000000 "), "got {first:?}");
    let last_vanguard: Vec<&str> = lines[13].split_whitespace().collect();
    assert_eq!(last_vanguard[0], "4320.00000000");

    for line in lines.iter().filter(|l| !l.ends_with("xx")) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields.len(), 7, "bad sample line {line:?}");
        for f in &fields {
            assert!(f.parse::<f64>().is_ok(), "non-numeric field {f:?}");
        }
    }
}

#[test]
fn test_explicit_input_argument() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cases.tle");
    fs::write(&path, format!("{COSMOS_1}\n{COSMOS_2} 0 240 120\n")).unwrap();

    harness()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("  6251  xx"))
        .stdout(predicate::str::contains("240.00000000"));
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn test_missing_input_reports_and_exits_zero() {
    let dir = tempdir().unwrap();

    harness()
        .current_dir(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to open input file"))
        .stderr(predicate::str::contains("SGP4-VER.TLE"));
}

#[test]
fn test_rejected_lines_go_to_stderr() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cases.tle");
    fs::write(
        &path,
        format!("1 00005U truncated\n{COSMOS_1}\n{VANGUARD_1}\n{COSMOS_1}\n{COSMOS_2}\n"),
    )
    .unwrap();

    let assert = harness().arg(&path).assert().code(0);
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("Error: invalid element line"), "stderr: {stderr}");
    assert!(stderr.contains("invalid line beginning"), "stderr: {stderr}");
    assert!(!stdout.contains("truncated"));
    assert!(!stdout.contains("  5  xx"));
    assert_eq!(stdout.matches("  6251  xx").count(), 1);
}

#[test]
fn test_quiet_hides_rejections() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cases.tle");
    fs::write(&path, "not an element line\n").unwrap();

    harness()
        .arg(&path)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_json_logs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cases.tle");
    fs::write(&path, "not an element line\n").unwrap();

    harness()
        .arg(&path)
        .args(["--log-format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"line_number\":1"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_changes_default_sampling() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("cases.tle");
    let config = dir.path().join("harness.toml");
    fs::write(&input, format!("{COSMOS_1}\n{COSMOS_2}\n")).unwrap();
    fs::write(
        &config,
        format!(
            "input = {:?}\n\n[sampling]\nend = 360.0\nincrement = 180.0\n",
            input.display().to_string()
        ),
    )
    .unwrap();

    let output = harness()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_lines(&output).len(), 1 + 3);
}

#[test]
fn test_checksum_verification_off_propagates_stale_lines() {
    let dir = tempdir().unwrap();
    let stale = format!("{}4", &VANGUARD_1[..VANGUARD_1.len() - 1]);
    fs::write(
        dir.path().join("SGP4-VER.TLE"),
        format!("{stale}\n{VANGUARD_2}\n"),
    )
    .unwrap();
    let config = dir.path().join("harness.toml");
    fs::write(&config, "[validation]\nverify_checksum = false\n").unwrap();

    let output = harness()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("initialisation failed").not())
        .get_output()
        .stdout
        .clone();
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1 + 13);
    assert_eq!(lines[0], "  5  xx");
}

#[test]
fn test_broken_config_exits_10() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("harness.toml");
    fs::write(&config, "[sampling]\nincrement = -1.0\n").unwrap();

    harness()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(10)
        .stderr(predicate::str::contains("increment must be positive"));
}
