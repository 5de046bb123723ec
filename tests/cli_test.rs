//! Binary-level tests for the `cfpick` CLI. None of these reach the network.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn cfpick() -> Command {
    let mut cmd = Command::cargo_bin("cfpick").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_tags_lists_topics() {
    let output = cfpick().arg("tags").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|line| line == "dp"));
    assert!(stdout.lines().any(|line| line == "2-sat"));
}

#[test]
fn test_ratings_plain_shows_legend() {
    let output = cfpick().args(["ratings", "--plain"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Legendary Grandmaster"));
    assert!(stdout.contains(">= 4000"));
    assert!(stdout.contains("https://codeforces.com/problemset"));
}

#[test]
fn test_inverted_range_fails_before_fetching() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    // Unroutable base URL: reaching the network would fail differently
    fs::write(&config, "[api]\nbase_url = \"http://127.0.0.1:9\"\n").unwrap();

    let output = cfpick()
        .current_dir(dir.path())
        .env("CFPICK_CONFIG", &config)
        .args(["pick", "--min", "1500", "--max", "1000", "--plain", "-q"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Starting difficulty should be less than or equal to ending difficulty."),
        "stderr: {}",
        stderr
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_bounds_message() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    let output = cfpick()
        .current_dir(dir.path())
        .env("CFPICK_CONFIG", &config)
        .args(["pick", "--from", "1200", "--plain", "-q"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please select both starting and ending difficulty levels."));
}

#[test]
fn test_unknown_topic_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    let output = cfpick()
        .current_dir(dir.path())
        .env("CFPICK_CONFIG", &config)
        .args(["pick", "--min", "800", "--max", "900", "--tag", "cooking", "-q"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cooking"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    cfpick()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    let written = fs::read_to_string(dir.path().join(".cfpick.toml")).unwrap();
    assert!(written.contains("[defaults]"));

    cfpick()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();

    cfpick()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
