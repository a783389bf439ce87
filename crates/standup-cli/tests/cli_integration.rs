use assert_cmd::Command;
use predicates::prelude::*;

fn standup() -> Command {
    Command::cargo_bin("standup").unwrap()
}

#[test]
fn test_help_describes_the_tool() {
    standup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("daily standup tracker"))
        .stdout(predicate::str::contains("--empty"))
        .stdout(predicate::str::contains("--date"));
}

#[test]
fn test_version_flag() {
    standup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generates_bash_completions() {
    standup()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standup"));
}

#[test]
fn test_rejects_malformed_date() {
    standup()
        .args(["--date", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_debug_log_env_creates_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("debug.log");

    standup()
        .env("STANDUP_DEBUG_LOG", log_path.to_str().unwrap())
        .args(["completions", "bash"])
        .assert()
        .success();

    assert!(log_path.exists());
}
