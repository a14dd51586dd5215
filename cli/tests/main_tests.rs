//! # Chatbot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `chatbot` binary: standard flags, the banner,
//! and how startup failures are reported.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_help_lists_options() {
    chatbot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-file"))
        .stdout(predicate::str::contains("--scorer"))
        .stdout(predicate::str::contains("--no-banner"));
}

#[test]
fn test_version_flag() {
    chatbot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_banner_is_printed_by_default() {
    let dir = tempdir().unwrap();
    chatbot_cmd()
        .current_dir(dir.path())
        .write_stdin(":quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal Chatbot"))
        .stdout(predicate::str::contains("Commands: :help  :quit"));
}

#[test]
fn test_no_banner_flag() {
    let dir = tempdir().unwrap();
    chatbot_in(dir.path())
        .write_stdin(":quit\n")
        .assert()
        .success()
        .stdout("bot: Goodbye.\n");
}

#[test]
fn test_invalid_confidence_floor_fails() {
    let dir = tempdir().unwrap();
    chatbot_in(dir.path())
        .args(["--confidence-floor", "1.5"])
        .write_stdin("hello\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("confidence_floor"));
}

#[test]
fn test_unknown_scorer_is_rejected_by_clap() {
    chatbot_cmd()
        .args(["--scorer", "cosine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cosine"));
}

#[test]
fn test_malformed_config_file_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[matcher\nconfidence_floor = ").unwrap();

    chatbot_in(dir.path())
        .arg("--config")
        .arg(&config)
        .write_stdin(":quit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_project_config_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(
        dir.path().join(".chatbot.toml"),
        r#"
[session]
log_file = "custom/chat.log"

[matcher]
default_reply = "No idea, sorry."
"#,
    )
    .unwrap();

    chatbot_in(dir.path())
        .write_stdin("xyzzy plugh frobnicate\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bot: No idea, sorry. ("));

    assert!(dir.path().join("custom/chat.log").is_file());
    assert!(!dir.path().join("logs/session.log").exists());
}
