//! # Chatbot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`. Each test
//! runs the compiled `chatbot` binary inside its own temporary directory so
//! that the default `logs/session.log` and any `.chatbot.toml` stay isolated.
//!

// Not every test crate uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Returns a `Command` for the compiled `chatbot` binary.
///
/// The log file environment override is removed so a developer's shell
/// settings cannot leak into the tests.
///
/// ## Panics
/// Panics if the `chatbot` binary cannot be found via `Command::cargo_bin`.
pub fn chatbot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chatbot").expect("Failed to find chatbot binary for testing");
    cmd.env_remove("CHATBOT_LOG_FILE").env_remove("RUST_LOG");
    cmd
}

/// `chatbot_cmd()` running in `dir` without the banner.
pub fn chatbot_in(dir: &Path) -> Command {
    let mut cmd = chatbot_cmd();
    cmd.current_dir(dir).arg("--no-banner");
    cmd
}
