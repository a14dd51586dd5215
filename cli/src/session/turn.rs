//! # Turn Record
//!
//! File: cli/src/session/turn.rs
//! Author: Christi Mahu
//!
//! One user utterance and the reply it got. A `Turn` is built by the REPL,
//! handed to the logger, and dropped; sessions are never buffered in memory.

use chrono::{DateTime, Local};

/// Timestamp format used on every session log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub user_text: String,
    pub bot_text: String,
    pub confidence: f64,
    pub latency_ms: u128,
    /// When the input was handed to the responder.
    pub received_at: DateTime<Local>,
    /// When the reply was ready.
    pub replied_at: DateTime<Local>,
}

impl Turn {
    /// The two session log lines for this turn, user first, each ending in `\n`.
    pub fn log_lines(&self) -> String {
        format!(
            "{} | user | {}\n{} | bot | {} | ms={} | confidence={:.2}\n",
            self.received_at.format(TIMESTAMP_FORMAT),
            single_line(&self.user_text),
            self.replied_at.format(TIMESTAMP_FORMAT),
            single_line(&self.bot_text),
            self.latency_ms,
            self.confidence,
        )
    }
}

/// Keeps one record per line even if a corpus reply contains line breaks.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
