//! # Chat Session
//!
//! File: cli/src/session/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The interactive side of the chatbot: reading lines, dispatching control
//! commands, printing timed replies, and writing the session log.
//!
//! ## Architecture
//!
//! - `input`: `LineSource` trait with the `rustyline` and buffered implementations
//! - `interrupt`: SIGINT handler for Ctrl+C outside the line editor
//! - `turn`: the `Turn` record and its log line format
//! - `logger`: append-only `SessionLogger` that never fails the session
//! - `repl`: the `Repl` state machine tying the pieces together
//!
//! Everything runs on one thread. The log file is only touched by the
//! logger, between reads, so no locking is involved.
//!
pub mod input;
pub mod interrupt;
pub mod logger;
pub mod repl;
pub mod turn;

pub use input::{BufferedSource, EditorSource};
pub use logger::SessionLogger;
pub use repl::{ExitReason, Repl};
