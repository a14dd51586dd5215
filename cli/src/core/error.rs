//! # Chatbot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the chatbot. Domain
//! failures are described by the `ChatError` enum (derived with `thiserror`),
//! while functions return the `Result<T>` alias over `anyhow::Error` so callers
//! can attach context with `anyhow::Context`.
//!
//! ## Architecture
//!
//! The error variants cover the places where the application touches the
//! outside world:
//! - Configuration loading and validation
//! - Corpus file loading
//! - The session log file
//! - Terminal input
//!
//! Only startup and terminal faults are ever propagated to `main`. Session log
//! and corpus failures are absorbed where they happen and only reported, so a
//! broken log file or a malformed corpus never ends the conversation.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !(0.0..=1.0).contains(&floor) {
//!     anyhow::bail!(ChatError::Config(format!("floor out of range: {}", floor)));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the chatbot application.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Session log error: {0}")]
    SessionLog(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Terminal input failed {attempts} times in a row: {last}")]
    TerminalInput { attempts: u32, last: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
