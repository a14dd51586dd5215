//! # Chatbot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers that are neither matching logic (`matching::`) nor session
//! handling (`session::`). Today this is only filesystem I/O.
//!
//! ```rust
//! use crate::common::fs::io;
//! io::ensure_dir_exists(Path::new("logs"))?;
//! ```
//!

/// Utilities for filesystem operations.
pub mod fs;
