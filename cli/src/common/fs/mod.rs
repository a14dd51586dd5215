//! # Chatbot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! Filesystem helpers shared by configuration loading, corpus loading, and
//! the session logger. Callers import from the submodule directly, e.g.
//! `use crate::common::fs::io::open_append;`.

/// Basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`, `open_append`).
pub mod io;
