//! # Chatbot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` that attach context to I/O errors:
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing, and
//!   fails if the path exists but is not a directory.
//! - **`read_file_to_string`**: Reads a whole file, naming it in the error.
//! - **`open_append`**: Opens a file for appending, creating it and its parent
//!   directory if needed. Existing content is never truncated.
//!
//! ## Usage
//!
//! - Configuration and corpus loading use `read_file_to_string`.
//! - The session logger uses `open_append` for `logs/session.log`.
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! let mut log = io::open_append(Path::new("logs/session.log"))?;
//! let corpus = io::read_file_to_string(Path::new("corpus.toml"))?;
//! ```
//!
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use tracing::{debug, info};

/// Creates `path` and any missing parents.
///
/// Errors when something other than a directory already sits at `path`, or
/// when the directory cannot be created.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        debug!("Directory present: {}", path.display());
        return Ok(());
    }
    if path.exists() {
        anyhow::bail!(ChatError::FileSystem(format!(
            "{} exists and is not a directory",
            path.display()
        )));
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Could not create directory {}", path.display()))?;
    info!("Created directory {}", path.display());
    Ok(())
}

pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
}

/// Opens `path` for appending, creating the file and its parent directory when missing.
pub fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Could not open {} for appending", path.display()))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_builds_nested_dirs() -> Result<()> {
        let base_dir = tempdir()?;
        let logs = base_dir.path().join("var/logs");
        ensure_dir_exists(&logs)?;
        ensure_dir_exists(&logs)?; // second call is a no-op
        assert!(logs.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_rejects_regular_file() -> Result<()> {
        let base_dir = tempdir()?;
        let occupied = base_dir.path().join("session.log");
        fs::write(&occupied, "turns")?;
        let err = ensure_dir_exists(&occupied).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
        Ok(())
    }

    /// Appending twice keeps the first write and creates missing parents.
    #[test]
    fn test_open_append_preserves_content() -> Result<()> {
        let base_dir = tempdir()?;
        let log_path = base_dir.path().join("logs/session.log");

        writeln!(open_append(&log_path)?, "first")?;
        writeln!(open_append(&log_path)?, "second")?;

        assert_eq!(read_file_to_string(&log_path)?, "first\nsecond\n");
        Ok(())
    }

    /// Fails when the parent path is a regular file.
    #[test]
    fn test_open_append_parent_is_directory_error() -> Result<()> {
        let base_dir = tempdir()?;
        let blocker = base_dir.path().join("logs");
        fs::write(&blocker, "not a dir")?;
        assert!(open_append(&blocker.join("session.log")).is_err());
        Ok(())
    }

    #[test]
    fn test_read_missing_file_names_the_path() -> Result<()> {
        let base_dir = tempdir()?;
        let err = read_file_to_string(&base_dir.path().join("corpus.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("corpus.toml"));
        Ok(())
    }
}
