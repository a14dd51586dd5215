//! # Session Logger
//!
//! File: cli/src/session/logger.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Appends every turn to the session log (`logs/session.log` by default).
//! The log is an audit trail, separate from the terminal: nothing written
//! here is echoed to stdout, and diagnostics never end up in it.
//!
//! ## Failure Handling
//!
//! `log_turn` cannot fail. If the file cannot be opened or written:
//! - the first failure is reported with `warn!`
//! - later failures only produce `debug!` output
//! - the file is reopened on the next turn, so a transient problem (disk
//!   full, directory removed) heals by itself
//!
//! Both lines of a turn are written with a single `write_all`, so the user
//! line always precedes its bot line.
//!
use crate::common::fs::io::open_append;
use crate::core::error::{ChatError, Result};
use crate::session::turn::Turn;
use anyhow::Context;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct SessionLogger {
    path: PathBuf,
    file: Option<File>,
    failures: u32,
}

impl SessionLogger {
    /// Creates a logger for `path`. The file is opened lazily on the first turn.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
            failures: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of turns that could not be written.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Appends the user line and the bot line for `turn`.
    pub fn log_turn(&mut self, turn: &Turn) {
        if let Err(e) = self.try_log(turn) {
            self.file = None;
            self.failures += 1;
            if self.failures == 1 {
                warn!(
                    "Session log unavailable, turns will not be recorded: {:#}",
                    e
                );
            } else {
                debug!("Session log write failed again: {:#}", e);
            }
        }
    }

    fn try_log(&mut self, turn: &Turn) -> Result<()> {
        let file = match self.file.take() {
            Some(file) => file,
            None => open_append(&self.path).map_err(|e| {
                ChatError::SessionLog(format!("cannot open {}: {:#}", self.path.display(), e))
            })?,
        };
        let file = self.file.insert(file);
        file.write_all(turn.log_lines().as_bytes())
            .and_then(|()| file.flush())
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;
        Ok(())
    }
}
