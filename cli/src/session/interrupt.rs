//! # Interrupt Handling
//!
//! File: cli/src/session/interrupt.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `rustyline` reads Ctrl+C as a key while it owns the terminal and reports
//! it as `InputEvent::Interrupted`. Everywhere else (piped stdin, an IDE
//! console, or the moment between two prompts) Ctrl+C arrives as SIGINT,
//! which would kill the process without a farewell.
//!
//! `install` registers a process-wide handler that prints the interrupt
//! farewell and exits with status 0, matching the in-editor behavior. Every
//! logged turn has already been flushed by the time a read blocks, so
//! exiting from the handler loses nothing.
//!
use crate::core::error::Result;
use crate::session::repl::INTERRUPTED;
use anyhow::Context;
use std::io::Write;
use tracing::debug;

/// Registers the SIGINT handler. Call once, before the first read.
pub fn install() -> Result<()> {
    ctrlc::set_handler(|| {
        // Waits for any reply still being written, so lines never interleave.
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", INTERRUPTED);
        let _ = stdout.flush();
        std::process::exit(0);
    })
    .context("Failed to install the Ctrl+C handler")?;
    debug!("Ctrl+C handler installed");
    Ok(())
}
