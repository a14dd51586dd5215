//! # Terminal Input Sources
//!
//! File: cli/src/session/input.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The REPL reads through the `LineSource` trait, which reports one of three
//! events per call: a line, an interrupt, or the end of input.
//!
//! - `EditorSource` wraps a `rustyline` editor for interactive terminals. It
//!   shows the `user: ` prompt, keeps in-memory history, and turns Ctrl+C and
//!   Ctrl+D into `Interrupted` and `Closed` instead of killing the process.
//! - `BufferedSource` reads any `BufRead` (piped stdin, or a `Cursor` in
//!   tests) without a prompt.
//!
use crate::core::error::Result;
use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::BufRead;
use tracing::debug;

/// What a single read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of text without its trailing newline.
    Line(String),
    /// The user pressed Ctrl+C while we were waiting.
    Interrupted,
    /// No more input (Ctrl+D or a closed pipe).
    Closed,
}

/// Blocking, line-oriented input.
pub trait LineSource {
    fn read_line(&mut self) -> Result<InputEvent>;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> Result<InputEvent> {
        (**self).read_line()
    }
}

/// Interactive input through `rustyline`.
pub struct EditorSource {
    editor: DefaultEditor,
    prompt: String,
}

impl EditorSource {
    pub fn new(prompt: impl Into<String>) -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialize the line editor")?;
        Ok(Self {
            editor,
            prompt: prompt.into(),
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self) -> Result<InputEvent> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!("Could not add history entry: {}", e);
                    }
                }
                Ok(InputEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Closed),
            Err(e) => Err(e).context("Failed to read from terminal"),
        }
    }
}

/// Prompt-less input from any buffered reader.
pub struct BufferedSource<R> {
    reader: R,
}

impl<R: BufRead> BufferedSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufferedSource<R> {
    fn read_line(&mut self) -> Result<InputEvent> {
        let mut buf = String::new();
        let read = self
            .reader
            .read_line(&mut buf)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(InputEvent::Closed);
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(InputEvent::Line(line.to_string()))
    }
}
