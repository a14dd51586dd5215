//! # Chat REPL
//!
//! File: cli/src/session/repl.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The read-eval-print loop. It owns no matching logic and loads nothing; it
//! is handed a `Responder`, a `LineSource`, an output writer, and a
//! `SessionLogger` by `main.rs` (or by a test).
//!
//! ## States
//!
//! ```text
//! AwaitingInput -> Dispatching -> Responding -> AwaitingInput
//!                             \-> Exit
//! ```
//!
//! - **AwaitingInput**: block on the line source. Ctrl+C and end of input go
//!   straight to `Exit` with a farewell.
//! - **Dispatching**: blank lines are dropped. `:quit`/`:q`/`:exit` exit;
//!   `:help`/`:h` print usage. Commands are the first word of the trimmed
//!   line and are case-sensitive. Anything else is a message.
//! - **Responding**: time the responder, print `bot: <reply> (<N> ms)`, log
//!   the turn.
//!
//! Control commands and blank lines are never logged.
//!
use crate::core::error::{ChatError, Result};
use crate::matching::Responder;
use crate::session::input::{InputEvent, LineSource};
use crate::session::logger::SessionLogger;
use crate::session::turn::Turn;
use chrono::Local;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, warn};

/// Consecutive read failures tolerated before the session gives up.
const MAX_CONSECUTIVE_READ_ERRORS: u32 = 3;

const FAREWELL: &str = "bot: Goodbye.";
pub(crate) const INTERRUPTED: &str = "bot: Interrupted by user. Goodbye.";
const READ_RETRY: &str = "bot: I didn't catch that. Please try again.";
const HELP: &str = "bot: Type to chat. Use :quit to exit.\n\
                    bot: :help (:h) shows this message, :quit (:q, :exit) ends the session.";

/// Why the loop stopped. All of these are a clean exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Interrupted,
    EndOfInput,
}

#[derive(Debug)]
enum State {
    AwaitingInput,
    Dispatching(String),
    Responding(String),
    Exit(ExitReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.split_whitespace().next()? {
        ":quit" | ":q" | ":exit" => Some(Command::Quit),
        ":help" | ":h" => Some(Command::Help),
        _ => None,
    }
}

pub struct Repl<'a, R: ?Sized, S, W> {
    responder: &'a R,
    input: S,
    out: W,
    logger: SessionLogger,
}

impl<'a, R, S, W> Repl<'a, R, S, W>
where
    R: Responder + ?Sized,
    S: LineSource,
    W: Write,
{
    pub fn new(responder: &'a R, input: S, out: W, logger: SessionLogger) -> Self {
        Self {
            responder,
            input,
            out,
            logger,
        }
    }

    /// Runs until `:quit`, Ctrl+C, or end of input.
    ///
    /// Errors only when the terminal itself is unusable: stdout cannot be
    /// written, or reads fail `MAX_CONSECUTIVE_READ_ERRORS` times in a row.
    pub fn run(&mut self) -> Result<ExitReason> {
        let mut state = State::AwaitingInput;
        let mut read_errors = 0;

        loop {
            state = match state {
                State::AwaitingInput => match self.input.read_line() {
                    Ok(InputEvent::Line(line)) => {
                        read_errors = 0;
                        State::Dispatching(line)
                    }
                    Ok(InputEvent::Interrupted) => {
                        writeln!(self.out, "{}", INTERRUPTED)?;
                        State::Exit(ExitReason::Interrupted)
                    }
                    Ok(InputEvent::Closed) => {
                        writeln!(self.out, "{}", FAREWELL)?;
                        State::Exit(ExitReason::EndOfInput)
                    }
                    Err(e) => {
                        read_errors += 1;
                        warn!("Input error ({} in a row): {:#}", read_errors, e);
                        if read_errors >= MAX_CONSECUTIVE_READ_ERRORS {
                            return Err(ChatError::TerminalInput {
                                attempts: read_errors,
                                last: format!("{:#}", e),
                            }
                            .into());
                        }
                        writeln!(self.out, "{}", READ_RETRY)?;
                        State::AwaitingInput
                    }
                },
                State::Dispatching(line) => self.dispatch(&line)?,
                State::Responding(text) => {
                    self.respond(text)?;
                    State::AwaitingInput
                }
                State::Exit(reason) => {
                    self.out.flush()?;
                    let lost = self.logger.failures();
                    if lost > 0 {
                        warn!(
                            "{} turn(s) missing from {}",
                            lost,
                            self.logger.path().display()
                        );
                    }
                    debug!("Session finished: {:?}", reason);
                    return Ok(reason);
                }
            };
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<State> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(State::AwaitingInput);
        }
        match parse_command(trimmed) {
            Some(Command::Quit) => {
                writeln!(self.out, "{}", FAREWELL)?;
                Ok(State::Exit(ExitReason::Quit))
            }
            Some(Command::Help) => {
                writeln!(self.out, "{}", HELP)?;
                Ok(State::AwaitingInput)
            }
            None => Ok(State::Responding(trimmed.to_string())),
        }
    }

    fn respond(&mut self, user_text: String) -> Result<()> {
        let received_at = Local::now();
        let started = Instant::now();
        let response = self.responder.get_response(&user_text);
        let latency_ms = started.elapsed().as_millis();

        writeln!(self.out, "bot: {} ({} ms)", response.reply, latency_ms)?;
        self.out.flush()?;
        debug!(
            "Reply via {:?} with confidence {:.2}",
            response.source, response.confidence
        );

        self.logger.log_turn(&Turn {
            user_text,
            bot_text: response.reply,
            confidence: response.confidence,
            latency_ms,
            received_at,
            replied_at: Local::now(),
        });
        Ok(())
    }
}
