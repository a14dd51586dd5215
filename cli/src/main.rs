//! # Chatbot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file is the bootstrap for the terminal chatbot. It:
//! - Parses command-line arguments using Clap
//! - Sets up diagnostics (stderr only) based on verbosity flags
//! - Loads configuration and builds the matching context once
//! - Hands the context, an input source, stdout, and the session logger to the REPL
//!
//! The REPL never loads configuration or corpus data itself.
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! chatbot
//!
//! # Stricter matching, log somewhere else, show debug diagnostics
//! chatbot --confidence-floor 0.8 --log-file /tmp/chat.log -vv
//!
//! # Scripted session
//! printf 'Hello\nWhat are you?\n:quit\n' | chatbot --no-banner
//! ```
//!
//! Exit codes: `0` after `:quit`, Ctrl+C (in the editor or as SIGINT on piped
//! stdin), or end of input; `1` when startup fails or the terminal becomes
//! unusable.
//!
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod common; // Shared utilities (filesystem)
mod core; // Core infrastructure (errors, config)
mod matching; // Normalizer, pair table, similarity matcher, response selection
mod session; // REPL, input sources, session log

use crate::core::config::{self, ConfigOverrides};
use crate::core::error::Result;
use crate::matching::similarity::ScorerKind;
use crate::matching::MatchingContext;
use crate::session::{interrupt, BufferedSource, EditorSource, ExitReason, Repl, SessionLogger};

const PROMPT: &str = "user: ";
const BANNER: &str = "\nTerminal Chatbot\n\
                      Type your message and press Enter.\n\
                      Commands: :help  :quit\n";

/// Defines the command-line arguments using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatbot",
    about = "A small deterministic terminal chatbot",
    long_about = "Chat in the terminal. Known phrases get fixed replies, everything else is \n\
                  matched against a small corpus. Every turn is appended to a session log.",
    version
)]
struct Cli {
    /// Configuration file to use instead of searching for `.chatbot.toml`.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Session log file (appended to, created if missing).
    #[arg(long, value_name = "PATH", env = "CHATBOT_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Minimum similarity score (0 to 1) for a corpus reply.
    #[arg(long, value_name = "SCORE")]
    confidence_floor: Option<f64>,

    /// Extra corpus file (TOML with [[entries]] and [[pairs]]).
    #[arg(long, value_name = "FILE")]
    corpus: Option<PathBuf>,

    /// Similarity scorer for the corpus fallback.
    #[arg(long, value_enum)]
    scorer: Option<ScorerKind>,

    /// Do not print the startup banner.
    #[arg(long)]
    no_banner: bool,

    /// Diagnostic verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // rustyline logs every keystroke at debug level.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},rustyline=warn", log_level)));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    match run(cli) {
        Ok(reason) => tracing::info!("Session ended: {:?}", reason),
        Err(e) => {
            tracing::error!("Session failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run(cli: Cli) -> Result<ExitReason> {
    let overrides = ConfigOverrides {
        log_file: cli.log_file,
        confidence_floor: cli.confidence_floor,
        corpus: cli.corpus,
        scorer: cli.scorer,
    };
    let cfg = config::load_config(cli.config.as_deref(), &overrides)?;

    let context = MatchingContext::from_config(&cfg.matcher, &cfg.corpus);
    let logger = SessionLogger::new(&cfg.session.log_file);
    tracing::info!("Session log: {}", logger.path().display());

    interrupt::install()?;

    let mut stdout = io::stdout();
    if !cli.no_banner {
        writeln!(stdout, "{}", BANNER)?;
    }

    if io::stdin().is_terminal() {
        let source = EditorSource::new(PROMPT)?;
        Repl::new(&context, source, stdout, logger).run()
    } else {
        let source = BufferedSource::new(io::stdin().lock());
        Repl::new(&context, source, stdout, logger).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn chatbot_cmd() -> Command {
        Command::cargo_bin("chatbot").expect("Failed to find chatbot binary for testing")
    }

    #[test]
    fn test_main_help_flag() {
        chatbot_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--confidence-floor"));
    }

    #[test]
    fn test_main_version_flag() {
        chatbot_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from([
            "chatbot",
            "--confidence-floor",
            "0.8",
            "--scorer",
            "token-overlap",
            "--no-banner",
            "-vv",
        ]);
        assert_eq!(cli.confidence_floor, Some(0.8));
        assert_eq!(cli.scorer, Some(ScorerKind::TokenOverlap));
        assert!(cli.no_banner);
        assert_eq!(cli.verbose, 2);
    }
}
