//! # Training Corpus
//!
//! File: cli/src/matching/corpus.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The corpus is the list of utterance/response entries the similarity
//! matcher searches. A small greetings and small-talk set is compiled into the
//! binary; a TOML file can add more entries and extra exact-match pairs.
//!
//! ## File Format
//!
//! ```toml
//! [[entries]]
//! utterance = "What is Rust?"
//! response = "A systems programming language."
//!
//! [[pairs]]
//! trigger = "ping"
//! reply = "pong"
//! ```
//!
//! Entry order matters: the matcher breaks score ties in favour of the entry
//! that comes first, so built-in entries precede file entries.
//!
use crate::common::fs::io;
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// One utterance and the response given when input resembles it.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CorpusEntry {
    pub utterance: String,
    pub response: String,
}

/// An exact-match rule declared in a corpus file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PairEntry {
    pub trigger: String,
    pub reply: String,
}

/// Contents of a corpus file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CorpusFile {
    #[serde(default)]
    pub entries: Vec<CorpusEntry>,
    #[serde(default)]
    pub pairs: Vec<PairEntry>,
}

const BUILTIN_CORPUS: &[(&str, &str)] = &[
    ("Good morning", "Good morning. How are you?"),
    ("Good evening", "Good evening. How was your day?"),
    ("How are you?", "I am doing well, thank you for asking."),
    ("How are you doing?", "I'm doing great. How about you?"),
    ("Nice to meet you", "Thank you. Nice to meet you too."),
    (
        "What is your name?",
        "I'm TerminalBot, a small command-line chatbot.",
    ),
    (
        "What are you?",
        "I am a simple terminal chatbot built with Rust.",
    ),
    (
        "Who made you?",
        "I was put together by a developer who wanted a small, predictable chatbot.",
    ),
    (
        "Are you a robot?",
        "Yes. I compare what you type with the phrases I know and pick the closest one.",
    ),
    (
        "What can you do?",
        "I can answer a few simple questions. Type :help to see the commands.",
    ),
    ("Thank you", "You're welcome."),
    (
        "Tell me a joke",
        "Why do programmers prefer dark mode? Because light attracts bugs.",
    ),
    ("I am fine", "Glad to hear it."),
    (
        "Do you like music?",
        "I don't have ears, but I hear it's great.",
    ),
];

/// The compiled-in greetings and small-talk entries.
pub fn builtin_entries() -> Vec<CorpusEntry> {
    BUILTIN_CORPUS
        .iter()
        .map(|(utterance, response)| CorpusEntry {
            utterance: (*utterance).to_string(),
            response: (*response).to_string(),
        })
        .collect()
}

/// Reads and parses a corpus file.
///
/// Entries and pairs with a blank field are dropped with a warning. A file
/// that ends up with nothing usable is an error.
pub fn load_corpus_file(path: &Path) -> Result<CorpusFile> {
    let content = io::read_file_to_string(path)
        .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;
    let parsed: CorpusFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse corpus file: {}", path.display()))?;

    let corpus = drop_blank_rows(parsed);
    if corpus.entries.is_empty() && corpus.pairs.is_empty() {
        anyhow::bail!(ChatError::Corpus(format!(
            "{} contains no usable entries or pairs",
            path.display()
        )));
    }
    info!(
        "Loaded {} entries and {} pairs from {}",
        corpus.entries.len(),
        corpus.pairs.len(),
        path.display()
    );
    Ok(corpus)
}

fn drop_blank_rows(corpus: CorpusFile) -> CorpusFile {
    let entries = corpus
        .entries
        .into_iter()
        .filter(|e| {
            let keep = !e.utterance.trim().is_empty() && !e.response.trim().is_empty();
            if !keep {
                warn!("Skipping corpus entry with a blank field: {:?}", e);
            }
            keep
        })
        .collect();
    let pairs = corpus
        .pairs
        .into_iter()
        .filter(|p| {
            let keep = !p.trigger.trim().is_empty() && !p.reply.trim().is_empty();
            if !keep {
                warn!("Skipping pair with a blank field: {:?}", p);
            }
            keep
        })
        .collect();
    CorpusFile { entries, pairs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_corpus_has_bot_description() {
        let entries = builtin_entries();
        assert!(entries
            .iter()
            .any(|e| e.utterance == "What are you?" && e.response.contains("terminal chatbot")));
        assert!(entries
            .iter()
            .all(|e| !e.utterance.is_empty() && !e.response.is_empty()));
    }

    #[test]
    fn test_load_corpus_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("corpus.toml");
        fs::write(
            &path,
            r#"
            [[entries]]
            utterance = "What is Rust?"
            response = "A systems programming language."

            [[entries]]
            utterance = "   "
            response = "dropped"

            [[pairs]]
            trigger = "ping"
            reply = "pong"
            "#,
        )?;

        let corpus = load_corpus_file(&path)?;
        assert_eq!(corpus.entries.len(), 1);
        assert_eq!(corpus.entries[0].utterance, "What is Rust?");
        assert_eq!(
            corpus.pairs,
            vec![PairEntry {
                trigger: "ping".into(),
                reply: "pong".into()
            }]
        );
        Ok(())
    }

    #[test]
    fn test_load_corpus_file_missing() {
        let dir = tempdir().unwrap();
        let err = load_corpus_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read corpus file"));
    }

    #[test]
    fn test_load_corpus_file_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[[entries]]\nutterance = \"only half\"\n").unwrap();
        let err = load_corpus_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse corpus file"));
    }

    #[test]
    fn test_load_corpus_file_without_usable_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();
        let err = load_corpus_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChatError>(),
            Some(ChatError::Corpus(_))
        ));
    }
}
