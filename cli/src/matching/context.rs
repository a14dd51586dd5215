//! # Response Selection
//!
//! File: cli/src/matching/context.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `MatchingContext` bundles the pair table and the similarity matcher and
//! decides which one answers:
//!
//! 1. Normalize the input.
//! 2. Exact lookup in the pair table. On a hit, return it immediately; the
//!    similarity matcher is not consulted at all.
//! 3. Otherwise return whatever the similarity matcher picks (a corpus reply
//!    or the default reply).
//!
//! The REPL only sees the `Responder` trait, so tests can drive it with a
//! canned responder instead of a real context.
//!
use crate::core::config::{CorpusConfig, MatcherConfig};
use crate::matching::corpus::{self, CorpusEntry, PairEntry};
use crate::matching::matcher::SimilarityMatcher;
use crate::matching::normalize::normalize;
use crate::matching::pairs::PairTable;
use std::path::Path;
use tracing::{debug, info, warn};

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// A deterministic pair.
    Exact,
    /// A corpus entry at or above the confidence floor.
    Similarity,
    /// Nothing matched; the default reply.
    Fallback,
}

/// A selected reply and how confident the selection was.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub reply: String,
    pub confidence: f64,
    pub source: MatchSource,
}

/// Anything that can answer an utterance. Must be total and deterministic.
pub trait Responder {
    fn get_response(&self, text: &str) -> Response;
}

/// Immutable pair table plus similarity matcher, built once at startup.
#[derive(Debug)]
pub struct MatchingContext {
    pairs: PairTable,
    matcher: SimilarityMatcher,
}

impl MatchingContext {
    pub fn new(pairs: PairTable, matcher: SimilarityMatcher) -> Self {
        Self { pairs, matcher }
    }

    /// Builds the context from configuration.
    ///
    /// A corpus file that cannot be loaded does not stop startup: it is
    /// reported and the session continues with the built-in pairs and the
    /// built-in corpus (when enabled), as if no file had been configured.
    pub fn from_config(matcher_cfg: &MatcherConfig, corpus_cfg: &CorpusConfig) -> Self {
        let builtin_entries = if corpus_cfg.include_builtin {
            corpus::builtin_entries()
        } else {
            Vec::new()
        };

        let (entries, file_pairs) = match corpus_cfg.path.as_deref() {
            None => (builtin_entries, Vec::new()),
            Some(path) => match corpus::load_corpus_file(Path::new(path)) {
                Ok(file) => {
                    let mut entries = builtin_entries;
                    entries.extend(file.entries);
                    (entries, file.pairs)
                }
                Err(e) => {
                    warn!("Corpus file unavailable, using built-in data only: {:#}", e);
                    (builtin_entries, Vec::new())
                }
            },
        };

        Self::assemble(entries, file_pairs, matcher_cfg)
    }

    fn assemble(
        entries: Vec<CorpusEntry>,
        file_pairs: Vec<PairEntry>,
        matcher_cfg: &MatcherConfig,
    ) -> Self {
        let pairs = PairTable::builtin_with(file_pairs.into_iter().map(|p| (p.trigger, p.reply)));
        let matcher = SimilarityMatcher::new(
            entries,
            matcher_cfg.scorer.build(),
            matcher_cfg.confidence_floor,
            matcher_cfg.default_reply.clone(),
        );
        info!(
            "Matching context ready: {} pairs, {} corpus entries, floor {:.2}",
            pairs.len(),
            matcher.len(),
            matcher_cfg.confidence_floor
        );
        Self::new(pairs, matcher)
    }
}

impl Responder for MatchingContext {
    fn get_response(&self, text: &str) -> Response {
        let key = normalize(text);
        if let Some(reply) = self.pairs.lookup_exact(&key) {
            debug!("Exact pair hit for '{}'", key);
            return Response {
                reply: reply.to_string(),
                confidence: 1.0,
                source: MatchSource::Exact,
            };
        }

        let best = self.matcher.lookup_best(text);
        debug!(
            "Similarity lookup for '{}': confidence {:.2}, matched {}",
            key, best.confidence, best.matched
        );
        Response {
            reply: best.reply,
            confidence: best.confidence,
            source: if best.matched {
                MatchSource::Similarity
            } else {
                MatchSource::Fallback
            },
        }
    }
}
