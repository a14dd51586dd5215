//! # Similarity Matcher
//!
//! File: cli/src/matching/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fallback used when no exact pair matches. Every corpus utterance is
//! scored against the input and the best one wins:
//! - Ties go to the entry that appears first in the corpus.
//! - A best score below the confidence floor yields the default reply with
//!   confidence `0`.
//! - Empty input or an empty corpus also yields the default reply.
//!
//! `lookup_best` never fails.
//!
use crate::matching::corpus::CorpusEntry;
use crate::matching::normalize::normalize;
use crate::matching::similarity::SimilarityScorer;
use tracing::trace;

/// Result of a similarity lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    pub reply: String,
    /// Score of the chosen entry, or `0.0` when the default reply was used.
    pub confidence: f64,
    /// `false` when the default reply was returned.
    pub matched: bool,
}

#[derive(Debug)]
struct IndexedEntry {
    key: String,
    response: String,
}

/// Scores input against a fixed, pre-normalized corpus.
#[derive(Debug)]
pub struct SimilarityMatcher {
    entries: Vec<IndexedEntry>,
    scorer: Box<dyn SimilarityScorer>,
    confidence_floor: f64,
    default_reply: String,
}

impl SimilarityMatcher {
    pub fn new(
        corpus: Vec<CorpusEntry>,
        scorer: Box<dyn SimilarityScorer>,
        confidence_floor: f64,
        default_reply: impl Into<String>,
    ) -> Self {
        let entries = corpus
            .into_iter()
            .map(|entry| IndexedEntry {
                key: normalize(&entry.utterance),
                response: entry.response,
            })
            .collect();
        Self {
            entries,
            scorer,
            confidence_floor,
            default_reply: default_reply.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the best corpus reply for `text`, or the default reply.
    pub fn lookup_best(&self, text: &str) -> BestMatch {
        let key = normalize(text);
        if key.is_empty() {
            return self.fallback();
        }

        let mut best: Option<(&IndexedEntry, f64)> = None;
        for entry in &self.entries {
            let score = self.scorer.score(&key, &entry.key);
            trace!("score {:.3} for '{}'", score, entry.key);
            // Strictly greater keeps the earliest entry on ties.
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((entry, score));
            }
        }

        match best {
            Some((entry, score)) if score >= self.confidence_floor && score > 0.0 => BestMatch {
                reply: entry.response.clone(),
                confidence: score,
                matched: true,
            },
            _ => self.fallback(),
        }
    }

    fn fallback(&self) -> BestMatch {
        BestMatch {
            reply: self.default_reply.clone(),
            confidence: 0.0,
            matched: false,
        }
    }
}
