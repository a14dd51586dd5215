//! # Similarity Scoring
//!
//! File: cli/src/matching/similarity.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Scorers compare two normalized utterances and return a confidence in
//! `[0, 1]`, where `1` means identical. The matcher only depends on the
//! `SimilarityScorer` trait, so any function honoring that range can be
//! plugged in.
//!
//! Two scorers ship with the crate:
//! - `Levenshtein`: edit distance over characters, scaled by the longer string.
//!   Good at typos ("helo wrld").
//! - `TokenOverlap`: Jaccard index of the word sets. Ignores word order and
//!   edge punctuation ("you are what" scores 1.0 against "what are you?").
//!
//! Both score `0` when either side is empty.
//!
use clap::ValueEnum;
use serde::Deserialize;
use std::collections::HashSet;

/// A scoring function over two normalized strings.
pub trait SimilarityScorer: std::fmt::Debug {
    /// Returns a score in `[0, 1]`.
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Selects a scorer from configuration or the command line.
#[derive(Deserialize, ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScorerKind {
    #[default]
    Levenshtein,
    TokenOverlap,
}

impl ScorerKind {
    pub fn build(self) -> Box<dyn SimilarityScorer> {
        match self {
            ScorerKind::Levenshtein => Box::new(Levenshtein),
            ScorerKind::TokenOverlap => Box::new(TokenOverlap),
        }
    }
}

/// `1 - distance / max(len(a), len(b))`, counted in Unicode scalar values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Levenshtein;

impl SimilarityScorer for Levenshtein {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let longest = a.len().max(b.len());
        1.0 - edit_distance(&a, &b) as f64 / longest as f64
    }
}

/// Classic two-row dynamic programming edit distance.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            let insertion = current[j] + 1;
            let deletion = previous[j + 1] + 1;
            current[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Jaccard index of the whitespace-separated word sets.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenOverlap;

impl SimilarityScorer for TokenOverlap {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a = tokens(a);
        let b = tokens(b);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let shared = a.intersection(&b).count();
        let total = a.union(&b).count();
        shared as f64 / total as f64
    }
}

fn tokens(text: &str) -> HashSet<&str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .collect()
}
