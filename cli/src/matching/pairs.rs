//! # Deterministic Pair Table
//!
//! File: cli/src/matching/pairs.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Exact-match rules that always win over the similarity fallback. Triggers
//! are stored normalized, so `"Hello"`, `"  hello "` and `"HELLO"` all hit the
//! same entry.
//!
//! The table is built once at startup and never changes afterwards. When the
//! same trigger is inserted twice the later reply replaces the earlier one;
//! this is how a corpus file curates the built-in greetings.
//!
use crate::matching::normalize::normalize;
use std::collections::HashMap;
use tracing::debug;

/// Built-in greeting and farewell rules.
const BUILTIN_PAIRS: &[(&str, &str)] = &[
    ("hello", "Hello. How can I help you today?"),
    ("hi", "Hello. How can I help you today?"),
    ("hey", "Hello. How can I help you today?"),
    ("bye", "Goodbye. Talk to you later."),
    ("goodbye", "Goodbye. Talk to you later."),
];

/// Immutable map from normalized trigger to fixed reply.
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    pairs: HashMap<String, String>,
}

impl PairTable {
    /// Builds a table from `(trigger, reply)` pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs<I, T, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, R)>,
        T: AsRef<str>,
        R: Into<String>,
    {
        let mut table = HashMap::new();
        for (trigger, reply) in pairs {
            let key = normalize(trigger.as_ref());
            if let Some(previous) = table.insert(key.clone(), reply.into()) {
                debug!("Pair trigger '{}' redefined (was: '{}')", key, previous);
            }
        }
        Self { pairs: table }
    }

    /// The built-in greeting/farewell table.
    #[cfg(test)]
    pub fn builtin() -> Self {
        Self::builtin_with(std::iter::empty())
    }

    /// The built-in table followed by `extra`, which may redefine built-in triggers.
    pub fn builtin_with<I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let builtin = BUILTIN_PAIRS
            .iter()
            .map(|(trigger, reply)| ((*trigger).to_string(), (*reply).to_string()));
        Self::from_pairs(builtin.chain(extra))
    }

    /// Looks up an already-normalized key.
    pub fn lookup_exact(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
