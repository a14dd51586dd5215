//! # Response Matching
//!
//! File: cli/src/matching/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything that turns an utterance into a reply. Nothing in here does I/O
//! after startup; every lookup is a pure function of the input and the
//! context built at launch.
//!
//! ## Architecture
//!
//! Leaves first:
//! - `normalize`: trims and lowercases input into a matching key
//! - `pairs`: deterministic exact-match table (highest priority)
//! - `similarity`: pluggable scorers (`Levenshtein`, `TokenOverlap`)
//! - `corpus`: built-in training set and the optional corpus file
//! - `matcher`: best-match search over the corpus with a confidence floor
//! - `context`: `MatchingContext`, which composes the table and the matcher
//!   behind the `Responder` trait
//!
//! ```rust
//! use crate::matching::{MatchingContext, Responder};
//!
//! let ctx = MatchingContext::from_config(&cfg.matcher, &cfg.corpus);
//! let response = ctx.get_response("Hello");
//! assert_eq!(response.reply, "Hello. How can I help you today?");
//! ```
//!
pub mod context;
pub mod corpus;
pub mod matcher;
pub mod normalize;
pub mod pairs;
pub mod similarity;

pub use context::{MatchingContext, Responder};
