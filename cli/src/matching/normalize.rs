//! # Utterance Normalizer
//!
//! File: cli/src/matching/normalize.rs
//! Author: Christi Mahu
//!
//! Produces the key used for matching. The key is never shown to the user or
//! written to the session log; those always carry the original text.

/// Trims surrounding whitespace and lowercases `text`.
///
/// Total: an empty or whitespace-only string maps to the empty key.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Hello There \n"), "hello there");
        assert_eq!(normalize("BYE"), "bye");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace_and_punctuation() {
        assert_eq!(normalize("What  are you?"), "what  are you?");
    }

    #[test]
    fn test_normalize_empty_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize("ÇA VA?"), "ça va?");
    }
}
