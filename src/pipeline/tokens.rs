//! Token normalisation for business names, addresses, and domain labels.
//!
//! Turns free text into comparable token sets: alphanumeric-only,
//! lowercased, with sub-2-character tokens treated as noise.

use std::collections::HashSet;

/// Normalise one token: strip every non-alphanumeric character and
/// lowercase the rest.
///
/// Returns the empty string when the cleaned result is shorter than two
/// characters — single characters would substring-match almost any domain
/// label and must not participate in matching.
pub fn clean_token(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if cleaned.chars().count() < 2 {
        String::new()
    } else {
        cleaned
    }
}

/// Split `text` on whitespace and clean each piece, dropping tokens that
/// cleaned down to nothing.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(clean_token)
        .filter(|token| !token.is_empty())
        .collect()
}
