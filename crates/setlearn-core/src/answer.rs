//! Quiz answer normalization.
//!
//! A typed answer and the canonical answer are compared in a canonical form
//! that ignores element order, letter case, braces, and whether elements are
//! separated by commas or spaces.

use crate::notation::ARABIC_COMMA;

/// Canonicalize a free-text answer.
///
/// Braces are removed, commas (including the Arabic comma) become spaces, the
/// remaining whitespace-separated tokens are lowercased, sorted, and joined
/// with `,`. Repeated tokens are kept, so `{4, 4}` and `{4}` differ.
pub fn normalize_answer(text: &str) -> String {
    let spaced: String = text
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .map(|c| if c == ',' || c == ARABIC_COMMA { ' ' } else { c })
        .collect();

    let mut tokens: Vec<String> = spaced.split_whitespace().map(str::to_lowercase).collect();
    tokens.sort();
    tokens.join(",")
}

/// Returns `true` if both answers normalize to the same string.
pub fn answers_match(typed: &str, canonical: &str) -> bool {
    normalize_answer(typed) == normalize_answer(canonical)
}
