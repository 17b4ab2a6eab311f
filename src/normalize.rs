//! Input canonicalization for human-entered mnemonic text.
//!
//! Raw text arrives with whatever padding, casing and Unicode representation
//! the user's keyboard produced. This module reduces it to the canonical
//! token sequence a word list can be matched against: whitespace trimmed and
//! collapsed, NFKD-normalized, case-folded, and (for lists that declare it)
//! accent-stripped. Lists without a word separator are tokenized by greedy
//! longest-prefix matching against the catalogue instead of by whitespace.
//!
//! Canonicalization never fails; an unresolvable fragment is passed through
//! as-is and rejected later by word lookup.

use crate::wordlist::{Folding, Separator, WordList};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Apply a word list's folding policy to a single token.
///
/// The same function is used on catalogue words at load time and on user
/// tokens at lookup time, so the two sides always compare in the same form.
pub fn fold(input: &str, folding: Folding) -> String {
    let lowered = input.nfkd().collect::<String>().to_lowercase();
    match folding {
        // Recompose so precomposed and decomposed input count the same
        // number of characters for prefix truncation.
        Folding::Lowercase => lowered.chars().nfc().collect(),
        Folding::LowercaseStripAccents => lowered
            .chars()
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect(),
    }
}

/// Truncate a folded token to at most `len` characters.
pub fn truncate_chars(token: &str, len: usize) -> &str {
    match token.char_indices().nth(len) {
        Some((byte_pos, _)) => &token[..byte_pos],
        None => token,
    }
}

/// Canonicalize raw text into the token sequence for one word list.
pub fn tokenize(raw: &str, list: &WordList) -> Vec<String> {
    match list.separator() {
        Separator::Spaced => raw
            .split_whitespace()
            .map(|t| fold(t, list.folding()))
            .filter(|t| !t.is_empty())
            .collect(),
        Separator::None => tokenize_unspaced(raw, list),
    }
}

/// Greedy longest-prefix tokenization for lists written without separators.
///
/// Whitespace the user may still have typed is discarded first, then the
/// text is consumed left to right, preferring the longest catalogue word at
/// each position. A position where no catalogue word matches yields a
/// single-character token that cannot resolve, deferring the failure to the
/// lookup stage.
fn tokenize_unspaced(raw: &str, list: &WordList) -> Vec<String> {
    let compact: String = raw.split_whitespace().collect();
    let folded = fold(&compact, list.folding());

    let mut tokens = Vec::new();
    let mut rest = folded.as_str();
    while !rest.is_empty() {
        match list.match_longest_word(rest) {
            Some((_, matched_len)) => {
                tokens.push(rest[..matched_len].to_string());
                rest = &rest[matched_len..];
            }
            None => {
                let ch_len = rest.chars().next().map_or(0, char::len_utf8);
                tokens.push(rest[..ch_len].to_string());
                rest = &rest[ch_len..];
            }
        }
    }
    tokens
}
