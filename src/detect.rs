//! Language auto-detection for unannotated mnemonic text.
//!
//! Detection is purely lexical: a language qualifies as a candidate only if
//! every token of the canonicalized input resolves against its word list.
//! Ties are broken by the caller's hint when it is among the candidates;
//! anything beyond that (checksum elimination) is a secondary filter applied
//! by the codec layer over the candidate set, not baked in here.

use crate::normalize::tokenize;
use crate::wordlist::Language;
use log::trace;

/// One language whose word list resolves every token of the input.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub language: Language,
    /// Catalogue indices of the resolved tokens, in input order.
    pub indices: Vec<u32>,
}

/// Outcome of lexical detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Match(Language),
    Ambiguous(Vec<Language>),
    NoMatch,
}

/// All languages whose word list resolves every token of `raw`.
pub fn candidates(raw: &str) -> Vec<Candidate> {
    let mut found = Vec::new();
    for language in Language::ALL {
        let list = language.wordlist();
        let tokens = tokenize(raw, list);
        if tokens.is_empty() {
            continue;
        }
        let indices: Option<Vec<u32>> = tokens.iter().map(|t| list.lookup(t)).collect();
        if let Some(indices) = indices {
            trace!("input resolves fully in {language} ({} words)", indices.len());
            found.push(Candidate { language, indices });
        }
    }
    found
}

/// Detect the language of `raw`, applying the hint as a tie-break.
pub fn detect(raw: &str, hint: Option<Language>) -> Detection {
    let found = candidates(raw);
    match found.len() {
        0 => Detection::NoMatch,
        1 => Detection::Match(found[0].language),
        _ => {
            let languages: Vec<Language> = found.iter().map(|c| c.language).collect();
            match hint {
                Some(wanted) if languages.contains(&wanted) => Detection::Match(wanted),
                _ => Detection::Ambiguous(languages),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase_of(language: Language, indices: &[u32]) -> String {
        let list = language.wordlist();
        let words: Vec<&str> = indices.iter().map(|&i| list.word_at(i)).collect();
        match list.separator() {
            crate::wordlist::Separator::Spaced => words.join(" "),
            crate::wordlist::Separator::None => words.concat(),
        }
    }

    #[test]
    fn detects_each_language_unambiguously() {
        let indices = [0u32, 17, 512, 1625, 3, 900];
        for language in Language::ALL {
            let phrase = phrase_of(language, &indices);
            assert_eq!(
                detect(&phrase, None),
                Detection::Match(language),
                "failed for {language}: {phrase}"
            );
        }
    }

    #[test]
    fn reports_no_match_for_garbage() {
        assert_eq!(detect("869 273 laskdjhq1", None), Detection::NoMatch);
        assert_eq!(detect("   ", None), Detection::NoMatch);
        assert_eq!(detect("", None), Detection::NoMatch);
    }

    #[test]
    fn hint_does_not_override_a_single_candidate() {
        let phrase = phrase_of(Language::French, &[1, 2, 3]);
        assert_eq!(
            detect(&phrase, Some(Language::German)),
            Detection::Match(Language::French)
        );
    }

    #[test]
    fn mixed_language_input_matches_nothing() {
        let english = Language::English.wordlist().word_at(10);
        let spanish = Language::Spanish.wordlist().word_at(10);
        let phrase = format!("{english} {spanish}");
        assert_eq!(detect(&phrase, None), Detection::NoMatch);
    }
}
