//! Per-language word catalogues.
//!
//! Each supported language ships a fixed, ordered list of unique words as a
//! static asset under `data/`, embedded at compile time. A list carries
//! three pieces of configuration next to its words: the unique prefix length
//! (the smallest number of leading characters that disambiguates every
//! word), the separator convention used when rendering and tokenizing
//! phrases, and the case/accent folding policy of the language.
//!
//! The catalogue is parsed once into process-wide state on first access and
//! is immutable afterwards, so it can be shared across concurrent encode and
//! decode calls without locking. A list that violates its own invariants
//! (too few words for the codec's 32-bit groups, a word shorter than the
//! prefix length, two words sharing a folded prefix) is a corrupt asset and
//! aborts the process at first load rather than mis-decoding seeds later.

use crate::error::Error;
use crate::normalize::{fold, truncate_chars};
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Word separator convention of a language's written mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Words are written separated by spaces.
    Spaced,
    /// Words are written back to back; tokenization is by catalogue match.
    None,
}

/// Case and accent folding policy applied before any comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folding {
    /// NFKD, lowercase, recompose.
    Lowercase,
    /// NFKD, lowercase, then drop combining marks.
    LowercaseStripAccents,
}

/// The fixed set of supported word-list languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Spanish,
    French,
    Italian,
    Dutch,
    Portuguese,
    German,
    Esperanto,
    Russian,
    Japanese,
    ChineseSimplified,
}

impl Language {
    /// All supported languages, in catalogue order.
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::Dutch,
        Language::Portuguese,
        Language::German,
        Language::Esperanto,
        Language::Russian,
        Language::Japanese,
        Language::ChineseSimplified,
    ];

    /// Canonical lowercase name, also the stem of the data asset.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Dutch => "dutch",
            Language::Portuguese => "portuguese",
            Language::German => "german",
            Language::Esperanto => "esperanto",
            Language::Russian => "russian",
            Language::Japanese => "japanese",
            Language::ChineseSimplified => "chinese_simplified",
        }
    }

    /// The embedded word catalogue asset, one word per line.
    fn asset(self) -> &'static str {
        match self {
            Language::English => include_str!("../data/english.txt"),
            Language::Spanish => include_str!("../data/spanish.txt"),
            Language::French => include_str!("../data/french.txt"),
            Language::Italian => include_str!("../data/italian.txt"),
            Language::Dutch => include_str!("../data/dutch.txt"),
            Language::Portuguese => include_str!("../data/portuguese.txt"),
            Language::German => include_str!("../data/german.txt"),
            Language::Esperanto => include_str!("../data/esperanto.txt"),
            Language::Russian => include_str!("../data/russian.txt"),
            Language::Japanese => include_str!("../data/japanese.txt"),
            Language::ChineseSimplified => include_str!("../data/chinese_simplified.txt"),
        }
    }

    /// Per-language configuration shipped alongside the asset:
    /// unique prefix length, separator convention, folding policy.
    fn config(self) -> (usize, Separator, Folding) {
        match self {
            Language::English => (3, Separator::Spaced, Folding::Lowercase),
            Language::Spanish => (4, Separator::Spaced, Folding::LowercaseStripAccents),
            Language::French => (4, Separator::Spaced, Folding::LowercaseStripAccents),
            Language::Italian => (4, Separator::Spaced, Folding::Lowercase),
            Language::Dutch => (4, Separator::Spaced, Folding::Lowercase),
            Language::Portuguese => (4, Separator::Spaced, Folding::LowercaseStripAccents),
            Language::German => (4, Separator::Spaced, Folding::LowercaseStripAccents),
            Language::Esperanto => (4, Separator::Spaced, Folding::LowercaseStripAccents),
            Language::Russian => (4, Separator::Spaced, Folding::Lowercase),
            Language::Japanese => (3, Separator::Spaced, Folding::Lowercase),
            Language::ChineseSimplified => (1, Separator::None, Folding::Lowercase),
        }
    }

    /// The loaded word list for this language.
    pub fn wordlist(self) -> &'static WordList {
        &catalogue()[self as usize]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.name() == wanted)
            .ok_or(Error::UnsupportedLanguage { name: s.to_string() })
    }
}

/// An immutable, ordered catalogue of one language's mnemonic words.
pub struct WordList {
    language: Language,
    words: Vec<String>,
    /// Folded full words, index-aligned with `words`.
    folded: Vec<String>,
    /// Folded unique-length prefixes, index-aligned with `words`.
    prefixes: Vec<String>,
    /// Folded prefix -> catalogue index.
    prefix_index: HashMap<String, u32>,
    /// Catalogue indices sorted by folded word, for longest-prefix matching.
    sorted_by_folded: Vec<u32>,
    max_word_chars: usize,
    prefix_len: usize,
    separator: Separator,
    folding: Folding,
}

impl WordList {
    fn load(language: Language) -> Self {
        let (prefix_len, separator, folding) = language.config();

        let mut words = Vec::with_capacity(1700);
        for line in language.asset().lines() {
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        assert!(
            !words.is_empty(),
            "{language} word list asset is empty"
        );

        // The codec maps 32-bit groups onto word triples, so the list must
        // satisfy n^3 >= 2^32 for the mapping to be a bijection.
        let n = words.len() as u64;
        assert!(
            n * n * n > u32::MAX as u64,
            "{language} word list has {n} words, too few for 32-bit groups"
        );

        let mut folded = Vec::with_capacity(words.len());
        let mut prefixes = Vec::with_capacity(words.len());
        let mut prefix_index = HashMap::with_capacity(words.len());
        let mut max_word_chars = 0;

        for (i, word) in words.iter().enumerate() {
            let folded_word = fold(word, folding);
            let chars = folded_word.chars().count();
            assert!(
                chars >= prefix_len,
                "{language} word list is corrupt: {word:?} is shorter than the unique prefix length {prefix_len}"
            );
            max_word_chars = max_word_chars.max(chars);

            let prefix = truncate_chars(&folded_word, prefix_len).to_string();
            let previous = prefix_index.insert(prefix.clone(), i as u32);
            assert!(
                previous.is_none(),
                "{language} word list is corrupt: words {:?} and {word:?} share the prefix {prefix:?}",
                words[previous.unwrap_or(0) as usize],
            );
            folded.push(folded_word);
            prefixes.push(prefix);
        }

        let mut sorted_by_folded: Vec<u32> = (0..words.len() as u32).collect();
        sorted_by_folded.sort_by(|&a, &b| folded[a as usize].cmp(&folded[b as usize]));

        debug!(
            "loaded {language} word list: {} words, unique prefix length {prefix_len}",
            words.len()
        );

        WordList {
            language,
            words,
            folded,
            prefixes,
            prefix_index,
            sorted_by_folded,
            max_word_chars,
            prefix_len,
            separator,
            folding,
        }
    }

    /// Resolve a token (possibly truncated to the unique prefix length) to
    /// its catalogue index. Folding is applied here, so callers may pass raw
    /// or already-canonicalized tokens interchangeably.
    pub fn lookup(&self, token: &str) -> Option<u32> {
        let folded = fold(token, self.folding);
        let key = truncate_chars(&folded, self.prefix_len);
        self.prefix_index.get(key).copied()
    }

    /// The word stored at a catalogue index.
    pub fn word_at(&self, index: u32) -> &str {
        &self.words[index as usize]
    }

    /// The folded unique-length prefix of the word at a catalogue index.
    /// This is the form the checksum is computed over.
    pub fn prefix_at(&self, index: u32) -> &str {
        &self.prefixes[index as usize]
    }

    /// Number of words in the catalogue.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn unique_prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn folding(&self) -> Folding {
        self.folding
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Find the longest catalogue word that is a leading substring of
    /// `text` (already folded). Returns the catalogue index and the matched
    /// byte length. Used by separator-less tokenization.
    pub fn match_longest_word(&self, text: &str) -> Option<(u32, usize)> {
        // byte boundary after each of the first `max_word_chars` characters
        let mut bounds = Vec::with_capacity(self.max_word_chars);
        for (pos, ch) in text.char_indices().take(self.max_word_chars) {
            bounds.push(pos + ch.len_utf8());
        }

        for &end in bounds.iter().rev() {
            let candidate = &text[..end];
            let hit = self
                .sorted_by_folded
                .binary_search_by(|&idx| self.folded[idx as usize].as_str().cmp(candidate));
            if let Ok(slot) = hit {
                return Some((self.sorted_by_folded[slot], end));
            }
        }
        None
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("language", &self.language)
            .field("words", &self.words.len())
            .field("prefix_len", &self.prefix_len)
            .finish()
    }
}

/// The process-wide catalogue, loaded once on first use.
fn catalogue() -> &'static [WordList] {
    static CATALOGUE: OnceLock<Vec<WordList>> = OnceLock::new();
    CATALOGUE.get_or_init(|| Language::ALL.into_iter().map(WordList::load).collect())
}
