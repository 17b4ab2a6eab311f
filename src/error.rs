//! Error taxonomy for the seed codec.
//!
//! Malformed user input is an expected, recoverable condition: every decode
//! failure is reported as an ordinary `Err` value and never leaves a
//! partially-filled seed buffer behind. Catalogue self-consistency
//! violations, by contrast, indicate a broken static asset and abort at
//! first load (see [`crate::wordlist`]).

use crate::wordlist::Language;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a mnemonic.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested or derived byte length is not a positive multiple of 4.
    #[error("invalid seed length: expected a positive multiple of 4 bytes, got {actual}")]
    Length { actual: usize },

    /// The number of words is inconsistent with the requested seed length.
    #[error("invalid word count: expected {expected}, got {actual}")]
    WordCount { expected: usize, actual: usize },

    /// A token does not resolve against the selected word list.
    #[error("word not found in {language} word list: {token}")]
    WordNotFound { language: Language, token: String },

    /// Input does not fit any supported word list, or a word triple does not
    /// reconstruct to a canonical 32-bit group.
    #[error("malformed mnemonic: {reason}")]
    Format { reason: String },

    /// Trailing checksum word does not match recomputation.
    #[error("checksum word does not match the preceding words")]
    Checksum,

    /// More than one word list resolves every token and neither the caller's
    /// hint nor checksum validation disambiguates.
    #[error("ambiguous language: input is valid in {candidates:?}")]
    AmbiguousLanguage { candidates: Vec<Language> },

    /// Caller supplied a language name outside the known catalogue.
    #[error("unsupported language: {name}")]
    UnsupportedLanguage { name: String },
}

impl Error {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Error::Format { reason: reason.into() }
    }
}
