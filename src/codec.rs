//! The bytes/words transform and the crate's public entry points.
//!
//! Seed bytes are consumed in 4-byte little-endian groups. Each group is a
//! 32-bit value mapped onto three catalogue indices by the legacy modular
//! scheme, a closed-form bijection on `[0, n^3)` where `n` is the word-list
//! size; every shipped list satisfies `n^3 >= 2^32`, so decode recovers the
//! group exactly or rejects the triple as non-canonical. No partial seed is
//! ever produced on failure.

use crate::checksum;
use crate::detect::{self, Candidate};
use crate::error::Error;
use crate::memory::SecureBytes;
use crate::normalize;
use crate::wordlist::{Language, Separator, WordList};
use log::debug;

/// Map one 32-bit group to its three catalogue indices.
fn encode_group(x: u32, n: u64) -> [u32; 3] {
    let x = u64::from(x);
    let w1 = x % n;
    let w2 = (x / n + w1) % n;
    let w3 = (x / n / n + w2) % n;
    [w1 as u32, w2 as u32, w3 as u32]
}

/// Recover the 32-bit group from a word triple, rejecting triples that do
/// not correspond to any canonical encoding.
fn decode_group(triple: [u32; 3], n: u64) -> Result<u32, Error> {
    let [w1, w2, w3] = triple.map(u64::from);
    let x = w1 + n * ((n - w1 + w2) % n) + n * n * ((n - w2 + w3) % n);
    if x > u64::from(u32::MAX) {
        return Err(Error::format("word triple exceeds the 32-bit group range"));
    }
    let x = x as u32;
    // self-check: the forward map must reproduce the exact triple
    if encode_group(x, n) != triple {
        return Err(Error::format("word triple is not a canonical encoding"));
    }
    Ok(x)
}

/// Encode seed bytes into catalogue indices, three per 4-byte group.
pub(crate) fn encode_indices(bytes: &[u8], list: &WordList) -> Result<Vec<u32>, Error> {
    if bytes.is_empty() || bytes.len() % 4 != 0 {
        return Err(Error::Length { actual: bytes.len() });
    }
    let n = list.len() as u64;
    let mut indices = Vec::with_capacity(bytes.len() / 4 * 3);
    for chunk in bytes.chunks_exact(4) {
        let x = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        indices.extend_from_slice(&encode_group(x, n));
    }
    Ok(indices)
}

/// Decode catalogue indices (no checksum word) back into seed bytes.
pub(crate) fn decode_indices(indices: &[u32], list: &WordList) -> Result<SecureBytes, Error> {
    if indices.is_empty() || indices.len() % 3 != 0 {
        return Err(Error::format(format!(
            "word count {} is not a multiple of 3",
            indices.len()
        )));
    }
    let n = list.len() as u64;
    let mut bytes = Vec::with_capacity(indices.len() / 3 * 4);
    for triple in indices.chunks_exact(3) {
        let x = decode_group([triple[0], triple[1], triple[2]], n)?;
        bytes.extend_from_slice(&x.to_le_bytes());
    }
    Ok(SecureBytes::new(bytes))
}

/// Join words per the list's separator convention.
fn render(indices: &[u32], list: &WordList) -> String {
    let words: Vec<&str> = indices.iter().map(|&i| list.word_at(i)).collect();
    match list.separator() {
        Separator::Spaced => words.join(" "),
        Separator::None => words.concat(),
    }
}

/// Encode seed bytes into a mnemonic with a trailing checksum word.
///
/// The byte length must be a positive multiple of 4; the output has
/// `3 * len / 4` body words plus the checksum word.
pub fn bytes_to_words(bytes: &[u8], language: Language) -> Result<String, Error> {
    let list = language.wordlist();
    let mut indices = encode_indices(bytes, list)?;
    indices.push(checksum::expected_index(&indices, list));
    debug!(
        "encoded {} bytes into {} {language} words (checksummed)",
        bytes.len(),
        indices.len()
    );
    Ok(render(&indices, list))
}

/// Encode seed bytes into a mnemonic without a checksum word, the form
/// used by legacy seeds that predate the checksum convention.
pub fn bytes_to_words_plain(bytes: &[u8], language: Language) -> Result<String, Error> {
    let list = language.wordlist();
    let indices = encode_indices(bytes, list)?;
    Ok(render(&indices, list))
}

/// Candidates whose word count matches, or the appropriate error.
fn sized_candidates(
    text: &str,
    expected_words: usize,
) -> Result<Vec<Candidate>, Error> {
    let lexical = detect::candidates(text);
    if lexical.is_empty() {
        return Err(Error::format("no supported word list resolves the input"));
    }
    let actual = lexical[0].indices.len();
    let sized: Vec<Candidate> = lexical
        .into_iter()
        .filter(|c| c.indices.len() == expected_words)
        .collect();
    if sized.is_empty() {
        return Err(Error::WordCount { expected: expected_words, actual });
    }
    Ok(sized)
}

/// Decode a mnemonic without a checksum word.
///
/// The language is auto-detected; `expected_len` is the seed byte length the
/// caller requires and must be a positive multiple of 4.
pub fn words_to_bytes(text: &str, expected_len: usize) -> Result<SecureBytes, Error> {
    if expected_len == 0 || expected_len % 4 != 0 {
        return Err(Error::Length { actual: expected_len });
    }
    let expected_words = expected_len / 4 * 3;
    let sized = sized_candidates(text, expected_words)?;
    if sized.len() > 1 {
        return Err(Error::AmbiguousLanguage {
            candidates: sized.iter().map(|c| c.language).collect(),
        });
    }
    let candidate = &sized[0];
    decode_indices(&candidate.indices, candidate.language.wordlist())
}

/// With a hinted language, name the first token its list cannot resolve.
fn first_unresolved(text: &str, language: Language) -> Option<String> {
    let list = language.wordlist();
    normalize::tokenize(text, list)
        .into_iter()
        .find(|token| list.lookup(token).is_none())
}

/// Decode a mnemonic whose last word is a checksum, returning the seed and
/// the detected language.
///
/// A hint narrows genuine lexical ambiguity; failing that, candidates whose
/// checksum does not validate are eliminated before ambiguity is reported.
pub fn words_to_bytes_checked(
    text: &str,
    expected_len: usize,
    hint: Option<Language>,
) -> Result<(SecureBytes, Language), Error> {
    if expected_len == 0 || expected_len % 4 != 0 {
        return Err(Error::Length { actual: expected_len });
    }
    let expected_words = expected_len / 4 * 3 + 1;
    let sized = match sized_candidates(text, expected_words) {
        Ok(sized) => sized,
        Err(err) => {
            // with a hint we can name the exact word that broke resolution
            if let (Error::Format { .. }, Some(wanted)) = (&err, hint) {
                if let Some(token) = first_unresolved(text, wanted) {
                    return Err(Error::WordNotFound { language: wanted, token });
                }
            }
            return Err(err);
        }
    };

    let chosen = if sized.len() == 1 {
        &sized[0]
    } else if let Some(hinted) = hint.and_then(|wanted| {
        sized.iter().find(|c| c.language == wanted)
    }) {
        hinted
    } else {
        // checksum elimination as a secondary filter over the candidates
        let surviving: Vec<&Candidate> = sized
            .iter()
            .filter(|c| checksum::validate(&c.indices, c.language.wordlist()))
            .collect();
        match surviving.len() {
            0 => return Err(Error::Checksum),
            1 => surviving[0],
            _ => {
                return Err(Error::AmbiguousLanguage {
                    candidates: surviving.iter().map(|c| c.language).collect(),
                });
            }
        }
    };

    let list = chosen.language.wordlist();
    if !checksum::validate(&chosen.indices, list) {
        return Err(Error::Checksum);
    }
    let body = &chosen.indices[..chosen.indices.len() - 1];
    let seed = decode_indices(body, list)?;
    debug!(
        "decoded {} {} words into {} bytes (checksum ok)",
        chosen.indices.len(),
        chosen.language,
        seed.len()
    );
    Ok((seed, chosen.language))
}
