//! Checksum word derivation and validation.
//!
//! The trailing word of a checksummed mnemonic is not independent data: it
//! repeats one of the preceding words, chosen by hashing their folded
//! unique-length prefixes with CRC32 and reducing modulo the word count.
//! CRC32 is an anti-transcription-error check, not a cryptographic
//! integrity guarantee; any single-character typo in a body word already
//! fails word lookup before the checksum is ever consulted.

use crate::wordlist::WordList;

/// Position (within the body words) of the word that serves as checksum.
pub fn checksum_index(indices: &[u32], list: &WordList) -> usize {
    debug_assert!(!indices.is_empty());
    let mut hasher = crc32fast::Hasher::new();
    for &index in indices {
        hasher.update(list.prefix_at(index).as_bytes());
    }
    hasher.finalize() as usize % indices.len()
}

/// The catalogue index of the checksum word for a body of words.
pub fn expected_index(indices: &[u32], list: &WordList) -> u32 {
    indices[checksum_index(indices, list)]
}

/// Validate a full sequence whose last element is the claimed checksum word.
/// Sequences too short to carry a checksum fail validation.
pub fn validate(indices: &[u32], list: &WordList) -> bool {
    let Some((&claimed, body)) = indices.split_last() else {
        return false;
    };
    if body.is_empty() {
        return false;
    }
    expected_index(body, list) == claimed
}
