//! Seedwords - a mnemonic seed codec.
//!
//! This library converts fixed-length binary key material into sequences of
//! natural-language words and back, across multiple language word lists,
//! with an embedded self-checking checksum word and tolerant handling of
//! human-entered text (padding, extra spaces, case variation, partial-word
//! prefixes).
//!
//! The primary entry points are [`bytes_to_words`], [`words_to_bytes`] and
//! [`words_to_bytes_checked`]; the supporting pieces (word lists, detection,
//! checksum, normalization) are public for callers that need finer control,
//! such as wallet UIs offering word completion.
//!
//! ```
//! use seedwords::{bytes_to_words, words_to_bytes_checked, Language};
//!
//! let seed = [0u8; 32];
//! let phrase = bytes_to_words(&seed, Language::English).unwrap();
//! let (recovered, detected) = words_to_bytes_checked(&phrase, 32, None).unwrap();
//! assert_eq!(recovered.as_bytes(), &seed);
//! assert_eq!(detected, Language::English);
//! ```

// Re-export modules
pub mod checksum;
pub mod codec;
pub mod detect;
pub mod error;
pub mod logger;
pub mod memory;
pub mod normalize;
pub mod wordlist;

// Public re-exports
pub use codec::{bytes_to_words, bytes_to_words_plain, words_to_bytes, words_to_bytes_checked};
pub use detect::{Candidate, Detection, detect};
pub use error::Error;
pub use memory::{SecureBytes, SecureString};
pub use wordlist::{Folding, Language, Separator, WordList};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library with default settings
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logger(log::LevelFilter::Info)?;
    log::info!("seedwords v{} initialized", VERSION);
    Ok(())
}

/// Initialize the library with custom log level
pub fn init_with_log_level(level: log::LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logger(level)?;
    log::info!("seedwords v{} initialized with log level {:?}", VERSION, level);
    Ok(())
}
