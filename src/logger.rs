//! Logging setup for the codec.
//!
//! The library logs through the `log` facade only; `env_logger` is wired up
//! here for binaries and tests that want output. Seed bytes and mnemonic
//! words are never logged at any level, only counts and language names.

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logger with the specified minimum level.
///
/// Safe to call more than once; only the first call takes effect.
///
/// # Examples
///
/// ```
/// use seedwords::logger;
/// use log::LevelFilter;
///
/// logger::init_logger(LevelFilter::Debug).unwrap();
/// log::debug!("codec ready");
/// ```
pub fn init_logger(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let mut result = Ok(());

    INIT.call_once(|| {
        result = match env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp_millis()
            .try_init()
        {
            Ok(_) => Ok(()),
            Err(e) => Err(Box::new(e) as Box<dyn std::error::Error>),
        };
    });

    result
}
