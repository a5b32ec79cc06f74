//! Evasion-aware profanity detection and censoring for UTF-8 text.
//!
//! Matching runs over a normalized, repeat-collapsed form of the input so
//! that case tricks, leetspeak, Unicode look-alikes, invisible characters,
//! and stretched spellings are caught, while word-boundary and segment-shape
//! checks on the raw bytes keep clean words ("bass", "class", "Scunthorpe")
//! from being censored.

pub mod collapse;
pub mod dictionary;
pub mod filter;
pub mod matcher;
pub mod normalize;
pub mod tables;

// Re-export main types for convenient access
pub use filter::{CensorMode, ProfanityFilter};

use std::sync::OnceLock;

static DEFAULT_FILTER: OnceLock<ProfanityFilter> = OnceLock::new();

/// Process-wide filter over the embedded dictionary, built once on first use
/// and shared by all callers without locking afterwards.
pub fn default_filter() -> &'static ProfanityFilter {
    DEFAULT_FILTER.get_or_init(|| {
        ProfanityFilter::new(dictionary::DEFAULT_WORDS.iter())
            .expect("embedded dictionary is non-empty")
    })
}

/// True if the text contains profanity from the default dictionary.
pub fn is_profane(text: &str) -> bool {
    default_filter().is_profane(text)
}

/// Dictionary entries found in the text, deduplicated in first-seen order.
pub fn find_profanity(text: &str) -> Vec<&'static str> {
    default_filter().find_profanity(text)
}

/// Replace profanity with asterisks, keeping characters per `mode`.
pub fn censor(text: &str, mode: CensorMode) -> String {
    default_filter().censor(text, mode)
}

/// Censor with [`CensorMode::All`].
pub fn censor_default(text: &str) -> String {
    default_filter().censor_default(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_initializes_once() {
        let a = default_filter() as *const ProfanityFilter;
        let b = default_filter() as *const ProfanityFilter;
        assert_eq!(a, b);
    }

    #[test]
    fn test_free_functions_delegate() {
        assert!(is_profane("what the fuck"));
        assert_eq!(find_profanity("what the fuck"), vec!["fuck"]);
        assert_eq!(censor("what the fuck", CensorMode::All), "what the ****");
        assert_eq!(censor_default("what the fuck"), "what the ****");
    }

    #[test]
    fn test_censor_mode_values() {
        assert_eq!(CensorMode::All as u8, 0);
        assert_eq!(CensorMode::KeepFirst as u8, 1);
        assert_eq!(CensorMode::KeepFirstLast as u8, 2);
    }
}
