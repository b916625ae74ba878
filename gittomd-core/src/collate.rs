//! Locale-aware ordering of relative paths.
//!
//! Paths are compared with the root-locale collator at tertiary strength:
//! accents and case only break ties left by the base letters, lowercase sorts
//! first, and punctuation sorts before digits before letters. Strings the
//! collator considers equal fall back to raw byte order so the result is a
//! total order.
//!
//! Should the collation data fail to load, a built-in weight table that
//! approximates the same order for ASCII takes over.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use tracing::warn;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(error = ?e, "Root collator unavailable. Using the built-in weight table.");
            None
        }
    }
}

/// Compares two paths the way a locale-aware collator does for this repo's ordering.
///
/// `"a.txt" < "A.txt" < "b.txt"`, and `"e.txt" < "é.txt" < "f.txt"`.
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    let collated = ROOT_COLLATOR
        .with(|collator| collator.as_ref().map(|c| c.compare(a, b)))
        .unwrap_or_else(|| fallback::compare(a, b));
    collated.then_with(|| a.cmp(b))
}

mod fallback {
    use std::cmp::Ordering;

    /// ASCII characters that are not alphanumeric, in root collation order.
    const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

    const WHITESPACE_BASE: u32 = 0;
    const PUNCTUATION_BASE: u32 = 0x100;
    const DIGIT_BASE: u32 = 0x200;
    const LETTER_BASE: u32 = 0x300;
    const OTHER_BASE: u32 = 0x400;

    fn primary_weight(c: char) -> u32 {
        if c.is_whitespace() {
            return WHITESPACE_BASE + c as u32 % 0x100;
        }
        if c.is_ascii_digit() {
            return DIGIT_BASE + (c as u32 - '0' as u32);
        }
        if c.is_ascii_alphabetic() {
            return LETTER_BASE + (c.to_ascii_lowercase() as u32 - 'a' as u32);
        }
        if let Some(pos) = PUNCTUATION_ORDER.find(c) {
            return PUNCTUATION_BASE + pos as u32;
        }
        let folded = c.to_lowercase().next().unwrap_or(c);
        OTHER_BASE + folded as u32
    }

    /// Lowercase before uppercase; caseless characters sit with lowercase.
    fn case_weight(c: char) -> u8 {
        if c.is_uppercase() {
            1
        } else {
            0
        }
    }

    pub(super) fn compare(a: &str, b: &str) -> Ordering {
        a.chars()
            .map(primary_weight)
            .cmp(b.chars().map(primary_weight))
            .then_with(|| a.chars().map(case_weight).cmp(b.chars().map(case_weight)))
    }

}
