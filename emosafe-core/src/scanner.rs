//! Emoji detection over raw text.
//!
//! Detection is a single character-class regex over a fixed table of code
//! point ranges. A match is a maximal run of in-range characters, so two emoji
//! written back to back (or an emoji followed by a variation selector) come out
//! as one run. Runs are never split further.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Code point ranges treated as emoji.
pub const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F300}', '\u{1F5FF}'), // symbols & pictographs
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F680}', '\u{1F6FF}'), // transport & map
    ('\u{1F700}', '\u{1F77F}'), // alchemical symbols
    ('\u{1F780}', '\u{1F7FF}'), // geometric shapes extended
    ('\u{1F800}', '\u{1F8FF}'), // supplemental arrows-c
    ('\u{1F900}', '\u{1F9FF}'), // supplemental symbols & pictographs
    ('\u{1FA00}', '\u{1FA6F}'), // chess symbols
    ('\u{1FA70}', '\u{1FAFF}'), // symbols & pictographs extended-a
    ('\u{2702}', '\u{27B0}'),   // dingbats
    ('\u{24C2}', '\u{1F251}'),  // enclosed characters
];

fn build_pattern() -> String {
    let mut pattern = String::from("[");
    for (start, end) in EMOJI_RANGES {
        pattern.push_str(&format!("\\x{{{:X}}}-\\x{{{:X}}}", *start as u32, *end as u32));
    }
    pattern.push_str("]+");
    pattern
}

/// Compiled run matcher shared by the scanner and the substitution step.
pub static EMOJI_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = build_pattern();
    debug!("Compiling emoji pattern: {}", pattern);
    Regex::new(&pattern).expect("emoji range table must compile")
});

/// Every emoji run in `text`, in order of appearance, duplicates included.
pub fn find_all(text: &str) -> Vec<&str> {
    EMOJI_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Distinct emoji runs in order of first appearance.
pub fn distinct_ordered(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for run in find_all(text) {
        if seen.insert(run) {
            ordered.push(run.to_string());
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_runs_in_order_with_duplicates() {
        let runs = find_all("a 🐶 b 🍎 c 🐶");
        assert_eq!(runs, vec!["🐶", "🍎", "🐶"]);
    }

    #[test]
    fn adjacent_emoji_form_one_run() {
        assert_eq!(find_all("x🐶🐶y"), vec!["🐶🐶"]);
    }

    #[test]
    fn distinct_keeps_first_occurrence_order() {
        let distinct = distinct_ordered("🍎 🐶 🍎 🚗 🐶");
        assert_eq!(distinct, vec!["🍎", "🐶", "🚗"]);
    }

    #[test]
    fn plain_ascii_has_no_matches() {
        assert!(find_all("just { \"plain\": [1, 2] } text").is_empty());
        assert!(distinct_ordered("no emoji here\n").is_empty());
    }

    #[test]
    fn dingbats_and_enclosed_are_detected() {
        assert_eq!(find_all("cut ✂ here"), vec!["✂"]);
        assert_eq!(find_all("metro Ⓜ line"), vec!["Ⓜ"]);
    }

    #[test]
    fn variation_selector_stays_in_run() {
        // U+FE0F sits inside the enclosed-characters range.
        assert_eq!(find_all("print 🖨️ now"), vec!["🖨️"]);
    }
}
