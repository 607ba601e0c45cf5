//! Span-local emoji replacement.

use regex::Captures;

use crate::mapping::EmojiMap;
use crate::scanner::EMOJI_REGEX;

/// Replaces every emoji run in `text` with its mapped replacement.
///
/// Runs missing from `map` are kept as they are. Bytes outside matched runs
/// are copied through unchanged.
pub fn replace_emojis(text: &str, map: &EmojiMap) -> String {
    EMOJI_REGEX
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            map.get(run).unwrap_or(run).to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::build_emoji_map;
    use crate::pool::EmojiPool;
    use crate::scanner::distinct_ordered;

    fn fox_strawberry() -> EmojiPool {
        EmojiPool::new(vec!["🦊".into(), "🍓".into()]).unwrap()
    }

    #[test]
    fn replaces_scenario_sentence() {
        let text = "I love 🐶 and 🍎!";
        let map = build_emoji_map(&distinct_ordered(text), &fox_strawberry());
        assert_eq!(replace_emojis(text, &map), "I love 🦊 and 🍓!");
    }

    #[test]
    fn text_without_emoji_is_unchanged() {
        let map = build_emoji_map(&["🐶"], &fox_strawberry());
        let text = "  tabs\tand \"quotes\" stay\r\n";
        assert_eq!(replace_emojis(text, &map), text);
    }

    #[test]
    fn unmapped_runs_are_left_alone() {
        let map = build_emoji_map(&["🐶"], &fox_strawberry());
        assert_eq!(replace_emojis("🐶 🚀", &map), "🦊 🚀");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let text = "🐶, 🐶; 🐶";
        let map = build_emoji_map(&distinct_ordered(text), &fox_strawberry());
        assert_eq!(replace_emojis(text, &map), "🦊, 🦊; 🦊");
    }
}
