//! Per-file emoji map construction.
//!
//! The pool is treated as a rotating queue: each newly seen original takes the
//! front entry, which is then pushed to the back. The queue always holds the
//! same set of entries, so replacements are handed out round-robin starting at
//! the front of the pool. Once a file holds more distinct emoji than the pool
//! has entries, replacements start to repeat.

use log::{debug, warn};
use std::collections::{HashMap, VecDeque};

use crate::pool::EmojiPool;

/// Original → replacement table for a single file.
///
/// Iteration follows insertion order, i.e. the order in which originals were
/// first seen in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl EmojiMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `original → replacement`. Returns `false` and leaves the map
    /// untouched if `original` is already mapped.
    pub fn insert(&mut self, original: impl Into<String>, replacement: impl Into<String>) -> bool {
        let original = original.into();
        if self.index.contains_key(&original) {
            return false;
        }
        self.index.insert(original.clone(), self.entries.len());
        self.entries.push((original, replacement.into()));
        true
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.index
            .get(original)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, original: &str) -> bool {
        self.index.contains_key(original)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(original, replacement)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(original, replacement)| (original.as_str(), replacement.as_str()))
    }
}

/// Assigns each distinct original a replacement drawn round-robin from `pool`.
pub fn build_emoji_map<S: AsRef<str>>(originals: &[S], pool: &EmojiPool) -> EmojiMap {
    let mut queue: VecDeque<&str> = pool.iter().collect();
    let mut map = EmojiMap::new();

    for original in originals {
        let original = original.as_ref();
        if map.contains(original) {
            continue;
        }
        let Some(replacement) = queue.pop_front() else {
            break;
        };
        map.insert(original, replacement);
        queue.push_back(replacement);
    }

    if map.len() > pool.len() {
        warn!(
            "{} distinct emoji exceed the pool size of {}; replacements will repeat.",
            map.len(),
            pool.len()
        );
    }
    debug!("Built emoji map with {} entries.", map.len());
    map
}
