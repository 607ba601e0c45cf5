//! Replacement pool management for `emosafe-core`.
//!
//! The pool is the ordered list of emoji that every original emoji gets
//! remapped onto. The built-in pool is made of five themed groups of twenty
//! emoji each, concatenated in declaration order. Custom pools can be loaded
//! from a YAML file with the same grouped shape.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::EmosafeError;

pub const ANIMALS_NATURE: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯",
    "🦁", "🐮", "🐷", "🐸", "🐵", "🦄", "🐔", "🐧", "🐦", "🐤",
];

pub const FOOD_DRINK: &[&str] = &[
    "🍏", "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🫐",
    "🍈", "🍒", "🍑", "🥭", "🍍", "🥥", "🥝", "🍅", "🍆", "🥑",
];

pub const ACTIVITY: &[&str] = &[
    "⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏉", "🎱", "🏓", "🏸",
    "🥅", "🏒", "🏑", "🏏", "⛳", "🏹", "🎣", "🤿", "🥊", "🥋",
];

pub const OBJECTS: &[&str] = &[
    "⌚", "📱", "💻", "🖨️", "🕹️", "🎮", "📷", "📸", "📹", "🎥",
    "📺", "📻", "🎙️", "🎚️", "🎛️", "☎️", "📞", "📟", "📠", "🔋",
];

pub const PLACES: &[&str] = &[
    "🚗", "🚕", "🚙", "🚌", "🚎", "🏎️", "🚓", "🚑", "🚒", "🚐",
    "🛻", "🚚", "🚛", "🚜", "🏍️", "🛵", "🚲", "🛴", "🚨", "🚔",
];

/// The built-in groups, in pool order.
pub const DEFAULT_GROUPS: &[(&str, &[&str])] = &[
    ("animals_nature", ANIMALS_NATURE),
    ("food_drink", FOOD_DRINK),
    ("activity", ACTIVITY),
    ("objects", OBJECTS),
    ("places", PLACES),
];

/// A named, themed slice of the pool as it appears in a pool file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PoolGroup {
    pub name: String,
    pub emojis: Vec<String>,
}

/// On-disk representation of a custom pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PoolConfig {
    #[serde(default)]
    pub groups: Vec<PoolGroup>,
}

impl PoolConfig {
    /// Loads a grouped pool definition from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, EmosafeError> {
        let path = path.as_ref();
        info!("Loading custom emoji pool from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(|e| EmosafeError::PoolConfig(path.display().to_string(), e.to_string()))?;
        let config: PoolConfig = serde_yml::from_str(&text)
            .map_err(|e| EmosafeError::PoolConfig(path.display().to_string(), e.to_string()))?;
        debug!("Pool file {} declares {} group(s).", path.display(), config.groups.len());
        Ok(config)
    }

    /// The built-in grouping as a `PoolConfig`.
    pub fn builtin() -> Self {
        PoolConfig {
            groups: DEFAULT_GROUPS
                .iter()
                .map(|(name, emojis)| PoolGroup {
                    name: (*name).to_string(),
                    emojis: emojis.iter().map(|e| (*e).to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Flattens the groups into a validated [`EmojiPool`].
    pub fn into_pool(self) -> Result<EmojiPool, EmosafeError> {
        EmojiPool::new(self.groups.into_iter().flat_map(|g| g.emojis).collect())
    }
}

/// Ordered, duplicate-free list of replacement emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPool {
    emojis: Vec<String>,
}

impl EmojiPool {
    /// Builds a pool from an ordered list, rejecting empty pools, empty
    /// entries and duplicates. All violations are reported together.
    pub fn new(emojis: Vec<String>) -> Result<Self, EmosafeError> {
        let mut errors = Vec::new();
        if emojis.is_empty() {
            errors.push("pool contains no emoji".to_string());
        }
        let mut seen = HashSet::new();
        for (idx, emoji) in emojis.iter().enumerate() {
            if emoji.is_empty() {
                errors.push(format!("entry {} is empty", idx));
            } else if !seen.insert(emoji.as_str()) {
                errors.push(format!("duplicate entry '{}' at position {}", emoji, idx));
            }
        }

        if !errors.is_empty() {
            return Err(EmosafeError::InvalidPool(errors.join("; ")));
        }
        Ok(Self { emojis })
    }

    /// Loads and validates a pool file in one step.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, EmosafeError> {
        let pool = PoolConfig::load_from_file(path)?.into_pool()?;
        info!("Custom pool holds {} emoji.", pool.len());
        Ok(pool)
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.emojis
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.emojis.iter().map(String::as_str)
    }
}

impl Default for EmojiPool {
    /// The built-in 100-entry pool.
    fn default() -> Self {
        Self {
            emojis: DEFAULT_GROUPS
                .iter()
                .flat_map(|(_, group)| group.iter().map(|e| (*e).to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_has_100_unique_entries() {
        let pool = EmojiPool::default();
        assert_eq!(pool.len(), 100);
        let unique: HashSet<&str> = pool.iter().collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn default_pool_keeps_group_order() {
        let pool = EmojiPool::default();
        assert_eq!(pool.as_slice()[0], "🐶");
        assert_eq!(pool.as_slice()[20], "🍏");
        assert_eq!(pool.as_slice()[99], "🚔");
    }

    #[test]
    fn builtin_config_matches_default_pool() {
        let pool = PoolConfig::builtin().into_pool().unwrap();
        assert_eq!(pool, EmojiPool::default());
    }

    #[test]
    fn rejects_duplicates_and_empty_entries() {
        let err = EmojiPool::new(vec!["🦊".into(), "".into(), "🦊".into()]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("entry 1 is empty"));
        assert!(msg.contains("duplicate entry '🦊' at position 2"));
    }

    #[test]
    fn rejects_empty_pool() {
        assert!(matches!(EmojiPool::new(Vec::new()), Err(EmosafeError::InvalidPool(_))));
    }
}
