//! Module for managing the application's console theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of the per-file notices, mapping tables and run
//! summary. It supports 16-color ANSI named colors for foreground styling and
//! can load themes from YAML files.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for headers such as the summary title.
    Header,
    /// Style for successful conversion messages.
    Success,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages (skips, unsupported files).
    Warn,
    /// Style for error messages.
    Error,
    /// Style for the original emoji column of a mapping table.
    MappingOriginal,
    /// Style for the replacement emoji column of a mapping table.
    MappingReplacement,
    /// Style for counts in the run summary.
    SummaryCount,
}

const ALL_ENTRIES: [ThemeEntry; 8] = [
    ThemeEntry::Header,
    ThemeEntry::Success,
    ThemeEntry::Info,
    ThemeEntry::Warn,
    ThemeEntry::Error,
    ThemeEntry::MappingOriginal,
    ThemeEntry::MappingReplacement,
    ThemeEntry::SummaryCount,
];

/// Color names accepted in theme files, matched case-insensitively.
const NAMED_COLORS: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

fn lookup_color(name: &str) -> Option<AnsiColors> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// A named ANSI color as written in a theme file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(String),
}

/// A color name that is not one of the 16 ANSI names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeColorError(pub String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
        write!(f, "unknown color '{}', expected one of: {}", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lookup_color(s) {
            Some(_) => Ok(ThemeColor::Named(s.to_ascii_lowercase())),
            None => Err(ParseThemeColorError(s.to_string())),
        }
    }
}

impl ThemeColor {
    /// The `owo_colors` color to render with. Names are checked when a theme
    /// is loaded, so the white fallback only covers hand-built values.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => lookup_color(name).unwrap_or(AnsiColors::White),
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    fn named(color: &str) -> Self {
        ThemeStyle { fg: Some(ThemeColor::Named(color.into())) }
    }

    /// Loads a theme from a YAML file; entries it leaves out take their
    /// default style.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in custom.iter_mut() {
            if let Some(ThemeColor::Named(name)) = &style.fg {
                let color = name.parse::<ThemeColor>().with_context(|| {
                    format!("Invalid color for '{:?}' in theme file {}", entry, path.display())
                })?;
                style.fg = Some(color);
            }
        }

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, Self::named("cyan"));
        default_theme.insert(ThemeEntry::Success, Self::named("green"));
        default_theme.insert(ThemeEntry::Warn, Self::named("yellow"));
        default_theme.insert(ThemeEntry::Error, Self::named("red"));
        default_theme.insert(ThemeEntry::MappingOriginal, Self::named("brightblack"));
        default_theme.insert(ThemeEntry::SummaryCount, Self::named("brightwhite"));

        for entry in ALL_ENTRIES {
            default_theme.entry(entry).or_insert_with(|| Self::named("white"));
        }
        default_theme
    }
}
