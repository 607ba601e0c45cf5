//! Console message formatting for the emosafe CLI.
//!
//! Every helper takes an explicit writer and a `supports_color` flag so the
//! same code paths serve terminals, pipes and tests.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme's foreground color for `entry` when color is enabled.
pub fn styled(text: &str, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_line<W: Write>(
    writer: &mut W,
    message: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(message, entry, theme, supports_color))
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_line(writer, message, ThemeEntry::Info, theme, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_line(writer, message, ThemeEntry::Success, theme, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_line(writer, message, ThemeEntry::Warn, theme, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_line(writer, &format!("Error: {}", message), ThemeEntry::Error, theme, supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_without_color() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "  No emojis found in a.txt, skip.", &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "  No emojis found in a.txt, skip.\n");
    }

    #[test]
    fn colored_output_wraps_in_escape_codes() {
        let theme = ThemeStyle::default_theme_map();
        let out = styled("done", ThemeEntry::Success, &theme, true);
        assert!(out.starts_with("\u{1b}["));
        assert!(out.contains("done"));
    }

    #[test]
    fn error_messages_are_prefixed() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_error_message(&mut buf, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\n");
    }
}
