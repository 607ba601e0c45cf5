//! Table rendering for emoji maps and the run summary.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::io::{self, Write};

use emosafe_core::{EmojiMap, RunSummary};

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Renders a two-column `original → replacement` table in first-seen order.
pub fn render_mapping_table(map: &EmojiMap, theme: &ThemeMap, supports_color: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Original", "Replacement"]);

    for (idx, (original, replacement)) in map.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(styled(original, ThemeEntry::MappingOriginal, theme, supports_color)),
            Cell::new(styled(replacement, ThemeEntry::MappingReplacement, theme, supports_color)),
        ]);
    }
    table.to_string()
}

/// Prints the end-of-run counters.
pub fn print_run_summary<W: Write>(
    writer: &mut W,
    summary: &RunSummary,
    dry_run: bool,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let title = if dry_run { "Summary (dry run)" } else { "Summary" };
    writeln!(writer, "{}", styled(title, ThemeEntry::Header, theme, supports_color))?;

    let rows = [
        ("Files discovered", summary.discovered),
        ("Converted", summary.converted),
        ("Skipped (no emoji)", summary.skipped_no_emoji),
        ("Unsupported", summary.unsupported),
    ];
    for (label, count) in rows {
        writeln!(
            writer,
            "  {:<20}{}",
            label,
            styled(&count.to_string(), ThemeEntry::SummaryCount, theme, supports_color)
        )?;
    }
    Ok(())
}
