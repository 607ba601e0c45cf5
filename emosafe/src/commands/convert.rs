//! Directory conversion command: wires the core converter to console output.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use emosafe_core::{ConversionEvent, ConvertOptions, Converter, EmojiPool, RunSummary};

use crate::ui::mapping_table::{print_run_summary, render_mapping_table};
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Options for the ergonomic `run_convert_opts` API.
#[derive(Debug, Clone)]
pub struct ConvertCommandOptions {
    pub dir: PathBuf,
    pub output_dir_name: String,
    pub pool_path: Option<PathBuf>,
    pub dry_run: bool,
    pub quiet: bool,
}

/// Loads the pool named on the command line, or the built-in one.
pub fn load_pool(pool_path: Option<&PathBuf>) -> Result<EmojiPool> {
    match pool_path {
        Some(path) => EmojiPool::load_from_file(path)
            .with_context(|| format!("Failed to load emoji pool from {}", path.display())),
        None => {
            debug!("Using the built-in emoji pool.");
            Ok(EmojiPool::default())
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Prints one progress event. Write errors on the console are ignored.
fn report_event<W: Write>(
    writer: &mut W,
    event: &ConversionEvent<'_>,
    dry_run: bool,
    theme: &ThemeMap,
    supports_color: bool,
) {
    let _ = match event {
        ConversionEvent::Processing { path } => output_format::print_info_message(
            writer,
            &format!("Processing {}", display_name(path)),
            theme,
            supports_color,
        ),
        ConversionEvent::NoEmojis { path } => output_format::print_warn_message(
            writer,
            &format!("  No emojis found in {}, skip.", display_name(path)),
            theme,
            supports_color,
        ),
        ConversionEvent::Unsupported { path } => output_format::print_warn_message(
            writer,
            &format!("  Unsupported file type: {}", display_name(path)),
            theme,
            supports_color,
        ),
        ConversionEvent::Converted { output, map, .. } if dry_run => {
            let _ = output_format::print_success_message(
                writer,
                &format!("  Would write {} ({} emoji mapped)", output.display(), map.len()),
                theme,
                supports_color,
            );
            writeln!(writer, "{}", render_mapping_table(map, theme, supports_color))
        }
        ConversionEvent::Converted { output, map, .. } => output_format::print_success_message(
            writer,
            &format!("  Wrote {} ({} emoji mapped)", output.display(), map.len()),
            theme,
            supports_color,
        ),
    };
}

/// Runs a full directory conversion and prints progress to stdout.
pub fn run_convert_opts(opts: ConvertCommandOptions, theme: &ThemeMap) -> Result<RunSummary> {
    info!("Starting emosafe run in {}.", opts.dir.display());
    let pool = load_pool(opts.pool_path.as_ref())?;

    let options = ConvertOptions {
        base_dir: opts.dir.clone(),
        output_dir_name: opts.output_dir_name.clone(),
        dry_run: opts.dry_run,
    };
    let converter = Converter::new(pool, options);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    let summary = converter.run(|event| {
        if !opts.quiet {
            report_event(&mut writer, event, opts.dry_run, theme, supports_color);
        }
    })?;

    if !opts.quiet {
        print_run_summary(&mut writer, &summary, opts.dry_run, theme, supports_color)?;
    }
    info!("emosafe run completed.");
    Ok(summary)
}
