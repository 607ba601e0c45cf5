// emosafe-core/src/converter.rs
//! Directory driver: discovers eligible files and runs each one through
//! scan → map → handler → write.
//!
//! Files are independent: each gets a fresh emoji map that is dropped once
//! the file is written. The first fatal error (unreadable file, malformed
//! document, failed write) aborts the run. Progress is reported through a
//! caller-supplied callback so the library itself never prints.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::format::{FileFormat, SUPPORTED_EXTENSIONS};
use crate::mapping::{build_emoji_map, EmojiMap};
use crate::pool::EmojiPool;
use crate::scanner::distinct_ordered;

/// Name of the output directory created next to the source files.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "output";

/// Options for a directory conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory whose files are converted. Subdirectories are not visited.
    pub base_dir: PathBuf,
    /// Name of the output directory inside `base_dir`. Source files whose
    /// name starts with this string are ignored.
    pub output_dir_name: String,
    /// Run every step except writing output.
    pub dry_run: bool,
}

impl ConvertOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            output_dir_name: DEFAULT_OUTPUT_DIR_NAME.to_string(),
            dry_run: false,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.output_dir_name)
    }
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug)]
pub enum ConversionEvent<'a> {
    /// A file is about to be read.
    Processing { path: &'a Path },
    /// The file contains no emoji; nothing is written.
    NoEmojis { path: &'a Path },
    /// The file's extension has no handler; nothing is written.
    Unsupported { path: &'a Path },
    /// The file was converted. `output` is where it was (or, in a dry run,
    /// would have been) written.
    Converted {
        path: &'a Path,
        output: &'a Path,
        format: FileFormat,
        map: &'a EmojiMap,
    },
}

/// Result of converting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted { output: PathBuf, map: EmojiMap },
    NoEmojis,
    Unsupported,
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub converted: usize,
    pub skipped_no_emoji: usize,
    pub unsupported: usize,
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists regular files directly inside `base_dir` that have a supported
/// extension and whose name does not start with `output_dir_name`.
///
/// The result is sorted by file name.
pub fn discover_files(base_dir: &Path, output_dir_name: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(base_dir)
        .with_context(|| format!("Failed to list directory {}", base_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", base_dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };
        if name.starts_with(output_dir_name) {
            debug!("Skipping {} (output directory prefix).", name);
            continue;
        }
        if has_supported_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    info!("Discovered {} eligible file(s) in {}.", files.len(), base_dir.display());
    Ok(files)
}

/// Converts an in-memory document. Returns `None` when it holds no emoji.
pub fn convert_text(source: &str, format: FileFormat, pool: &EmojiPool) -> Result<Option<(String, EmojiMap)>> {
    let originals = distinct_ordered(source);
    if originals.is_empty() {
        return Ok(None);
    }
    let map = build_emoji_map(&originals, pool);
    let converted = format
        .handler()
        .convert(source, &map)
        .with_context(|| format!("Failed to convert {} document", format))?;
    Ok(Some((converted, map)))
}

/// Runs conversions over a directory with a fixed pool.
#[derive(Debug, Clone)]
pub struct Converter {
    pool: EmojiPool,
    options: ConvertOptions,
}

impl Converter {
    pub fn new(pool: EmojiPool, options: ConvertOptions) -> Self {
        Self { pool, options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn pool(&self) -> &EmojiPool {
        &self.pool
    }

    /// Converts every eligible file under the base directory.
    pub fn run<F>(&self, mut on_event: F) -> Result<RunSummary>
    where
        F: FnMut(&ConversionEvent<'_>),
    {
        let output_dir = self.options.output_dir();
        if !self.options.dry_run {
            fs::create_dir_all(&output_dir)
                .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
        }

        let files = discover_files(&self.options.base_dir, &self.options.output_dir_name)?;
        let mut summary = RunSummary {
            discovered: files.len(),
            ..RunSummary::default()
        };

        for path in &files {
            match self.convert_file(path, &mut on_event)? {
                FileOutcome::Converted { .. } => summary.converted += 1,
                FileOutcome::NoEmojis => summary.skipped_no_emoji += 1,
                FileOutcome::Unsupported => summary.unsupported += 1,
            }
        }

        info!(
            "Run finished: {} converted, {} without emoji, {} unsupported.",
            summary.converted, summary.skipped_no_emoji, summary.unsupported
        );
        Ok(summary)
    }

    /// Converts one file into the output directory.
    pub fn convert_file<F>(&self, path: &Path, on_event: &mut F) -> Result<FileOutcome>
    where
        F: FnMut(&ConversionEvent<'_>),
    {
        on_event(&ConversionEvent::Processing { path });

        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let originals = distinct_ordered(&source);
        if originals.is_empty() {
            debug!("No emoji in {}.", path.display());
            on_event(&ConversionEvent::NoEmojis { path });
            return Ok(FileOutcome::NoEmojis);
        }

        let Some(format) = FileFormat::from_path(path) else {
            warn!("No handler for {}.", path.display());
            on_event(&ConversionEvent::Unsupported { path });
            return Ok(FileOutcome::Unsupported);
        };

        let map = build_emoji_map(&originals, &self.pool);
        for (original, replacement) in map.iter() {
            debug!("{}: {} -> {}", path.display(), original, replacement);
        }

        let converted = format
            .handler()
            .convert(&source, &map)
            .with_context(|| format!("Failed to convert {} as {}", path.display(), format))?;

        let file_name = path
            .file_name()
            .with_context(|| format!("Path has no file name: {}", path.display()))?;
        let output = self.options.output_dir().join(file_name);
        if self.options.dry_run {
            debug!("Dry run, not writing {}.", output.display());
        } else {
            fs::write(&output, converted)
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }

        on_event(&ConversionEvent::Converted {
            path,
            output: &output,
            format,
            map: &map,
        });
        Ok(FileOutcome::Converted { output, map })
    }
}
