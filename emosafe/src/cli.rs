//! This file defines the command-line interface (CLI) for the emosafe
//! application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

use emosafe_core::DEFAULT_OUTPUT_DIR_NAME;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "emosafe",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Swap every emoji in a folder of documents for a platform-safe one",
    long_about = "emosafe scans the JSON, CSV, TXT, Markdown, XML and HTML files directly inside a directory and replaces every emoji it finds with one drawn from a fixed pool of emoji known to render everywhere. Each file gets its own deterministic mapping; document structure is preserved and results are written to an output directory next to the sources.",
)]
pub struct Cli {
    /// Directory containing the files to convert.
    #[arg(value_name = "DIR", default_value = ".", help = "Directory containing the files to convert (defaults to the current directory).")]
    pub dir: PathBuf,

    /// Name of the output directory created inside DIR.
    #[arg(long = "output-dir-name", value_name = "NAME", default_value = DEFAULT_OUTPUT_DIR_NAME, help = "Name of the output directory created inside DIR. Source files starting with this name are skipped.")]
    pub output_dir_name: String,

    /// Path to a custom emoji pool file (YAML).
    #[arg(long = "pool", value_name = "FILE", help = "Path to a custom emoji pool file (YAML) replacing the built-in pool.")]
    pub pool: Option<PathBuf>,

    /// Report mappings without writing any output.
    #[arg(long = "dry-run", help = "Scan and map every file and print the mappings, but write nothing.")]
    pub dry_run: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress per-file notices and the run summary.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the emosafe crates)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", conflicts_with = "debug", help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_reference_behaviour() {
        let cli = Cli::try_parse_from(["emosafe"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.output_dir_name, "output");
        assert!(!cli.dry_run);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "emosafe", "docs", "--output-dir-name", "safe", "--pool", "p.yaml", "--dry-run", "-q",
        ])
        .unwrap();
        assert_eq!(cli.dir, PathBuf::from("docs"));
        assert_eq!(cli.output_dir_name, "safe");
        assert_eq!(cli.pool, Some(PathBuf::from("p.yaml")));
        assert!(cli.dry_run && cli.quiet);
    }
}
