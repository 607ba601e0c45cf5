// emosafe/src/main.rs
//! emosafe entry point.
//!
//! Parses the command line, sets up logging and the console theme, then runs
//! a single conversion pass over the target directory.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use emosafe::cli::Cli;
use emosafe::logger;
use emosafe::ui::output_format::print_error_message;
use emosafe::ui::theme::{build_theme_map, ThemeStyle};
use emosafe::{run_convert_opts, ConvertCommandOptions};

fn main() -> ExitCode {
    let args = Cli::parse();

    logger::init_logger(logger::level_from_flags(args.debug, args.disable_debug, args.quiet));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let stderr = io::stderr();
            let supports_color = stderr.is_terminal();
            let _ = print_error_message(
                &mut stderr.lock(),
                &format!("{:#}", err),
                &ThemeStyle::default_theme_map(),
                supports_color,
            );
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let theme_map = build_theme_map(args.theme.as_ref()).context("Theme error")?;

    let opts = ConvertCommandOptions {
        dir: args.dir,
        output_dir_name: args.output_dir_name,
        pool_path: args.pool,
        dry_run: args.dry_run,
        quiet: args.quiet,
    };
    run_convert_opts(opts, &theme_map)?;

    Ok(())
}
