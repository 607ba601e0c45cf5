//! Logger setup for the emosafe binary.
//!
//! `RUST_LOG` is honoured unless an explicit level override is passed in;
//! without either, only warnings and errors are shown.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger` once. Later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_module("emosafe", level);
        builder.filter_module("emosafe_core", level);
    }
    builder.format_timestamp(None).try_init().ok();
}

/// Picks the level override from the flags. `--quiet` wins, and `--disable-debug`
/// caps the emosafe crates at `warn`.
pub fn level_from_flags(debug: bool, disable_debug: bool, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else if disable_debug {
        Some(LevelFilter::Warn)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_turns_logging_off() {
        assert_eq!(level_from_flags(false, false, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(true, false, true), Some(LevelFilter::Off));
    }

    #[test]
    fn debug_enables_debug_level() {
        assert_eq!(level_from_flags(true, false, false), Some(LevelFilter::Debug));
    }

    #[test]
    fn disable_debug_caps_at_warn() {
        assert_eq!(level_from_flags(false, true, false), Some(LevelFilter::Warn));
    }

    #[test]
    fn no_flags_defers_to_environment() {
        assert_eq!(level_from_flags(false, false, false), None);
    }
}
