// emosafe-core/src/lib.rs
//! # emosafe Core Library
//!
//! `emosafe-core` rewrites the emoji in a document into emoji drawn from a
//! fixed, platform-safe pool while leaving the document's structure intact.
//!
//! The library is pure with respect to application state: it holds no
//! cross-file or cross-run state, and reports progress through callbacks
//! instead of printing.
//!
//! ## Modules
//!
//! * `pool`: The built-in themed pool and YAML-loadable custom pools.
//! * `scanner`: Emoji run detection over a fixed code point range table.
//! * `mapping`: Per-file round-robin assignment of pool entries to originals.
//! * `substitution`: Span-local replacement of emoji runs.
//! * `format`: Supported formats and extension dispatch.
//! * `handler`: The `FormatHandler` trait.
//! * `handlers`: JSON, CSV, text/Markdown, XML and HTML handlers.
//! * `converter`: Directory discovery and the per-file conversion driver.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use emosafe_core::{convert_text, EmojiPool, FileFormat};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let pool = EmojiPool::new(vec!["🦊".to_string(), "🍓".to_string()])?;
//!     let (output, map) = convert_text("I love 🐶 and 🍎!", FileFormat::Text, &pool)?
//!         .expect("input holds emoji");
//!
//!     assert_eq!(output, "I love 🦊 and 🍓!");
//!     assert_eq!(map.get("🐶"), Some("🦊"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Handlers and pool construction return [`EmosafeError`]. The directory
//! driver wraps those in `anyhow::Error` with the offending path attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod converter;
pub mod errors;
pub mod format;
pub mod handler;
pub mod handlers;
pub mod mapping;
pub mod pool;
pub mod scanner;
pub mod substitution;

pub use converter::{
    convert_text, discover_files, ConversionEvent, ConvertOptions, Converter, FileOutcome,
    RunSummary, DEFAULT_OUTPUT_DIR_NAME,
};
pub use errors::EmosafeError;
pub use format::{FileFormat, SUPPORTED_EXTENSIONS};
pub use handler::FormatHandler;
pub use mapping::{build_emoji_map, EmojiMap};
pub use pool::{EmojiPool, PoolConfig, PoolGroup, DEFAULT_GROUPS};
pub use scanner::{distinct_ordered, find_all, EMOJI_REGEX};
pub use substitution::replace_emojis;
