// emosafe-core/src/handler.rs
//! Defines the `FormatHandler` trait implemented by every file format.
//!
//! A handler owns the parse → substitute → serialize cycle for one file type.
//! It only ever hands leaf text (JSON strings, CSV cells, XML text nodes, HTML
//! character data) to the substitution step, so the surrounding syntax is
//! reproduced as parsed. Handlers work on in-memory text; reading the source
//! and writing the result is the driver's job.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::EmosafeError;
use crate::format::FileFormat;
use crate::mapping::EmojiMap;

pub trait FormatHandler: Send + Sync {
    /// The format this handler serializes to.
    fn format(&self) -> FileFormat;

    /// Rewrites `source`, replacing emoji in leaf text according to `map`.
    ///
    /// # Errors
    /// Returns an error if `source` cannot be parsed as this handler's format.
    /// No partial output is produced in that case.
    fn convert(&self, source: &str, map: &EmojiMap) -> Result<String, EmosafeError>;
}
