//! errors.rs - Custom error types for the emosafe-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific error types that callers can match on, e.g. to tell a malformed
//! document apart from an I/O failure.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `emosafe-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EmosafeError {
    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse CSV document: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse XML document: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed XML document: {0}")]
    MalformedXml(String),

    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Invalid emoji pool: {0}")]
    InvalidPool(String),

    #[error("Failed to load pool configuration '{0}': {1}")]
    PoolConfig(String, String),
}

impl From<std::str::Utf8Error> for EmosafeError {
    fn from(e: std::str::Utf8Error) -> Self {
        EmosafeError::InvalidUtf8(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EmosafeError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        EmosafeError::InvalidUtf8(e.to_string())
    }
}
