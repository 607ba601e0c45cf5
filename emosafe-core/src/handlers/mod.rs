// emosafe-core/src/handlers/mod.rs
//! Concrete `FormatHandler` implementations, one file per format.
//!
//! To support a new format, add a `<format>_handler.rs` here, declare it below
//! and route its extension in `format.rs`.

pub mod csv_handler;
pub mod html_handler;
pub mod json_handler;
pub mod text_handler;
pub mod xml_handler;
