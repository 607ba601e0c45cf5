//! Console presentation: theming, message formatting and tables.

pub mod mapping_table;
pub mod output_format;
pub mod theme;
