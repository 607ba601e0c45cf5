//! Supported file formats and extension dispatch.

use std::fmt;
use std::path::Path;

use crate::handler::FormatHandler;
use crate::handlers::{
    csv_handler::CsvHandler, html_handler::HtmlHandler, json_handler::JsonHandler,
    text_handler::TextHandler, xml_handler::XmlHandler,
};

/// Extensions picked up by directory discovery, lower-case and without dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "txt", "md", "csv", "xml", "html", "htm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Json,
    Csv,
    Text,
    Markdown,
    Xml,
    Html,
}

impl FileFormat {
    /// Maps a bare extension (any case, no dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "csv" => Some(FileFormat::Csv),
            "txt" => Some(FileFormat::Text),
            "md" => Some(FileFormat::Markdown),
            "xml" => Some(FileFormat::Xml),
            "html" | "htm" => Some(FileFormat::Html),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The handler responsible for this format.
    pub fn handler(self) -> &'static dyn FormatHandler {
        match self {
            FileFormat::Json => &JsonHandler,
            FileFormat::Csv => &CsvHandler,
            FileFormat::Text | FileFormat::Markdown => &TextHandler,
            FileFormat::Xml => &XmlHandler,
            FileFormat::Html => &HtmlHandler,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            FileFormat::Json => "json",
            FileFormat::Csv => "csv",
            FileFormat::Text => "text",
            FileFormat::Markdown => "markdown",
            FileFormat::Xml => "xml",
            FileFormat::Html => "html",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_case_insensitive() {
        assert_eq!(FileFormat::from_path(Path::new("a/Data.JSON")), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_path(Path::new("page.Htm")), Some(FileFormat::Html));
        assert_eq!(FileFormat::from_path(Path::new("notes.md")), Some(FileFormat::Markdown));
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(FileFormat::from_path(Path::new("image.png")), None);
        assert_eq!(FileFormat::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn every_supported_extension_resolves() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(FileFormat::from_extension(ext).is_some(), "{ext} should resolve");
        }
    }

    #[test]
    fn markdown_and_text_share_a_handler() {
        assert_eq!(FileFormat::Markdown.handler().format(), FileFormat::Text);
    }
}
