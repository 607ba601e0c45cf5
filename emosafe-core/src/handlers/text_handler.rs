// emosafe-core/src/handlers/text_handler.rs
//! Plain text and Markdown: the whole file is one opaque string.

use crate::errors::EmosafeError;
use crate::format::FileFormat;
use crate::handler::FormatHandler;
use crate::mapping::EmojiMap;
use crate::substitution::replace_emojis;

#[derive(Debug, Default, Clone, Copy)]
pub struct TextHandler;

impl FormatHandler for TextHandler {
    fn format(&self) -> FileFormat {
        FileFormat::Text
    }

    fn convert(&self, source: &str, map: &EmojiMap) -> Result<String, EmosafeError> {
        Ok(replace_emojis(source, map))
    }
}
