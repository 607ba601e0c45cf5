// emosafe-core/src/handlers/json_handler.rs
//! JSON documents: every string value is rewritten, object keys are not.
//! Output is pretty-printed with two-space indentation and non-ASCII text
//! written literally. Key order is preserved.
//! License: MIT OR APACHE 2.0

use serde_json::Value;

use crate::errors::EmosafeError;
use crate::format::FileFormat;
use crate::handler::FormatHandler;
use crate::mapping::EmojiMap;
use crate::substitution::replace_emojis;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonHandler;

/// Walks `value` in place, rewriting string leaves.
fn replace_in_value(value: &mut Value, map: &EmojiMap) {
    match value {
        Value::String(s) => *s = replace_emojis(s, map),
        Value::Array(items) => {
            for item in items.iter_mut() {
                replace_in_value(item, map);
            }
        }
        Value::Object(fields) => {
            for (_, field) in fields.iter_mut() {
                replace_in_value(field, map);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

impl FormatHandler for JsonHandler {
    fn format(&self) -> FileFormat {
        FileFormat::Json
    }

    fn convert(&self, source: &str, map: &EmojiMap) -> Result<String, EmosafeError> {
        let mut document: Value = serde_json::from_str(source)?;
        replace_in_value(&mut document, map);
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
