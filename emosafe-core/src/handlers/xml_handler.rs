// emosafe-core/src/handlers/xml_handler.rs
//! XML documents, processed as a `quick-xml` event stream.
//!
//! Text and CDATA events (element text and tail text) go through substitution
//! on their raw, still-escaped form, so entity references are written back
//! exactly as they were read. Every other event is re-emitted verbatim, which
//! leaves tag names and attributes untouched. The original declaration is
//! replaced by a fixed UTF-8 one.
//! License: MIT OR APACHE 2.0

use log::debug;
use quick_xml::events::{BytesCData, BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::errors::EmosafeError;
use crate::format::FileFormat;
use crate::handler::FormatHandler;
use crate::mapping::EmojiMap;
use crate::substitution::replace_emojis;

pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>\n";

#[derive(Debug, Default, Clone, Copy)]
pub struct XmlHandler;

/// Rejects unquoted or duplicate attributes and values with broken entity references.
fn check_attributes(start: &BytesStart<'_>, position: u64) -> Result<(), EmosafeError> {
    for attr in start.attributes().with_checks(true) {
        let attr = attr.map_err(|e| {
            EmosafeError::MalformedXml(format!("bad attribute at byte {}: {}", position, e))
        })?;
        attr.unescape_value().map_err(|e| {
            EmosafeError::MalformedXml(format!("bad attribute value at byte {}: {}", position, e))
        })?;
    }
    Ok(())
}

impl FormatHandler for XmlHandler {
    fn format(&self) -> FileFormat {
        FileFormat::Xml
    }

    fn convert(&self, source: &str, map: &EmojiMap) -> Result<String, EmosafeError> {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text(false);

        let mut writer = Writer::new(Vec::from(XML_DECLARATION.as_bytes()));
        let mut depth = 0usize;
        let mut seen_root = false;
        let mut wrote_body = false;

        loop {
            let event = reader.read_event()?;
            match event {
                Event::Eof => break,
                Event::Decl(_) => continue,
                Event::Start(ref start) => {
                    check_attributes(start, reader.buffer_position())?;
                    if depth == 0 {
                        if seen_root {
                            return Err(EmosafeError::MalformedXml(format!(
                                "second root element <{}> at byte {}",
                                String::from_utf8_lossy(start.name().as_ref()),
                                reader.buffer_position()
                            )));
                        }
                        seen_root = true;
                    }
                    depth += 1;
                    writer.write_event(event)?;
                }
                Event::Empty(ref empty) => {
                    check_attributes(empty, reader.buffer_position())?;
                    if depth == 0 {
                        if seen_root {
                            return Err(EmosafeError::MalformedXml(format!(
                                "second root element <{}/> at byte {}",
                                String::from_utf8_lossy(empty.name().as_ref()),
                                reader.buffer_position()
                            )));
                        }
                        seen_root = true;
                    }
                    writer.write_event(event)?;
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    writer.write_event(event)?;
                }
                Event::Text(text) => {
                    text.unescape().map_err(|e| {
                        EmosafeError::MalformedXml(format!(
                            "bad text at byte {}: {}",
                            reader.buffer_position(),
                            e
                        ))
                    })?;
                    let raw = std::str::from_utf8(&text)?;
                    if depth == 0 {
                        if !raw.trim().is_empty() {
                            return Err(EmosafeError::MalformedXml(format!(
                                "text outside the root element at byte {}",
                                reader.buffer_position()
                            )));
                        }
                        if !wrote_body {
                            continue;
                        }
                    }
                    let replaced = replace_emojis(raw, map);
                    writer.write_event(Event::Text(BytesText::from_escaped(replaced)))?;
                }
                Event::CData(cdata) => {
                    let raw = std::str::from_utf8(&cdata)?;
                    let replaced = replace_emojis(raw, map);
                    writer.write_event(Event::CData(BytesCData::new(replaced)))?;
                }
                other => writer.write_event(other)?,
            }
            wrote_body = true;
        }

        if !seen_root {
            return Err(EmosafeError::MalformedXml("no root element found".to_string()));
        }
        if depth != 0 {
            return Err(EmosafeError::MalformedXml(format!(
                "{} unclosed element(s) at end of document",
                depth
            )));
        }

        debug!("XML document rewritten, {} byte(s) in.", source.len());
        Ok(String::from_utf8(writer.into_inner())?)
    }
}
