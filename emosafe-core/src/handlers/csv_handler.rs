// emosafe-core/src/handlers/csv_handler.rs
//! CSV documents: every cell is rewritten. There is no header handling, the
//! first row is data like any other. Rows may have differing widths and keep
//! them. Output uses `,`, minimal quoting and CRLF line endings.
//! License: MIT OR APACHE 2.0

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use log::debug;

use crate::errors::EmosafeError;
use crate::format::FileFormat;
use crate::handler::FormatHandler;
use crate::mapping::EmojiMap;
use crate::substitution::replace_emojis;

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvHandler;

/// Splits `source` into physical records, dropping their terminators.
///
/// A terminator is `\n`, `\r\n` or a lone `\r` outside a quoted field. A
/// quote only opens a quoted field at the start of a field, and `""` inside
/// one is an escaped quote. Blank lines come back as empty records.
fn split_records(source: &str) -> Vec<&str> {
    let bytes = source.as_bytes();
    let mut records = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            if b == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
            i += 1;
            continue;
        }
        match b {
            b'"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            b',' => field_start = true,
            b'\n' | b'\r' => {
                records.push(&source[start..i]);
                if b == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
                field_start = true;
            }
            _ => field_start = false,
        }
        i += 1;
    }
    if start < bytes.len() {
        records.push(&source[start..]);
    }
    records
}

impl FormatHandler for CsvHandler {
    fn format(&self) -> FileFormat {
        FileFormat::Csv
    }

    fn convert(&self, source: &str, map: &EmojiMap) -> Result<String, EmosafeError> {
        let mut reader_builder = ReaderBuilder::new();
        reader_builder.has_headers(false).flexible(true);
        let mut writer_builder = WriterBuilder::new();
        writer_builder
            .flexible(true)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF);

        let mut out = Vec::with_capacity(source.len());
        let mut rows = 0usize;
        for line in split_records(source) {
            rows += 1;
            if line.is_empty() {
                out.extend_from_slice(b"\r\n");
                continue;
            }
            let mut reader = reader_builder.from_reader(line.as_bytes());
            let mut writer = writer_builder.from_writer(&mut out);
            for record in reader.records() {
                let record = record?;
                writer.write_record(record.iter().map(|cell| replace_emojis(cell, map)))?;
            }
            writer.flush()?;
        }
        debug!("Rewrote {} CSV row(s).", rows);

        Ok(String::from_utf8(out)?)
    }
}
