// emosafe-core/src/handlers/html_handler.rs
//! HTML documents, processed as a flat token stream.
//!
//! The tokenizer splits the source into tags, comments, declarations,
//! processing instructions, entity and character references, and character
//! data. Only character data is handed to substitution. Every other token is
//! written back byte for byte, so attribute values keep their original emoji
//! and references keep their original spelling (`&amp;`, `&#128054;`).
//!
//! `<script>` and `<style>` bodies are raw text: their content is character
//! data up to the matching close tag, whatever it contains.
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::errors::EmosafeError;
use crate::format::FileFormat;
use crate::handler::FormatHandler;
use crate::mapping::EmojiMap;
use crate::substitution::replace_emojis;

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A lexical unit of an HTML document, borrowing its exact source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlToken<'a> {
    StartTag(&'a str),
    EndTag(&'a str),
    Comment(&'a str),
    Declaration(&'a str),
    ProcessingInstruction(&'a str),
    EntityRef(&'a str),
    CharRef(&'a str),
    Data(&'a str),
}

impl<'a> HtmlToken<'a> {
    /// The source text the token was read from.
    pub fn as_str(&self) -> &'a str {
        match *self {
            HtmlToken::StartTag(s)
            | HtmlToken::EndTag(s)
            | HtmlToken::Comment(s)
            | HtmlToken::Declaration(s)
            | HtmlToken::ProcessingInstruction(s)
            | HtmlToken::EntityRef(s)
            | HtmlToken::CharRef(s)
            | HtmlToken::Data(s) => s,
        }
    }
}

/// Lenient HTML tokenizer. Never fails: anything that does not form a
/// complete piece of markup is character data.
#[derive(Debug)]
pub struct HtmlTokenizer<'a> {
    src: &'a str,
    pos: usize,
    raw_text_close: Option<String>,
}

impl<'a> HtmlTokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0, raw_text_close: None }
    }

    fn emit(&mut self, end: usize, make: fn(&'a str) -> HtmlToken<'a>) -> HtmlToken<'a> {
        let token = make(&self.src[self.pos..end]);
        self.pos = end;
        token
    }

    /// Offset of the first `<` or `&` at or after `from`, or end of input.
    fn data_end(&self, from: usize) -> usize {
        self.src.as_bytes()[from..]
            .iter()
            .position(|&b| b == b'<' || b == b'&')
            .map_or(self.src.len(), |off| from + off)
    }

    /// Offset just past the first `needle` found at or after `from`.
    fn find_after(&self, from: usize, needle: &str) -> Option<usize> {
        self.src[from..].find(needle).map(|off| from + off + needle.len())
    }

    fn lex_markup(&mut self) -> Option<HtmlToken<'a>> {
        let rest = &self.src.as_bytes()[self.pos..];
        if rest.starts_with(b"<!--") {
            let end = self.find_after(self.pos + 4, "-->").unwrap_or(self.src.len());
            return Some(self.emit(end, HtmlToken::Comment));
        }
        if rest.starts_with(b"<!") {
            let end = self.find_after(self.pos + 2, ">")?;
            return Some(self.emit(end, HtmlToken::Declaration));
        }
        if rest.starts_with(b"<?") {
            let end = self.find_after(self.pos + 2, ">")?;
            return Some(self.emit(end, HtmlToken::ProcessingInstruction));
        }
        if rest.starts_with(b"</") && rest.get(2).is_some_and(u8::is_ascii_alphabetic) {
            let end = self.find_after(self.pos + 2, ">")?;
            return Some(self.emit(end, HtmlToken::EndTag));
        }
        if rest.get(1).is_some_and(u8::is_ascii_alphabetic) {
            return self.lex_start_tag();
        }
        None
    }

    fn lex_start_tag(&mut self) -> Option<HtmlToken<'a>> {
        let bytes = self.src.as_bytes();
        let mut quote: Option<u8> = None;
        let mut end = None;
        for (idx, &b) in bytes.iter().enumerate().skip(self.pos + 1) {
            match quote {
                Some(q) if b == q => quote = None,
                Some(_) => {}
                None if b == b'"' || b == b'\'' => quote = Some(b),
                None if b == b'>' => {
                    end = Some(idx + 1);
                    break;
                }
                None => {}
            }
        }
        let end = end?;

        let name_end = bytes[self.pos + 1..end]
            .iter()
            .position(|b| !(b.is_ascii_alphanumeric() || *b == b'-' || *b == b':'))
            .map_or(end, |off| self.pos + 1 + off);
        let name = self.src[self.pos + 1..name_end].to_ascii_lowercase();
        let self_closing = self.src[..end].ends_with("/>");
        if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.raw_text_close = Some(format!("</{}", name));
        }
        Some(self.emit(end, HtmlToken::StartTag))
    }

    fn lex_reference(&mut self) -> Option<HtmlToken<'a>> {
        let bytes = self.src.as_bytes();
        let mut idx = self.pos + 1;
        let is_char_ref = bytes.get(idx) == Some(&b'#');
        if is_char_ref {
            idx += 1;
            let hex = matches!(bytes.get(idx), Some(b'x') | Some(b'X'));
            if hex {
                idx += 1;
            }
            let digits_start = idx;
            while bytes.get(idx).is_some_and(|b| if hex { b.is_ascii_hexdigit() } else { b.is_ascii_digit() }) {
                idx += 1;
            }
            if idx == digits_start {
                return None;
            }
        } else {
            if !bytes.get(idx).is_some_and(u8::is_ascii_alphabetic) {
                return None;
            }
            while bytes
                .get(idx)
                .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'.')
            {
                idx += 1;
            }
        }
        if bytes.get(idx) == Some(&b';') {
            idx += 1;
        }
        let make = if is_char_ref { HtmlToken::CharRef } else { HtmlToken::EntityRef };
        Some(self.emit(idx, make))
    }

    fn lex_raw_text(&mut self, close: String) -> Option<HtmlToken<'a>> {
        let lowered = self.src[self.pos..].to_ascii_lowercase();
        match lowered.find(&close) {
            Some(0) => None,
            Some(off) => {
                let end = self.pos + off;
                Some(self.emit(end, HtmlToken::Data))
            }
            None => Some(self.emit(self.src.len(), HtmlToken::Data)),
        }
    }
}

impl<'a> Iterator for HtmlTokenizer<'a> {
    type Item = HtmlToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.src.len() {
            return None;
        }
        if let Some(close) = self.raw_text_close.take() {
            if let Some(token) = self.lex_raw_text(close) {
                return Some(token);
            }
        }

        let lexed = match self.src.as_bytes()[self.pos] {
            b'<' => self.lex_markup(),
            b'&' => self.lex_reference(),
            _ => None,
        };
        if lexed.is_some() {
            return lexed;
        }

        let end = self.data_end(self.pos + 1);
        Some(self.emit(end, HtmlToken::Data))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlHandler;

impl FormatHandler for HtmlHandler {
    fn format(&self) -> FileFormat {
        FileFormat::Html
    }

    fn convert(&self, source: &str, map: &EmojiMap) -> Result<String, EmosafeError> {
        let mut out = String::with_capacity(source.len());
        let mut tokens = 0usize;
        for token in HtmlTokenizer::new(source) {
            match token {
                HtmlToken::Data(data) => out.push_str(&replace_emojis(data, map)),
                other => out.push_str(other.as_str()),
            }
            tokens += 1;
        }
        debug!("HTML document rewritten from {} token(s).", tokens);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::build_emoji_map;
    use crate::pool::EmojiPool;
    use crate::scanner::distinct_ordered;

    fn convert(source: &str) -> String {
        let pool = EmojiPool::new(vec!["🦊".into(), "🍓".into()]).unwrap();
        let map = build_emoji_map(&distinct_ordered(source), &pool);
        HtmlHandler.convert(source, &map).unwrap()
    }

    #[test]
    fn paragraph_scenario() {
        assert_eq!(convert("<p>Hi 🐶</p>"), "<p>Hi 🦊</p>");
    }

    #[test]
    fn attribute_values_are_not_substituted() {
        assert_eq!(
            convert("<img alt=\"🐶\" title='a>b'>🐶 🍎"),
            "<img alt=\"🐶\" title='a>b'>🦊 🍓"
        );
    }

    #[test]
    fn references_keep_their_spelling() {
        let source = "<p>&amp;&#128054;&#x1F436; 🐶 &copy &nbsp;</p>";
        assert_eq!(convert(source), "<p>&amp;&#128054;&#x1F436; 🦊 &copy &nbsp;</p>");
    }

    #[test]
    fn doctype_comments_and_pi_are_verbatim() {
        let source = "<!DOCTYPE html><?php x ?><!-- 🐶 --><P CLASS=a>🐶</P>";
        assert_eq!(convert(source), "<!DOCTYPE html><?php x ?><!-- 🐶 --><P CLASS=a>🦊</P>");
    }

    #[test]
    fn script_body_is_raw_text() {
        let source = "<script>if (a<b && c) s = \"🐶\";</SCRIPT><b>🐶</b>";
        let tokens: Vec<_> = HtmlTokenizer::new(source).collect();
        assert_eq!(tokens[1], HtmlToken::Data("if (a<b && c) s = \"🐶\";"));
        assert_eq!(tokens[2], HtmlToken::EndTag("</SCRIPT>"));
        assert_eq!(convert(source), "<script>if (a<b && c) s = \"🦊\";</SCRIPT><b>🦊</b>");
    }

    #[test]
    fn stray_markup_characters_are_data() {
        assert_eq!(convert("a < b & 🐶 <"), "a < b & 🦊 <");
        assert_eq!(convert("🐶 <div class=\"x"), "🦊 <div class=\"x");
    }

    #[test]
    fn tokenizes_into_expected_units() {
        let tokens: Vec<_> = HtmlTokenizer::new("<a href=\"x\">t&amp;</a>").collect();
        assert_eq!(
            tokens,
            vec![
                HtmlToken::StartTag("<a href=\"x\">"),
                HtmlToken::Data("t"),
                HtmlToken::EntityRef("&amp;"),
                HtmlToken::EndTag("</a>"),
            ]
        );
    }

    #[test]
    fn token_stream_reassembles_source() {
        let source = "<!doctype html>\n<html><body>\n<p id=1>x &lt; y</p><br/>\n</body></html>\n";
        let joined: String = HtmlTokenizer::new(source).map(|t| t.as_str()).collect();
        assert_eq!(joined, source);
    }
}
