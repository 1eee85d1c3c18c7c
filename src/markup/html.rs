// SPDX-License-Identifier: PMPL-1.0-or-later
//! HTML tree adapter.
//!
//! A tolerant, span-tracking HTML parser that normalizes a document
//! straight into the shared [`Document`] arena. Recoverable markup sloppiness
//! (stray close tags, implicitly closed elements, junk characters) is
//! absorbed; only truncated constructs are parse errors.

use std::collections::HashMap;

use crate::error::{A11ylintError, Result};
use crate::markup::{Document, Element, NodeId, Span};

/// Self-closing elements; no children and no matching close tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Elements whose content is raw text, not markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Elements that an opening tag of the same name implicitly closes.
const AUTO_CLOSE_ELEMENTS: &[&str] = &["p", "li", "dt", "dd", "option", "tr", "td", "th"];

/// Parse HTML source into a flattened element tree.
pub fn parse(source: &str) -> Result<Document> {
    HtmlParser::new(source).parse()
}

struct HtmlParser<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    doc: Document,
    /// Open elements, outermost first.
    stack: Vec<NodeId>,
}

impl<'a> HtmlParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            doc: Document::new(),
            stack: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Document> {
        while !self.is_at_end() {
            if self.peek() == Some(b'<') {
                if self.starts_with("<!--") {
                    self.skip_comment();
                } else if self.starts_with("</") {
                    self.close_tag()?;
                } else if self.starts_with("<!") {
                    self.skip_declaration();
                } else if self.peek_at(1).is_some_and(|b| b.is_ascii_alphabetic()) {
                    self.open_tag()?;
                } else {
                    // A lone '<' in text content.
                    self.text_node(self.pos + 1);
                }
            } else {
                self.text_node(self.pos);
            }
        }

        self.stack.clear();
        Ok(self.doc)
    }

    /// Consume a text run and record it as the parent's text when it is the
    /// first text-bearing child.
    fn text_node(&mut self, scan_from: usize) {
        let start = self.pos;
        self.pos = scan_from;
        while !self.is_at_end() && !self.at_construct() {
            self.pos += 1;
        }

        let content = &self.source[start..self.pos];
        if content.trim().is_empty() {
            return;
        }
        if let Some(&parent) = self.stack.last() {
            let element = self.doc.get_mut(parent).expect("open element exists");
            if element.text.is_none() {
                element.text = Some(content.to_string());
            }
        }
    }

    fn open_tag(&mut self) -> Result<()> {
        let tag_start = self.pos;
        self.pos += 1;
        let name = self.read_name().to_lowercase();

        // <p>one<p>two closes the first p where the second opens.
        if AUTO_CLOSE_ELEMENTS.contains(&name.as_str()) {
            if let Some(&top) = self.stack.last() {
                if self.doc.get(top).is_some_and(|el| el.tag == name) {
                    self.stack.pop();
                    self.set_span_end(top, tag_start);
                }
            }
        }

        let mut attributes = HashMap::new();
        let mut self_closing = false;
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(A11ylintError::Parse(format!(
                        "unexpected end of input inside <{name}>"
                    )))
                }
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') if self.peek_at(1) == Some(b'>') => {
                    self.pos += 2;
                    self_closing = true;
                    break;
                }
                Some(b'/') => {
                    self.pos += 1;
                }
                Some(_) => self.attribute(&mut attributes)?,
            }
        }

        let mut element = Element::new(name.clone());
        element.attributes = attributes;
        element.span = Some(Span {
            start: tag_start,
            end: self.pos,
        });

        let id = self.doc.push(element);
        if let Some(&parent) = self.stack.last() {
            self.doc
                .get_mut(parent)
                .expect("open element exists")
                .children
                .push(id);
        }

        if self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
            return Ok(());
        }
        if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.skip_raw_text(&name, id);
            return Ok(());
        }
        self.stack.push(id);
        Ok(())
    }

    fn close_tag(&mut self) -> Result<()> {
        let close_start = self.pos;
        self.pos += 2;
        let name = self.read_name().to_lowercase();
        while self.peek() != Some(b'>') {
            if self.is_at_end() {
                return Err(A11ylintError::Parse(format!(
                    "unexpected end of input inside </{name}>"
                )));
            }
            self.pos += 1;
        }
        self.pos += 1;

        let Some(depth) = self
            .stack
            .iter()
            .rposition(|&id| self.doc.get(id).is_some_and(|el| el.tag == name))
        else {
            // Stray close tag; ignore.
            return Ok(());
        };

        // Implicitly closed elements end where the close tag begins.
        while self.stack.len() > depth + 1 {
            let id = self.stack.pop().expect("stack non-empty");
            self.set_span_end(id, close_start);
        }
        let id = self.stack.pop().expect("stack non-empty");
        self.set_span_end(id, self.pos);
        Ok(())
    }

    fn attribute(&mut self, attributes: &mut HashMap<String, String>) -> Result<()> {
        let name = self.read_attribute_name();
        if name.is_empty() {
            self.pos += 1;
            return Ok(());
        }

        self.skip_whitespace();
        if self.peek() != Some(b'=') {
            attributes.entry(name).or_default();
            return Ok(());
        }
        self.pos += 1;
        self.skip_whitespace();

        let value = match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let start = self.pos;
                while self.peek() != Some(quote) {
                    if self.is_at_end() {
                        return Err(A11ylintError::Parse(format!(
                            "unterminated value for attribute {name}"
                        )));
                    }
                    self.pos += 1;
                }
                let value = self.source[start..self.pos].to_string();
                self.pos += 1;
                value
            }
            _ => {
                let start = self.pos;
                while let Some(b) = self.peek() {
                    if b.is_ascii_whitespace() || b == b'>' {
                        break;
                    }
                    self.pos += 1;
                }
                self.source[start..self.pos].to_string()
            }
        };

        attributes.entry(name).or_insert(value);
        Ok(())
    }

    /// Consume the content of a raw-text element up to its close tag and
    /// store it as the element's text.
    fn skip_raw_text(&mut self, name: &str, id: NodeId) {
        let close = format!("</{name}");
        let rest = &self.source[self.pos..];
        let Some(idx) = find_ascii_case_insensitive(rest, &close) else {
            let content = rest.to_string();
            self.pos = self.source.len();
            self.store_raw_text(id, content, self.pos);
            return;
        };

        let content = rest[..idx].to_string();
        self.pos += idx;
        while !self.is_at_end() && self.peek() != Some(b'>') {
            self.pos += 1;
        }
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.store_raw_text(id, content, self.pos);
    }

    fn store_raw_text(&mut self, id: NodeId, content: String, end: usize) {
        let element = self.doc.get_mut(id).expect("raw text element exists");
        if !content.trim().is_empty() {
            element.text = Some(content);
        }
        if let Some(span) = element.span.as_mut() {
            span.end = end;
        }
    }

    fn skip_comment(&mut self) {
        match self.source[self.pos..].find("-->") {
            Some(idx) => self.pos += idx + 3,
            None => self.pos = self.source.len(),
        }
    }

    fn skip_declaration(&mut self) {
        match self.source[self.pos..].find('>') {
            Some(idx) => self.pos += idx + 1,
            None => self.pos = self.source.len(),
        }
    }

    fn set_span_end(&mut self, id: NodeId, end: usize) {
        if let Some(span) = self.doc.get_mut(id).and_then(|el| el.span.as_mut()) {
            span.end = end;
        }
    }

    fn read_name(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b':' {
                self.pos += 1;
            } else {
                break;
            }
        }
        &self.source[start..self.pos]
    }

    fn read_attribute_name(&mut self) -> String {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || matches!(b, b'=' | b'>' | b'/' | b'"' | b'\'') {
                break;
            }
            self.pos += 1;
        }
        self.source[start..self.pos].to_string()
    }

    /// Whether the cursor sits on something tag-like rather than text.
    fn at_construct(&self) -> bool {
        self.peek() == Some(b'<')
            && (self.starts_with("</")
                || self.starts_with("<!")
                || self.peek_at(1).is_some_and(|b| b.is_ascii_alphabetic()))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.source[self.pos..].starts_with(prefix)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }
}

/// Byte-wise ASCII case-insensitive substring search.
fn find_ascii_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}
