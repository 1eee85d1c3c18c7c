// SPDX-License-Identifier: PMPL-1.0-or-later
//! JSX tree adapter.
//!
//! Extracts JSX element trees from a source fragment and normalizes them
//! into the shared [`Document`] arena. Surrounding non-element code is
//! skipped; only the element trees themselves are parsed. Supported JSX
//! shapes: identifier, member-expression (`Foo.Bar`) and namespaced
//! (`svg:path`) names, string-literal and `{expression}` attribute values,
//! spread attributes, fragments, and expression children.
//!
//! Attribute values that are expressions are recorded as present with an
//! empty value: rules that match on exact values treat them as non-matching,
//! rules that match on presence still see them.

use std::collections::HashMap;

use crate::error::{A11ylintError, Result};
use crate::markup::{Document, Element, Span};

/// Parse JSX source into a flattened element tree.
pub fn parse(source: &str) -> Result<Document> {
    JsxParser::new(source).parse()
}

struct JsxParser<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    doc: Document,
}

impl<'a> JsxParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            doc: Document::new(),
        }
    }

    fn parse(mut self) -> Result<Document> {
        while !self.is_at_end() {
            if self.at_element_open() {
                self.element(None)?;
            } else if self.starts_with("<>") {
                self.fragment(None)?;
            } else {
                self.advance_char();
            }
        }
        Ok(self.doc)
    }

    /// Parse one element and attach it to `parent`.
    fn element(&mut self, parent: Option<usize>) -> Result<()> {
        let tag_start = self.pos;
        self.pos += 1;
        let name = self.read_element_name()?;

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
                Some(b'{') => {
                    // Spread attribute. Values are opaque to the rules.
                    self.skip_expression()?;
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
        if let Some(parent) = parent {
            self.doc
                .get_mut(parent)
                .expect("parent element exists")
                .children
                .push(id);
        }

        if !self_closing {
            self.children(id, &name)?;
        }
        Ok(())
    }

    /// Parse children up to the matching close tag of `name`.
    fn children(&mut self, id: usize, name: &str) -> Result<()> {
        loop {
            if self.is_at_end() {
                return Err(A11ylintError::Parse(format!(
                    "missing close tag for <{name}>"
                )));
            }
            if self.starts_with("</") {
                let close_start = self.pos;
                self.pos += 2;
                self.skip_whitespace();
                let close_name = self.read_element_name()?;
                self.skip_whitespace();
                if self.peek() != Some(b'>') {
                    return Err(A11ylintError::Parse(format!(
                        "malformed close tag </{close_name}>"
                    )));
                }
                self.pos += 1;
                if close_name != name {
                    return Err(A11ylintError::Parse(format!(
                        "expected </{name}>, found </{close_name}> at offset {close_start}"
                    )));
                }
                if let Some(span) = self.doc.get_mut(id).and_then(|el| el.span.as_mut()) {
                    span.end = self.pos;
                }
                return Ok(());
            }
            if self.at_element_open() {
                self.element(Some(id))?;
            } else if self.starts_with("<>") {
                self.fragment(Some(id))?;
            } else if self.peek() == Some(b'{') {
                self.skip_expression()?;
            } else {
                self.text_child(id);
            }
        }
    }

    /// A fragment contributes its children directly to the enclosing parent.
    fn fragment(&mut self, parent: Option<usize>) -> Result<()> {
        self.pos += 2;
        loop {
            if self.is_at_end() {
                return Err(A11ylintError::Parse("unterminated fragment".to_string()));
            }
            if self.starts_with("</>") {
                self.pos += 3;
                return Ok(());
            }
            if self.at_element_open() {
                self.element(parent)?;
            } else if self.starts_with("<>") {
                self.fragment(parent)?;
            } else if self.peek() == Some(b'{') {
                self.skip_expression()?;
            } else {
                self.advance_char();
            }
        }
    }

    fn text_child(&mut self, id: usize) {
        let start = self.pos;
        while !self.is_at_end() && self.peek() != Some(b'<') && self.peek() != Some(b'{') {
            self.pos += 1;
        }
        let content = &self.source[start..self.pos];
        if content.trim().is_empty() {
            return;
        }
        let element = self.doc.get_mut(id).expect("open element exists");
        if element.text.is_none() {
            element.text = Some(content.to_string());
        }
    }

    fn attribute(&mut self, attributes: &mut HashMap<String, String>) -> Result<()> {
        let name = self.read_identifier();
        if name.is_empty() {
            return Err(A11ylintError::Parse(format!(
                "unexpected character in attribute list at offset {}",
                self.pos
            )));
        }
        let mut name = name.to_string();
        // aria-label, data-testid
        while self.peek() == Some(b'-') {
            self.pos += 1;
            name.push('-');
            name.push_str(self.read_identifier());
        }

        self.skip_whitespace();
        if self.peek() != Some(b'=') {
            attributes.entry(name).or_default();
            return Ok(());
        }
        self.pos += 1;
        self.skip_whitespace();

        match self.peek() {
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
                attributes.entry(name).or_insert(value);
            }
            Some(b'{') => {
                self.skip_expression()?;
                attributes.entry(name).or_default();
            }
            _ => {
                return Err(A11ylintError::Parse(format!(
                    "expected a value for attribute {name}"
                )))
            }
        }
        Ok(())
    }

    /// Skip a `{...}` expression container, tracking brace depth.
    fn skip_expression(&mut self) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.peek() {
                None => {
                    return Err(A11ylintError::Parse(
                        "unterminated expression container".to_string(),
                    ))
                }
                Some(b'{') => depth += 1,
                Some(b'}') => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += 1;
                        return Ok(());
                    }
                }
                Some(_) => {}
            }
            self.pos += 1;
        }
    }

    /// Element name: identifier with optional `.member` or `:namespace` parts.
    fn read_element_name(&mut self) -> Result<String> {
        let first = self.read_identifier();
        if first.is_empty() {
            return Err(A11ylintError::Parse(format!(
                "expected an element name at offset {}",
                self.pos
            )));
        }
        let mut name = first.to_string();
        while let Some(sep @ (b'.' | b':')) = self.peek() {
            self.pos += 1;
            let part = self.read_identifier();
            if part.is_empty() {
                return Err(A11ylintError::Parse(format!(
                    "incomplete element name {name}"
                )));
            }
            name.push(sep as char);
            name.push_str(part);
        }
        Ok(name)
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.pos;
        if self
            .peek()
            .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_' || b == b'$')
        {
            self.pos += 1;
            while self
                .peek()
                .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
            {
                self.pos += 1;
            }
        }
        &self.source[start..self.pos]
    }

    fn at_element_open(&self) -> bool {
        self.peek() == Some(b'<')
            && self
                .peek_at(1)
                .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_' || b == b'$')
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Advance past one whole character, so the slicing helpers always see
    /// a char boundary.
    fn advance_char(&mut self) {
        self.pos += 1;
        while self.pos < self.bytes.len() && !self.source.is_char_boundary(self.pos) {
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
