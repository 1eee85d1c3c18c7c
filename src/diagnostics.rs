// SPDX-License-Identifier: PMPL-1.0-or-later
//! Diagnostic assembly.
//!
//! Translates the unpositioned [`ValidatorError`]s a validation pass
//! produces into positioned [`Diagnostic`]s. An error whose node carries a
//! span gets a range over that span; anything else (no node, no span) falls
//! back to a zero-width range at document start. The mapping is total: one
//! diagnostic per error, in registry order.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::markup::{html, jsx, Dialect, Document};
use crate::validators::{run_validators, Severity, ValidatorError};

/// A line:column position, 0-based. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A source range with start and end positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// A positioned, severity-tagged violation ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub range: Range,
    pub message: String,
    pub severity: Severity,
}

/// Byte offset to line/column translation over one document's text.
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Position of a byte offset. Offsets past the end clamp to the last
    /// position; offsets inside a multi-byte character snap back to its
    /// start.
    pub fn position_at(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while offset > 0 && !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = self.text[self.line_starts[line]..offset].chars().count();
        Position { line, column }
    }
}

/// Validate already-parsed markup and position the results.
pub fn assemble(
    text: &str,
    doc: &Document,
    errors: Vec<ValidatorError>,
) -> Vec<Diagnostic> {
    let index = LineIndex::new(text);
    errors
        .into_iter()
        .map(|error| {
            let range = error
                .node
                .and_then(|id| doc.get(id))
                .and_then(|element| element.span)
                .map(|span| Range {
                    start: index.position_at(span.start),
                    end: index.position_at(span.end),
                })
                .unwrap_or_default();
            Diagnostic {
                range,
                message: error.message,
                severity: error.severity,
            }
        })
        .collect()
}

/// Analyze an HTML document.
///
/// Parse failure is an explicit [`crate::A11ylintError::Parse`] so callers
/// can tell "no violations" from "could not analyze".
pub fn analyze_html(text: &str) -> Result<Vec<Diagnostic>> {
    analyze(text, Dialect::Html)
}

/// Analyze a JSX/TSX fragment.
pub fn analyze_jsx(text: &str) -> Result<Vec<Diagnostic>> {
    analyze(text, Dialect::Jsx)
}

fn analyze(text: &str, dialect: Dialect) -> Result<Vec<Diagnostic>> {
    let doc = match dialect {
        Dialect::Html => html::parse(text)?,
        Dialect::Jsx => jsx::parse(text)?,
    };
    let errors = run_validators(&doc, dialect);
    tracing::debug!(?dialect, violations = errors.len(), "validation pass done");
    Ok(assemble(text, &doc, errors))
}
