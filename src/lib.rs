// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11ylint - Accessibility linter for markup trees
//!
//! Analyzes parsed HTML documents and JSX element trees and reports
//! accessibility rule violations anchored to source locations.
//!
//! ## Architecture
//!
//! Two tree adapters (HTML, JSX) normalize parsed markup into one shared
//! [`markup::Document`] arena. An ordered registry of independent
//! [`validators::Validator`]s runs over the flattened element list and
//! produces unpositioned [`validators::ValidatorError`]s, which the
//! diagnostic assembler translates into positioned [`Diagnostic`]s.
//!
//! ## Validators
//!
//! - **Attributes**: required attributes per tag (`html[lang]`)
//! - **Required**: document-level presence (`html`, `title`, viewport meta)
//! - **Uniqueness**: tags that may appear at most once (`main`, `h1`, ...)
//! - **Navigation**: multiple `<nav>` elements need labels
//! - **Heading**: heading levels must not skip
//! - **Link**: generic link text, mailto text, faulty attributes
//! - **Div**: clickable divs, aria misuse, container soup
//! - **Button**: switch state, accessible names
//! - **Image**: missing and generic alt text
//! - **Input**: label association
//! - **Fieldset**: legend presence
//! - **Section**: accessible names for regions

pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod markup;
pub mod report;
pub mod scanner;
pub mod validators;

pub use diagnostics::{analyze_html, analyze_jsx, Diagnostic, Position, Range};
pub use error::{A11ylintError, Result};
pub use markup::{Dialect, Document, Element, NodeId, Span};
pub use validators::{Severity, Validator, ValidatorError};
