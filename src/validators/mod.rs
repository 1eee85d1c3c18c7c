// SPDX-License-Identifier: PMPL-1.0-or-later
//! The validation engine.
//!
//! Each validator is an independent rule evaluator over the flattened
//! element list. Validators hold only static configuration, never state
//! across documents, and must not panic on malformed input: a missing
//! attribute or absent text is a normal "no violation" branch.
//!
//! Two fixed registries exist: the HTML registry carries document-level and
//! element-level rules; the JSX registry carries the element-level rules
//! that make sense for component fragments. Output order is registry order,
//! then within-validator emission order.

pub mod attributes;
pub mod button;
pub mod div;
pub mod elements;
pub mod fieldset;
pub mod heading;
pub mod image;
pub mod input;
pub mod link;
pub mod navigation;
pub mod required;
pub mod section;
pub mod uniqueness;

use serde::{Deserialize, Serialize};

use crate::markup::{Dialect, Document, NodeId};
pub use elements::ElementList;

/// Severity of a reported violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Hint,
}

/// An unpositioned rule violation. Carrying no node means the violation is
/// document-level and gets the default range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorError {
    pub message: String,
    pub node: Option<NodeId>,
    pub severity: Severity,
}

impl ValidatorError {
    /// A warning, the default severity.
    pub fn new(message: impl Into<String>, node: Option<NodeId>) -> Self {
        Self {
            message: message.into(),
            node,
            severity: Severity::Warning,
        }
    }

    pub fn hint(message: impl Into<String>, node: Option<NodeId>) -> Self {
        Self {
            severity: Severity::Hint,
            ..Self::new(message, node)
        }
    }

    pub fn error(message: impl Into<String>, node: Option<NodeId>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::new(message, node)
        }
    }
}

/// One rule family, invoked once per document with the full element list.
pub trait Validator {
    /// Rule family name, for logging.
    fn name(&self) -> &'static str;

    /// Evaluate the rule over the element list.
    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError>;
}

/// The fixed, ordered validator set for a dialect.
pub fn registry(dialect: Dialect) -> Vec<Box<dyn Validator>> {
    match dialect {
        Dialect::Html => vec![
            Box::new(attributes::AttributesValidator::new()),
            Box::new(required::RequiredValidator::new()),
            Box::new(uniqueness::UniquenessValidator::new()),
            Box::new(navigation::NavigationValidator),
            Box::new(heading::HeadingValidator),
            Box::new(image::ImageValidator::new()),
            Box::new(button::ButtonValidator),
            Box::new(link::LinkValidator::new()),
            Box::new(div::DivValidator::new()),
            Box::new(input::InputValidator::new()),
            Box::new(fieldset::FieldsetValidator),
            Box::new(section::SectionValidator),
        ],
        Dialect::Jsx => vec![
            Box::new(image::ImageValidator::new()),
            Box::new(button::ButtonValidator),
            Box::new(link::LinkValidator::new()),
            Box::new(div::DivValidator::new()),
        ],
    }
}

/// Run the registry for `dialect` over one immutable document.
pub fn run_validators(doc: &Document, dialect: Dialect) -> Vec<ValidatorError> {
    let elements = ElementList::new(doc);
    let mut errors = Vec::new();
    for validator in registry(dialect) {
        let found = validator.validate(&elements);
        if !found.is_empty() {
            tracing::debug!(
                validator = validator.name(),
                count = found.len(),
                "rule violations"
            );
        }
        errors.extend(found);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::html;

    #[test]
    fn test_default_severity_is_warning() {
        let error = ValidatorError::new("m", None);
        assert_eq!(error.severity, Severity::Warning);
        assert_eq!(ValidatorError::hint("m", None).severity, Severity::Hint);
        assert_eq!(ValidatorError::error("m", None).severity, Severity::Error);
    }

    #[test]
    fn test_registry_order_is_stable() {
        let names: Vec<_> = registry(Dialect::Jsx).iter().map(|v| v.name()).collect();
        assert_eq!(names, ["image", "button", "link", "div"]);
    }

    #[test]
    fn test_run_is_idempotent() {
        let doc = html::parse(r#"<html></html>"#).unwrap();
        let first = run_validators(&doc, Dialect::Html);
        let second = run_validators(&doc, Dialect::Html);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
