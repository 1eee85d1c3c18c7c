// SPDX-License-Identifier: PMPL-1.0-or-later
//! Required-attribute rules.
//!
//! Table-driven: each entry names a tag and an attribute every element with
//! that tag must carry with a non-empty value. A missing attribute and an
//! empty one report the same violation.

use crate::catalog;
use crate::validators::{ElementList, Validator, ValidatorError};

/// Tag name to attribute it must carry.
const REQUIRED_ATTRIBUTES: &[(&str, &str)] = &[("html", "lang")];

pub struct AttributesValidator {
    required: &'static [(&'static str, &'static str)],
}

impl AttributesValidator {
    pub fn new() -> Self {
        Self {
            required: REQUIRED_ATTRIBUTES,
        }
    }
}

impl Default for AttributesValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for AttributesValidator {
    fn name(&self) -> &'static str {
        "attributes"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        let mut errors = Vec::new();
        for (tag, attribute) in self.required {
            for id in elements.find_all(tag) {
                let missing = match elements.attribute(id, attribute) {
                    None => true,
                    Some(value) => value.trim().is_empty(),
                };
                if missing {
                    errors.push(ValidatorError::error(
                        catalog::missing_attribute(tag, attribute),
                        Some(id),
                    ));
                }
            }
        }
        errors
    }
}
