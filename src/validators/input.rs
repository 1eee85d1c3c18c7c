// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form input rules.
//!
//! Every input a user can interact with needs a label: an `id` referenced
//! by some `label[for]`, or one of the aria/title label attributes. Input
//! types that render their own label (submit, reset) are exempt.

use crate::catalog;
use crate::validators::{ElementList, Validator, ValidatorError};

/// Input types that do not need a visible label.
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "reset", "button", "image"];

const LABEL_ATTRIBUTES: &[&str] = &["aria-label", "aria-labelledby", "title"];

pub struct InputValidator {
    exempt_types: &'static [&'static str],
}

impl InputValidator {
    pub fn new() -> Self {
        Self {
            exempt_types: EXEMPT_INPUT_TYPES,
        }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for InputValidator {
    fn name(&self) -> &'static str {
        "input"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        let label_targets: Vec<&str> = elements
            .find_all("label")
            .into_iter()
            .filter_map(|id| elements.attribute(id, "for"))
            .collect();

        let mut errors = Vec::new();
        for id in elements.find_all("input") {
            let input_type = elements.attribute(id, "type").unwrap_or("text");
            if self.exempt_types.contains(&input_type) {
                continue;
            }

            let labeled_by_for = elements
                .attribute(id, "id")
                .is_some_and(|own_id| label_targets.contains(&own_id));
            let labeled_by_attribute = LABEL_ATTRIBUTES
                .iter()
                .any(|attr| elements.has_attribute(id, attr));

            if !labeled_by_for && !labeled_by_attribute {
                errors.push(ValidatorError::new(catalog::INPUT_LABEL, Some(id)));
            }
        }
        errors
    }
}
