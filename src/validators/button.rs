// SPDX-License-Identifier: PMPL-1.0-or-later
//! Button rules.
//!
//! A button with `role="switch"` must expose its state through
//! `aria-checked`. A button with no text needs another source for its
//! accessible name: `aria-label`, `aria-labelledby`, `title`, or an image
//! child with alt text. The checks are exclusive, so one button reports at
//! most one violation.

use crate::catalog;
use crate::markup::NodeId;
use crate::validators::{ElementList, Validator, ValidatorError};

const LABEL_ATTRIBUTES: &[&str] = &["aria-label", "aria-labelledby", "title"];

pub struct ButtonValidator;

impl ButtonValidator {
    fn check_button(&self, elements: &ElementList<'_>, id: NodeId) -> Option<ValidatorError> {
        if elements.attribute(id, "role") == Some("switch")
            && !elements.has_attribute(id, "aria-checked")
        {
            return Some(ValidatorError::new(catalog::BUTTON_SWITCH, Some(id)));
        }

        if !has_accessible_name(elements, id) {
            return Some(ValidatorError::new(catalog::BUTTON_TEXT, Some(id)));
        }
        None
    }
}

impl Validator for ButtonValidator {
    fn name(&self) -> &'static str {
        "button"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        elements
            .find_all("button")
            .into_iter()
            .filter_map(|id| self.check_button(elements, id))
            .collect()
    }
}

fn has_accessible_name(elements: &ElementList<'_>, id: NodeId) -> bool {
    if elements.text(id).is_some_and(|text| !text.trim().is_empty()) {
        return true;
    }
    if LABEL_ATTRIBUTES
        .iter()
        .any(|attr| elements.has_attribute(id, *attr))
    {
        return true;
    }
    // An image child with alt text names the button too.
    elements.children(id).iter().any(|&child| {
        elements.get(child).is_some_and(|el| el.tag == "img")
            && elements
                .attribute(child, "alt")
                .is_some_and(|alt| !alt.trim().is_empty())
    })
}
