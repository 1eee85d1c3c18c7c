// SPDX-License-Identifier: PMPL-1.0-or-later
//! Div rules.
//!
//! Divs that act like buttons, divs that hold widget state, `aria-hidden`
//! over focusable content, and container soup: a chain of four or more
//! nested same-tag divs connected by first-child descent is a strong sign
//! of semantically empty wrapper markup.

use crate::catalog;
use crate::markup::NodeId;
use crate::validators::{ElementList, Validator, ValidatorError};

/// Interactive elements that can receive keyboard focus.
const FOCUSABLE_ELEMENTS: &[&str] = &[
    "a", "button", "input", "select", "textarea", "details", "summary", "iframe",
];

const MAX_SEQUENCE_LENGTH: usize = 4;

pub struct DivValidator {
    max_sequence_length: usize,
}

impl DivValidator {
    pub fn new() -> Self {
        Self {
            max_sequence_length: MAX_SEQUENCE_LENGTH,
        }
    }

    fn check_button_role(&self, elements: &ElementList<'_>, id: NodeId) -> Option<ValidatorError> {
        let acts_like_button = elements.has_attribute(id, "onclick")
            || elements.attribute(id, "role") == Some("button");
        acts_like_button.then(|| ValidatorError::hint(catalog::DIV_BUTTON, Some(id)))
    }

    fn check_expanded(&self, elements: &ElementList<'_>, id: NodeId) -> Option<ValidatorError> {
        elements
            .has_attribute(id, "aria-expanded")
            .then(|| ValidatorError::hint(catalog::DIV_EXPANDED, Some(id)))
    }

    fn check_aria_hidden(&self, elements: &ElementList<'_>, id: NodeId) -> Option<ValidatorError> {
        if !elements.has_attribute(id, "aria-hidden") {
            return None;
        }
        subtree_has_focusable(elements, id)
            .then(|| ValidatorError::new(catalog::DIV_ARIA_HIDDEN, Some(id)))
    }

    fn check_sequence_length(&self, elements: &ElementList<'_>) -> Option<ValidatorError> {
        let chain = elements.longest_sequence("div");
        if chain.len() >= self.max_sequence_length {
            // Attribute the soup to the outermost wrapper.
            return Some(ValidatorError::hint(catalog::DIV_SOUP, Some(chain[0])));
        }
        None
    }
}

impl Default for DivValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for DivValidator {
    fn name(&self) -> &'static str {
        "div"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        let divs = elements.find_all("div");
        if divs.is_empty() {
            return Vec::new();
        }

        let mut errors = Vec::new();
        for &id in &divs {
            errors.extend(self.check_button_role(elements, id));
            errors.extend(self.check_expanded(elements, id));
            errors.extend(self.check_aria_hidden(elements, id));
        }
        errors.extend(self.check_sequence_length(elements));
        errors
    }
}

/// Whether `id` or any descendant can receive focus: an interactive tag, or
/// any element opted into the tab order via tabindex.
fn subtree_has_focusable(elements: &ElementList<'_>, id: NodeId) -> bool {
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        if let Some(element) = elements.get(current) {
            if FOCUSABLE_ELEMENTS.contains(&element.tag.as_str()) {
                return true;
            }
            if element
                .attribute("tabindex")
                .is_some_and(|value| value.trim() != "-1")
            {
                return true;
            }
        }
        stack.extend_from_slice(elements.children(current));
    }
    false
}
