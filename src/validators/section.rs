// SPDX-License-Identifier: PMPL-1.0-or-later
//! Section rules: a `<section>` is only a landmark when it has an
//! accessible name, from a heading inside it or an aria label.

use crate::catalog;
use crate::markup::NodeId;
use crate::validators::{ElementList, Validator, ValidatorError};

const LABEL_ATTRIBUTES: &[&str] = &["aria-label", "aria-labelledby"];

pub struct SectionValidator;

impl Validator for SectionValidator {
    fn name(&self) -> &'static str {
        "section"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        elements
            .find_all("section")
            .into_iter()
            .filter(|&id| {
                let labeled = LABEL_ATTRIBUTES
                    .iter()
                    .any(|attr| elements.has_attribute(id, *attr));
                !labeled && !subtree_has_heading(elements, id)
            })
            .map(|id| ValidatorError::hint(catalog::SECTION_LABEL, Some(id)))
            .collect()
    }
}

fn subtree_has_heading(elements: &ElementList<'_>, id: NodeId) -> bool {
    let mut stack: Vec<NodeId> = elements.children(id).to_vec();
    while let Some(current) = stack.pop() {
        if let Some(element) = elements.get(current) {
            if is_heading(&element.tag) {
                return true;
            }
        }
        stack.extend_from_slice(elements.children(current));
    }
    false
}

fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}
