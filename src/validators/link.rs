// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link rules.
//!
//! Three checks per `<a>` element: generic link text ("click here" tells a
//! screen reader user nothing), a faulty-attribute table (`onclick` with any
//! value, `tabindex` only when exactly `-1`), and `mailto:` links whose text
//! hides the address.

use crate::catalog;
use crate::markup::NodeId;
use crate::validators::{ElementList, Validator, ValidatorError};

/// Phrases that describe the act of clicking, not the target.
const GENERIC_LINK_TEXT: &[&str] = &[
    "click me",
    "click here",
    "click",
    "here",
    "more",
    "read more",
    "learn more",
    "download",
];

/// Attribute name to the value that makes it faulty; `None` means faulty
/// regardless of value.
const FAULTY_ATTRIBUTES: &[(&str, Option<&str>)] = &[("onclick", None), ("tabindex", Some("-1"))];

pub struct LinkValidator {
    generic_texts: &'static [&'static str],
    faulty_attributes: &'static [(&'static str, Option<&'static str>)],
}

impl LinkValidator {
    pub fn new() -> Self {
        Self {
            generic_texts: GENERIC_LINK_TEXT,
            faulty_attributes: FAULTY_ATTRIBUTES,
        }
    }

    fn check_generic_text(
        &self,
        elements: &ElementList<'_>,
        id: NodeId,
    ) -> Option<ValidatorError> {
        let text = elements.text(id)?.trim();
        if self.generic_texts.contains(&text.to_lowercase().as_str()) {
            return Some(ValidatorError::new(catalog::link_generic(text), Some(id)));
        }
        None
    }

    fn check_faulty_attributes(
        &self,
        elements: &ElementList<'_>,
        id: NodeId,
    ) -> Vec<ValidatorError> {
        self.faulty_attributes
            .iter()
            .filter_map(|&(attribute, forbidden)| {
                let value = elements.attribute(id, attribute)?;
                let faulty = match forbidden {
                    None => true,
                    Some(forbidden) => value == forbidden,
                };
                let message = match attribute {
                    "onclick" => catalog::LINK_ONCLICK,
                    _ => catalog::LINK_TABINDEX,
                };
                faulty.then(|| ValidatorError::new(message, Some(id)))
            })
            .collect()
    }

    fn check_mailto(&self, elements: &ElementList<'_>, id: NodeId) -> Option<ValidatorError> {
        let href = elements.attribute(id, "href")?;
        if !href.starts_with("mailto:") {
            return None;
        }
        let shows_address = elements.text(id).is_some_and(|text| text.contains('@'));
        if shows_address {
            return None;
        }
        Some(ValidatorError::new(catalog::LINK_MAILTO, Some(id)))
    }
}

impl Default for LinkValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for LinkValidator {
    fn name(&self) -> &'static str {
        "link"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        let mut errors = Vec::new();
        for id in elements.find_all("a") {
            errors.extend(self.check_generic_text(elements, id));
            errors.extend(self.check_faulty_attributes(elements, id));
            errors.extend(self.check_mailto(elements, id));
        }
        errors
    }
}
