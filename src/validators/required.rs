// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document-level presence rules.
//!
//! An HTML page needs an `<html>` root, a `<title>`, and a viewport
//! `<meta>`. Absence is reported with no node attached, so the diagnostic
//! lands on the default range at document start.

use crate::catalog;
use crate::validators::{ElementList, Validator, ValidatorError};

pub struct RequiredValidator;

impl RequiredValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn name(&self) -> &'static str {
        "required"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        let mut errors = Vec::new();

        if elements.find_first("html").is_none() {
            errors.push(ValidatorError::new(catalog::MISSING_HTML, None));
        }
        if elements.find_first("title").is_none() {
            errors.push(ValidatorError::new(catalog::MISSING_TITLE, None));
        }

        let metas = elements.find_all("meta");
        let has_viewport = metas
            .iter()
            .any(|&id| elements.attribute(id, "name") == Some("viewport"));
        if !has_viewport {
            // When a meta exists but is not the viewport one, anchor there.
            errors.push(ValidatorError::new(
                catalog::MISSING_VIEWPORT_META,
                metas.first().copied(),
            ));
        }

        errors
    }
}
