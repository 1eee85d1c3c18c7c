// SPDX-License-Identifier: PMPL-1.0-or-later
//! Navigation landmark rules.
//!
//! A single `<nav>` needs no label. As soon as a page has several, screen
//! reader users need a way to tell them apart, so each one must carry
//! `aria-label` or `aria-labelledby`.

use crate::catalog;
use crate::validators::{ElementList, Validator, ValidatorError};

const NAV_LABELS: &[&str] = &["aria-label", "aria-labelledby"];

pub struct NavigationValidator;

impl Validator for NavigationValidator {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        let navs = elements.find_all("nav");
        if navs.len() < 2 || elements.all_have_any_attribute(&navs, NAV_LABELS) {
            return Vec::new();
        }

        navs.into_iter()
            .filter(|&id| !NAV_LABELS.iter().any(|attr| elements.has_attribute(id, attr)))
            .map(|id| ValidatorError::new(catalog::NAV_LABEL, Some(id)))
            .collect()
    }
}
