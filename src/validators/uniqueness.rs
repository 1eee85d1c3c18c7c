// SPDX-License-Identifier: PMPL-1.0-or-later
//! Uniqueness rules.
//!
//! A configured set of tags may appear at most once per page. Every
//! occurrence after the first in document order is its own violation,
//! attributed to the duplicate node.

use crate::catalog;
use crate::validators::{ElementList, Validator, ValidatorError};

const UNIQUE_TAGS: &[&str] = &["main", "h1", "title", "header", "footer"];

pub struct UniquenessValidator {
    unique_tags: &'static [&'static str],
}

impl UniquenessValidator {
    pub fn new() -> Self {
        Self {
            unique_tags: UNIQUE_TAGS,
        }
    }
}

impl Default for UniquenessValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UniquenessValidator {
    fn name(&self) -> &'static str {
        "uniqueness"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        let mut errors = Vec::new();
        for tag in self.unique_tags {
            let occurrences = elements.find_all(tag);
            for &duplicate in occurrences.iter().skip(1) {
                errors.push(ValidatorError::new(
                    catalog::should_be_unique(tag),
                    Some(duplicate),
                ));
            }
        }
        errors
    }
}
