// SPDX-License-Identifier: PMPL-1.0-or-later
//! Fieldset rules: a `<fieldset>` groups form controls, and the group
//! needs a name, which is what `<legend>` is for.

use crate::catalog;
use crate::validators::{ElementList, Validator, ValidatorError};

pub struct FieldsetValidator;

impl Validator for FieldsetValidator {
    fn name(&self) -> &'static str {
        "fieldset"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        elements
            .find_all("fieldset")
            .into_iter()
            .filter(|&id| {
                !elements
                    .children(id)
                    .iter()
                    .any(|&child| elements.get(child).is_some_and(|el| el.tag == "legend"))
            })
            .map(|id| ValidatorError::new(catalog::FIELDSET_LEGEND, Some(id)))
            .collect()
    }
}
