// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy rules.
//!
//! Heading levels must not skip: an `<h3>` directly after an `<h1>` leaves
//! screen reader users without the intermediate outline level. Each skip is
//! attributed to the heading that jumps too far.

use crate::catalog;
use crate::markup::NodeId;
use crate::validators::{ElementList, Validator, ValidatorError};

pub struct HeadingValidator;

impl Validator for HeadingValidator {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        let headings: Vec<(u8, NodeId)> = elements
            .ids()
            .filter_map(|id| {
                let tag = &elements.get(id)?.tag;
                let level = tag.strip_prefix('h')?.parse::<u8>().ok()?;
                (1..=6).contains(&level).then_some((level, id))
            })
            .collect();

        headings
            .windows(2)
            .filter(|pair| pair[1].0 > pair[0].0 + 1)
            .map(|pair| {
                ValidatorError::new(catalog::heading_skip(pair[0].0, pair[1].0), Some(pair[1].1))
            })
            .collect()
    }
}
