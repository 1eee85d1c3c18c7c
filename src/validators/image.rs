// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image rules.
//!
//! Every `<img>` needs an `alt` attribute; `alt=""` marks a decorative
//! image and passes. Non-empty alt text is rejected when it is a generic
//! word or looks like a filename, since neither describes the image.

use crate::catalog;
use crate::markup::NodeId;
use crate::validators::{ElementList, Validator, ValidatorError};

/// Alt text values that say nothing about the image.
const GENERIC_ALT_VALUES: &[&str] = &[
    "image",
    "photo",
    "picture",
    "icon",
    "graphic",
    "img",
    "banner",
    "logo",
    "untitled",
    "screenshot",
    "thumbnail",
    "placeholder",
];

/// Alt text containing one of these is a filename, not a description.
const FILENAME_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".svg", ".webp"];

pub struct ImageValidator {
    generic_values: &'static [&'static str],
    filename_extensions: &'static [&'static str],
}

impl ImageValidator {
    pub fn new() -> Self {
        Self {
            generic_values: GENERIC_ALT_VALUES,
            filename_extensions: FILENAME_EXTENSIONS,
        }
    }

    fn check_image(&self, elements: &ElementList<'_>, id: NodeId) -> Option<ValidatorError> {
        let Some(alt) = elements.attribute(id, "alt") else {
            return Some(ValidatorError::error(catalog::IMG_ALT, Some(id)));
        };

        let alt = alt.trim();
        if alt.is_empty() {
            // Decorative image.
            return None;
        }

        let normalized = alt.to_lowercase();
        let generic = self.generic_values.contains(&normalized.as_str())
            || self
                .filename_extensions
                .iter()
                .any(|ext| normalized.contains(ext));
        generic.then(|| ValidatorError::new(catalog::img_generic_alt(alt), Some(id)))
    }
}

impl Default for ImageValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ImageValidator {
    fn name(&self) -> &'static str {
        "image"
    }

    fn validate(&self, elements: &ElementList<'_>) -> Vec<ValidatorError> {
        elements
            .find_all("img")
            .into_iter()
            .filter_map(|id| self.check_image(elements, id))
            .collect()
    }
}
