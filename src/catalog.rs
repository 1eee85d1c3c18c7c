// SPDX-License-Identifier: PMPL-1.0-or-later
//! Message catalog for validation rules.
//!
//! Configuration data, not logic: every rule references its message here so
//! wording stays in one place. Parameterized messages are small functions
//! that interpolate the offending detail (a tag name, the offending text).

pub const MISSING_HTML: &str = "Document is missing an <html> element.";

pub const MISSING_TITLE: &str = "Provide a <title> element that describes the page.";

pub const MISSING_VIEWPORT_META: &str =
    "Provide a viewport <meta> element so the page scales on small screens.";

pub const NAV_LABEL: &str = "When a page has more than one <nav> element, \
     each needs an aria-label or aria-labelledby attribute.";

pub const LINK_ONCLICK: &str =
    "Avoid onclick on <a> elements. Use a <button> element for actions.";

pub const LINK_TABINDEX: &str = "Avoid tabindex=\"-1\" on <a> elements. \
     It removes the link from keyboard navigation.";

pub const LINK_MAILTO: &str = "Include the email address in the text of a mailto: link.";

pub const DIV_BUTTON: &str = "Use a <button> element instead of a clickable <div>.";

pub const DIV_EXPANDED: &str =
    "Use a <button> or <details> element to manage aria-expanded state.";

pub const DIV_ARIA_HIDDEN: &str =
    "Avoid aria-hidden on elements that contain focusable content.";

pub const DIV_SOUP: &str =
    "Prefer semantic elements over deeply nested <div> wrappers.";

pub const BUTTON_SWITCH: &str =
    "A button with role=\"switch\" must also carry aria-checked.";

pub const BUTTON_TEXT: &str = "Provide text, an aria-label, aria-labelledby, a title, \
     or an image with alt text so the button has an accessible name.";

pub const IMG_ALT: &str =
    "Provide an alt attribute on <img> elements. Use alt=\"\" for decorative images.";

pub const INPUT_LABEL: &str = "Associate a <label> with this input, \
     or provide an aria-label, aria-labelledby, or title attribute.";

pub const FIELDSET_LEGEND: &str =
    "Provide a <legend> element as the first child of this <fieldset>.";

pub const SECTION_LABEL: &str =
    "Provide a heading or an aria-label so this <section> has an accessible name.";

pub fn missing_attribute(tag: &str, attribute: &str) -> String {
    format!("Provide a non-empty {attribute} attribute on the <{tag}> element.")
}

pub fn should_be_unique(tag: &str) -> String {
    format!("There should only be one <{tag}> element per page.")
}

pub fn heading_skip(previous: u8, current: u8) -> String {
    format!("Heading level skipped from <h{previous}> to <h{current}>. Do not skip heading levels.")
}

pub fn link_generic(text: &str) -> String {
    format!("Avoid generic link text \"{text}\". Describe the link target instead.")
}

pub fn img_generic_alt(text: &str) -> String {
    format!("Image has generic alt text \"{text}\". Describe what the image shows instead.")
}
