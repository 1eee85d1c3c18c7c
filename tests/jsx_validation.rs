// SPDX-License-Identifier: PMPL-1.0-or-later
//! End-to-end validation of JSX/TSX fragments.

use a11ylint::{analyze_jsx, catalog, Position, Severity};

#[test]
fn img_without_alt_is_an_error() {
    let diagnostics = analyze_jsx(r#"<img src="/logo.png" />"#).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::IMG_ALT);
    assert_eq!(diagnostics[0].severity, Severity::Error);
}

#[test]
fn empty_alt_marks_a_decorative_image() {
    assert!(analyze_jsx(r#"<img src="/divider.png" alt="" />"#)
        .unwrap()
        .is_empty());
}

#[test]
fn expression_alt_counts_as_provided() {
    assert!(analyze_jsx("<img src={logo} alt={caption} />")
        .unwrap()
        .is_empty());
}

#[test]
fn generic_alt_text_is_flagged() {
    let diagnostics = analyze_jsx(r#"<img src="/x.png" alt="photo" />"#).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::img_generic_alt("photo"));
}

#[test]
fn button_without_a_name_is_flagged() {
    let diagnostics = analyze_jsx("<button></button>").unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::BUTTON_TEXT);
}

#[test]
fn labelled_buttons_pass() {
    assert!(analyze_jsx(r#"<button aria-label="Close dialog" />"#)
        .unwrap()
        .is_empty());
    assert!(analyze_jsx("<button>Buy now</button>").unwrap().is_empty());
    assert!(
        analyze_jsx(r#"<button><img src="/cart.svg" alt="Shopping cart" /></button>"#)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn switch_button_needs_aria_checked() {
    let diagnostics = analyze_jsx(r#"<button role="switch">Dark mode</button>"#).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::BUTTON_SWITCH);

    assert!(
        analyze_jsx(r#"<button role="switch" aria-checked={enabled}>Dark mode</button>"#)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn generic_link_text_is_flagged() {
    let diagnostics = analyze_jsx("<a>click here</a>").unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::link_generic("click here"));
}

#[test]
fn empty_link_is_not_flagged() {
    assert!(analyze_jsx("<a></a>").unwrap().is_empty());
}

#[test]
fn onclick_on_a_link_is_flagged() {
    let diagnostics = analyze_jsx(r#"<a onclick="go()"></a>"#).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::LINK_ONCLICK);
}

#[test]
fn five_nested_divs_flag_once_on_the_outermost() {
    let source = "\n  <div><div><div><div><div></div></div></div></div></div>";
    let diagnostics = analyze_jsx(source).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::DIV_SOUP);
    assert_eq!(diagnostics[0].severity, Severity::Hint);
    assert_eq!(diagnostics[0].range.start, Position { line: 1, column: 2 });
}

#[test]
fn a_single_div_is_fine() {
    assert!(analyze_jsx(r#"<div className="card">Text</div>"#)
        .unwrap()
        .is_empty());
}

#[test]
fn clickable_div_is_a_hint() {
    let diagnostics = analyze_jsx(r#"<div onclick="open()">Menu</div>"#).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::DIV_BUTTON);
    assert_eq!(diagnostics[0].severity, Severity::Hint);
}

#[test]
fn component_fragment_reports_only_its_violations() {
    let source = r#"
export function ProductCard({ product }) {
  return (
    <div className="card">
      <img src={product.imageUrl} />
      <button onClick={addToCart}>Add to cart</button>
    </div>
  );
}
"#;
    let diagnostics = analyze_jsx(source).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::IMG_ALT);
    assert_eq!(diagnostics[0].range.start.line, 4);
}

#[test]
fn multiple_trees_in_one_file_are_all_checked() {
    let source = r#"
const Bad = () => <img src="/a.png" />;
const Good = () => <img src="/b.png" alt="Team at the launch event" />;
"#;
    let diagnostics = analyze_jsx(source).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::IMG_ALT);
}

#[test]
fn document_level_rules_do_not_apply_to_fragments() {
    // No html, title, or viewport requirements on a component.
    assert!(analyze_jsx("<span>42 items</span>").unwrap().is_empty());
}

#[test]
fn mismatched_close_tag_is_a_parse_error() {
    assert!(analyze_jsx("<div></span>").is_err());
}
