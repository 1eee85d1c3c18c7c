// SPDX-License-Identifier: PMPL-1.0-or-later
//! End-to-end validation of HTML documents.

use a11ylint::{analyze_html, catalog, Position, Range, Severity};

const VALID_PAGE: &str = r#"<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Orders</title>
  </head>
  <body>
    <header><nav><a href="/orders">Order history</a></nav></header>
    <main>
      <h1>Orders</h1>
      <h2>Recent</h2>
      <img src="/chart.png" alt="Orders per month, trending up">
      <button type="submit">Reorder</button>
    </main>
    <footer></footer>
  </body>
</html>"#;

#[test]
fn valid_page_produces_no_diagnostics() {
    let diagnostics = analyze_html(VALID_PAGE).unwrap();
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
}

#[test]
fn missing_lang_is_the_first_diagnostic() {
    let diagnostics = analyze_html("<html></html>").unwrap();
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics[0].message, catalog::missing_attribute("html", "lang"));
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].range.start, Position { line: 0, column: 0 });
    assert_eq!(diagnostics[0].range.end, Position { line: 0, column: 13 });
}

#[test]
fn whitespace_lang_counts_as_missing() {
    let diagnostics = analyze_html(r#"<html lang=" "></html>"#).unwrap();
    assert!(diagnostics
        .iter()
        .any(|d| d.message == catalog::missing_attribute("html", "lang")));
}

#[test]
fn empty_source_reports_the_three_absences() {
    let diagnostics = analyze_html("").unwrap();
    assert_eq!(diagnostics.len(), 3);
    let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert!(messages.contains(&catalog::MISSING_HTML));
    assert!(messages.contains(&catalog::MISSING_TITLE));
    assert!(messages.contains(&catalog::MISSING_VIEWPORT_META));
    assert!(diagnostics.iter().all(|d| d.range == Range::default()));
}

#[test]
fn duplicate_title_and_main_are_flagged() {
    let source = r#"<html lang="en"><head>
        <meta name="viewport" content="width=device-width">
        <title>One</title><title>Two</title>
      </head><body><main></main><main></main></body></html>"#;
    let diagnostics = analyze_html(source).unwrap();
    let unique_title = catalog::should_be_unique("title");
    let unique_main = catalog::should_be_unique("main");
    assert_eq!(
        diagnostics.iter().filter(|d| d.message == unique_title).count(),
        1
    );
    assert_eq!(
        diagnostics.iter().filter(|d| d.message == unique_main).count(),
        1
    );
}

#[test]
fn skipped_heading_level_is_flagged_on_the_offender() {
    let source = r#"<html lang="en"><head>
        <meta name="viewport" content="width=device-width"><title>t</title>
      </head><body>
        <h1>Top</h1>
        <h3>Detail</h3>
      </body></html>"#;
    let diagnostics = analyze_html(source).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::heading_skip(1, 3));
    assert_eq!(diagnostics[0].range.start.line, 4);
}

#[test]
fn multiple_navs_each_need_a_label() {
    let source = r#"<html lang="en"><head>
        <meta name="viewport" content="width=device-width"><title>t</title>
      </head><body>
        <nav><a href="/a">Archive</a></nav>
        <nav aria-label="Footer"><a href="/b">About the team</a></nav>
        <nav><a href="/c">Contact us</a></nav>
      </body></html>"#;
    let diagnostics = analyze_html(source).unwrap();
    assert_eq!(
        diagnostics
            .iter()
            .filter(|d| d.message == catalog::NAV_LABEL)
            .count(),
        2
    );
}

#[test]
fn single_nav_is_exempt_from_labelling() {
    let source = r#"<html lang="en"><head>
        <meta name="viewport" content="width=device-width"><title>t</title>
      </head><body><nav><a href="/a">Archive</a></nav></body></html>"#;
    assert!(analyze_html(source).unwrap().is_empty());
}

#[test]
fn unlabelled_input_is_flagged_and_label_for_clears_it() {
    let body = "<input type=\"email\">";
    let diagnostics = analyze_html(&page_with(body)).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::INPUT_LABEL);

    let body = "<label for=\"mail\">Email</label><input id=\"mail\" type=\"email\">";
    assert!(analyze_html(&page_with(body)).unwrap().is_empty());
}

#[test]
fn hidden_inputs_are_exempt() {
    let body = "<input type=\"hidden\" name=\"csrf\" value=\"tok\">";
    assert!(analyze_html(&page_with(body)).unwrap().is_empty());
}

#[test]
fn fieldset_needs_a_legend() {
    let body = "<fieldset><label for=\"a\">A</label><input id=\"a\"></fieldset>";
    let diagnostics = analyze_html(&page_with(body)).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::FIELDSET_LEGEND);

    let body = "<fieldset><legend>Shipping</legend><label for=\"a\">A</label><input id=\"a\"></fieldset>";
    assert!(analyze_html(&page_with(body)).unwrap().is_empty());
}

#[test]
fn section_without_heading_or_label_is_a_hint() {
    let body = "<section><p>Loose prose</p></section>";
    let diagnostics = analyze_html(&page_with(body)).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::SECTION_LABEL);
    assert_eq!(diagnostics[0].severity, Severity::Hint);

    let body = "<section><h2>Reviews</h2><p>Prose</p></section>";
    assert!(analyze_html(&page_with(body)).unwrap().is_empty());
}

#[test]
fn mailto_link_must_show_the_address() {
    let body = "<a href=\"mailto:team@example.com\">Write to us</a>";
    let diagnostics = analyze_html(&page_with(body)).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, catalog::LINK_MAILTO);

    let body = "<a href=\"mailto:team@example.com\">team@example.com</a>";
    assert!(analyze_html(&page_with(body)).unwrap().is_empty());
}

#[test]
fn malformed_document_is_a_parse_error() {
    assert!(analyze_html("<div class=").is_err());
}

/// Wrap a body fragment in a page that passes the document-level rules.
fn page_with(body: &str) -> String {
    format!(
        r#"<html lang="en"><head>
        <meta name="viewport" content="width=device-width"><title>t</title>
      </head><body>{body}</body></html>"#
    )
}
