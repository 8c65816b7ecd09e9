//! Integration tests for selector evaluation.

use tagcheck_core::{CheckError, ChecksList, Document, RawHtml, evaluate};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Bitstarter</title></head>
<body>
  <div id="header">
    <a href="/">Home</a>
    <ul class="nav main-nav"><li>One</li><li>Two</li></ul>
  </div>
  <h1>Welcome</h1>
  <div class="main"><p class="intro">Hello</p><p>World</p></div>
  <div id="footer"><span>Bye</span></div>
</body>
</html>"#;

fn page() -> Document {
    Document::parse(&RawHtml::from(PAGE))
}

#[test]
fn test_tag_selector() {
    let doc = page();
    assert!(doc.matches("h1").unwrap());
    assert!(!doc.matches("h2").unwrap());
}

#[test]
fn test_id_selector() {
    let doc = page();
    assert!(doc.matches("#footer").unwrap());
    assert!(doc.matches("div#footer").unwrap());
    assert!(!doc.matches("span#footer").unwrap());
}

#[test]
fn test_class_selector() {
    let doc = page();
    assert!(doc.matches(".nav").unwrap());
    assert!(doc.matches(".main-nav").unwrap());
    assert!(!doc.matches(".sidebar").unwrap());
}

#[test]
fn test_combinators() {
    let doc = page();
    assert!(doc.matches("#header a").unwrap());
    assert!(doc.matches("div.main > p.intro").unwrap());
    assert!(doc.matches("p.intro + p").unwrap());
    assert!(doc.matches("#header ~ h1").unwrap());
    assert!(!doc.matches("#footer a").unwrap());
    assert!(!doc.matches("body > p").unwrap());
}

#[test]
fn test_attribute_and_pseudo_class() {
    let doc = page();
    assert!(doc.matches("a[href='/']").unwrap());
    assert!(doc.matches("li:first-child").unwrap());
    assert!(!doc.matches("a[target]").unwrap());
}

#[test]
fn test_implied_document_elements() {
    // The tree builder supplies html, head and body for fragments.
    let doc = Document::parse(&RawHtml::from("<h1>Hi</h1>"));
    assert!(doc.matches("html").unwrap());
    assert!(doc.matches("body > h1").unwrap());
}

#[test]
fn test_tag_soup_is_repaired() {
    let doc = Document::parse(&RawHtml::from(
        "<div class=box><p>one<p>two</div></span><b><i>bold</b></i>",
    ));
    assert!(doc.matches("div.box > p + p").unwrap());
    assert!(doc.matches("b > i").unwrap());
    assert!(!doc.matches("p p").unwrap());
}

#[test]
fn test_scenario_heading_present_id_absent() {
    let checks = ChecksList::from_json(r##"["h1","#nope"]"##).unwrap();
    let results = evaluate(&RawHtml::from("<h1>Hi</h1>"), &checks).unwrap();

    let entries: Vec<_> = results.entries().collect();
    assert_eq!(entries, [("#nope", false), ("h1", true)]);
}

#[test]
fn test_scenario_compound_class() {
    let checks = ChecksList::from_json(r#"["p.intro"]"#).unwrap();
    let results = evaluate(&RawHtml::from(r#"<p class="intro">x</p>"#), &checks).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results.get("p.intro"), Some(true));
    assert!(results.all_present());
}

#[test]
fn test_one_entry_per_distinct_selector() {
    let checks = ChecksList::new(["h1", "p", "h1", "#x"]);
    let results = evaluate(&RawHtml::from("<h1>a</h1>"), &checks).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results.get("h1"), Some(true));
    assert_eq!(results.get("p"), Some(false));
    assert_eq!(results.get("#x"), Some(false));
    assert_eq!(results.get("div"), None);
    assert!(!results.all_present());
}

#[test]
fn test_result_order_follows_sorted_checks() {
    let checks = ChecksList::new(["ul", "#header", "a", ".nav"]);
    let results = page().evaluate(&checks).unwrap();

    let keys: Vec<_> = results.entries().map(|(selector, _)| selector).collect();
    assert_eq!(keys, ["#header", ".nav", "a", "ul"]);
}

#[test]
fn test_evaluation_is_idempotent() {
    let checks = ChecksList::new(["h1", ".nav", "#nope", "div > span"]);
    let doc = page();

    let first = doc.evaluate(&checks).unwrap();
    let second = doc.evaluate(&checks).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_checks_give_empty_map() {
    let results = page().evaluate(&ChecksList::default()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_invalid_selector_aborts() {
    let checks = ChecksList::new(["h1", "div[", "p"]);
    let err = page().evaluate(&checks).unwrap_err();

    assert!(matches!(err, CheckError::Selector { ref selector, .. } if selector == "div["));
    assert!(err.to_string().starts_with("invalid selector 'div['"));
}
