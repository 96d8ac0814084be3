//! Browser tests for the `web-sys` document and host.
//!
//! Run with `wasm-pack test --headless --firefox crates/folio-toc -- --features web`.

#![cfg(all(target_arch = "wasm32", feature = "web"))]

use folio_toc::{
    HeadingTracker, TocDocument, TrackerConfig, VisibilityHost, WatchOptions,
    dom::{DomDocument, IntersectionHost},
    link_selector,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn render(body: &str) -> DomDocument {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    document.body().expect("body").set_inner_html(body);
    DomDocument::new(document)
}

const PAGE: &str = r##"
<nav class="toc">
  <ul>
    <li><a href="#intro">Intro</a></li>
    <li><a href="#%EC%86%8C%EA%B0%9C">소개</a></li>
  </ul>
</nav>
<div id="markdown">
  <h1 id="intro">Intro</h1>
  <p>text</p>
  <h2 id="소개">소개</h2>
  <h4 id="deep">Deep</h4>
  <h3 id="usage">Usage</h3>
</div>
"##;

#[wasm_bindgen_test]
fn test_headings_in_document_order() {
    let doc = render(PAGE);
    let headings = doc.headings("markdown", "h1, h2, h3").expect("container");
    let ids: Vec<String> = headings.iter().map(|h| doc.element_id(h)).collect();
    assert_eq!(ids, vec!["intro", "소개", "usage"]);
}

#[wasm_bindgen_test]
fn test_missing_container() {
    let doc = render("<p>no content</p>");
    assert!(doc.headings("markdown", "h1, h2, h3").is_none());
}

#[wasm_bindgen_test]
fn test_link_lookup_and_classes() {
    let doc = render(PAGE);
    let link = doc.query_link(&link_selector("소개")).expect("encoded link");
    assert_eq!(link.get_attribute("href").as_deref(), Some("#%EC%86%8C%EA%B0%9C"));

    doc.add_class(&link, "toc-highlight");
    assert!(link.class_list().contains("toc-highlight"));
    doc.remove_class(&link, "toc-highlight");
    assert!(!link.class_list().contains("toc-highlight"));

    assert!(doc.query_link(&link_selector("missing")).is_none());
}

#[wasm_bindgen_test]
fn test_intersection_host_watch_and_release() {
    let doc = render(PAGE);
    let headings = doc.headings("markdown", "h1, h2, h3").expect("container");

    let subscription = IntersectionHost
        .watch(&headings[0], &WatchOptions::default(), Box::new(|_| {}))
        .expect("observer");
    subscription.release();
}

#[wasm_bindgen_test]
fn test_tracker_mounts_on_live_document() {
    let doc = render(PAGE);
    let tracker = HeadingTracker::mount(
        Some("<ul></ul>"),
        doc,
        &IntersectionHost,
        TrackerConfig::default(),
    )
    .expect("tracker");
    assert_eq!(tracker.watch_count(), 3);
    tracker.teardown();
}
