//! Listing, details, chapter and page extraction against template fixtures

mod common;

use common::{create_test_html, item_page_html, listing_page_html};
use oceanwp_source::extract::{
    CompiledSelectors, parse_chapter_list, parse_details, parse_listing, parse_page_list,
};
use oceanwp_source::utils::DEFAULT_DATE_FORMAT;
use oceanwp_source::{Document, ExtractionSelectors, SourceError};

const ITEM_URL: &str = "https://site.test/item-one/";

fn selectors() -> CompiledSelectors {
    CompiledSelectors::compile(&ExtractionSelectors::default()).expect("default selectors compile")
}

fn item_document() -> Document {
    Document::parse(&item_page_html(), ITEM_URL).expect("fixture parses")
}

#[test]
fn listing_items_are_site_relative_with_lazy_thumbnails() {
    let document = Document::parse(&listing_page_html(), "https://site.test/").expect("fixture parses");
    let page = parse_listing(&document, &selectors());

    assert!(page.has_next_page);
    assert_eq!(page.items.len(), 2);

    let first = &page.items[0];
    assert_eq!(first.url, "/item-one/");
    assert_eq!(first.title, "Item One");
    assert_eq!(
        first.thumbnail_url.as_deref(),
        Some("https://site.test/wp-content/uploads/one.jpg")
    );

    let second = &page.items[1];
    assert_eq!(second.url, "/item-two/?ref=list");
    assert_eq!(second.title, "Item Two");
    assert_eq!(second.thumbnail_url.as_deref(), Some("https://cdn.site.test/two.jpg"));
}

#[test]
fn listing_without_items_or_next_link_is_empty() {
    let html = create_test_html("Nothing", "<main><p>No results</p></main>");
    let document = Document::parse(&html, "https://site.test/?s=zzz").expect("parses");
    let page = parse_listing(&document, &selectors());

    assert!(page.items.is_empty());
    assert!(!page.has_next_page);
}

#[test]
fn details_collect_metadata_from_item_page() {
    let details = parse_details(&item_document(), &selectors()).expect("well-formed page");

    assert_eq!(details.title, "Item One");
    assert_eq!(details.description, "First paragraph.\nSecond paragraph.");
    assert_eq!(details.genre, "Romance, Drama");
    assert_eq!(
        details.thumbnail_url,
        "https://site.test/wp-content/uploads/cover.jpg"
    );
    assert_eq!(details.author.as_deref(), Some("Jane Doe"));
}

#[test]
fn details_without_title_is_a_hard_error() {
    let html = create_test_html(
        "Broken",
        r#"<div class="entry-content"><p>Body</p></div>"#,
    );
    let document = Document::parse(&html, ITEM_URL).expect("parses");

    match parse_details(&document, &selectors()) {
        Err(SourceError::MissingElement { field, .. }) => assert_eq!(field, "title"),
        other => panic!("expected missing title, got {other:?}"),
    }
}

#[test]
fn details_without_content_is_a_hard_error() {
    let html = create_test_html("Broken", r#"<h1 class="entry-title">Only a title</h1>"#);
    let document = Document::parse(&html, ITEM_URL).expect("parses");

    let err = parse_details(&document, &selectors()).expect_err("content is required");
    assert!(matches!(err, SourceError::MissingElement { field: "content", .. }));
}

#[test]
fn item_page_is_its_single_chapter() {
    let chapters = parse_chapter_list(&item_document(), ITEM_URL, &selectors(), DEFAULT_DATE_FORMAT)
        .expect("well-formed page");

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].name, "Item One");
    assert_eq!(chapters[0].url, "/item-one/");
    assert_eq!(chapters[0].date_upload, 1_709_294_400_000);
}

#[test]
fn unparseable_publish_date_becomes_zero() {
    let html = create_test_html(
        "Item",
        r#"<h1 class="entry-title">Item</h1><time class="published" datetime="last week">Last week</time>"#,
    );
    let document = Document::parse(&html, ITEM_URL).expect("parses");

    let chapters = parse_chapter_list(&document, ITEM_URL, &selectors(), DEFAULT_DATE_FORMAT)
        .expect("time element present");
    assert_eq!(chapters[0].date_upload, 0);
}

#[test]
fn chapter_needs_publish_time_element() {
    let html = create_test_html("Item", r#"<h1 class="entry-title">Item</h1>"#);
    let document = Document::parse(&html, ITEM_URL).expect("parses");

    let err = parse_chapter_list(&document, ITEM_URL, &selectors(), DEFAULT_DATE_FORMAT)
        .expect_err("publish time is required");
    assert!(matches!(err, SourceError::MissingElement { field: "publish time", .. }));
}

#[test]
fn page_list_is_distinct_and_skips_decorative_images() {
    let pages = parse_page_list(&item_document(), &selectors());

    let urls: Vec<&str> = pages.iter().map(|p| p.image_url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://site.test/wp-content/uploads/p1.jpg",
            "https://site.test/wp-content/uploads/p2.jpg",
        ]
    );
    assert_eq!(pages[0].index, 0);
    assert_eq!(pages[1].index, 1);
}

#[test]
fn invalid_configured_selector_is_rejected() {
    let selectors = ExtractionSelectors {
        listing_item: "article[".to_string(),
        ..ExtractionSelectors::default()
    };
    assert!(matches!(
        CompiledSelectors::compile(&selectors),
        Err(SourceError::InvalidSelector { .. })
    ));
}
