//! Item detail pages
//!
//! Caller-invoked: a missing title, content body or cover is a hard error,
//! since the caller expects a well-formed item page.

use scraper::ElementRef;

use super::images::image_or_none;
use super::models::ItemDetails;
use super::selectors::{CompiledSelector, CompiledSelectors};
use crate::document::{Document, element_text};
use crate::error::{SourceError, SourceResult};

pub(crate) fn require<'a>(
    document: &'a Document,
    field: &'static str,
    selector: &CompiledSelector,
) -> SourceResult<ElementRef<'a>> {
    document
        .select_first(&selector.selector)
        .ok_or_else(|| SourceError::MissingElement {
            field,
            selector: selector.source.clone(),
        })
}

pub fn parse_details(
    document: &Document,
    selectors: &CompiledSelectors,
) -> SourceResult<ItemDetails> {
    let title = element_text(&require(document, "title", &selectors.details_title)?);
    let content = require(document, "content", &selectors.details_content)?;

    let genre = document
        .select(&selectors.details_genre.selector)
        .map(|a| element_text(&a))
        .collect::<Vec<_>>()
        .join(", ");

    let thumbnail = require(document, "thumbnail", &selectors.details_thumbnail)?;
    let thumbnail_url = image_or_none(document, &thumbnail)
        .unwrap_or_else(|| document.abs_attr(&thumbnail, "src"));

    Ok(ItemDetails {
        title,
        description: description(&content, selectors),
        genre,
        thumbnail_url,
        author: author(&content, selectors),
    })
}

fn description(content: &ElementRef<'_>, selectors: &CompiledSelectors) -> String {
    content
        .select(&selectors.paragraph.selector)
        .map(|p| element_text(&p))
        .filter(|text| !text.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Credits are a list item like `<li>Artists: <em>Name</em></li>`
fn author(content: &ElementRef<'_>, selectors: &CompiledSelectors) -> Option<String> {
    content.select(&selectors.list_item.selector).find_map(|li| {
        if !element_text(&li).to_lowercase().contains("artists") {
            return None;
        }
        let name = element_text(&li.select(&selectors.emphasis.selector).next()?);
        (!name.is_empty()).then_some(name)
    })
}
