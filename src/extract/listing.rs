//! Listing pages (popular, latest, search results)

use super::images::image_or_none;
use super::models::{ItemSummary, ListingPage};
use super::selectors::CompiledSelectors;
use crate::document::{Document, element_text};
use crate::utils::url_without_domain;

/// Items and next-page flag of a listing page.
///
/// Items without a title link are skipped rather than failing the page.
#[must_use]
pub fn parse_listing(document: &Document, selectors: &CompiledSelectors) -> ListingPage {
    let items = document
        .select(&selectors.listing_item.selector)
        .filter_map(|item| {
            let link = item.select(&selectors.listing_title_link.selector).next()?;
            let href = document.abs_attr(&link, "href");
            if href.is_empty() {
                return None;
            }
            let thumbnail_url = item
                .select(&selectors.listing_thumbnail.selector)
                .next()
                .and_then(|img| image_or_none(document, &img));
            Some(ItemSummary {
                url: url_without_domain(&href),
                title: element_text(&link),
                thumbnail_url,
            })
        })
        .collect();

    ListingPage {
        items,
        has_next_page: document.select_first(&selectors.next_page.selector).is_some(),
    }
}
