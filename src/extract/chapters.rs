//! Chapter and page lists
//!
//! OceanWP galleries are single-post: the item page is its own and only
//! chapter, and its images are the pages.

use std::collections::HashSet;

use chrono::DateTime;

use super::details::require;
use super::images::{image_or_none, is_decorative_image};
use super::models::{Chapter, PageImage};
use super::selectors::CompiledSelectors;
use crate::document::{Document, element_text};
use crate::error::SourceResult;
use crate::utils::url_without_domain;

/// The single chapter of an item page loaded from `page_url`
pub fn parse_chapter_list(
    document: &Document,
    page_url: &str,
    selectors: &CompiledSelectors,
    date_format: &str,
) -> SourceResult<Vec<Chapter>> {
    let name = element_text(&require(document, "title", &selectors.details_title)?);
    let published = require(document, "publish time", &selectors.published_time)?;
    let date_upload = published
        .value()
        .attr("datetime")
        .map_or(0, |raw| parse_upload_date(raw, date_format));

    Ok(vec![Chapter {
        name,
        url: url_without_domain(page_url),
        date_upload,
    }])
}

/// Epoch milliseconds of `raw` in `format`, or 0 when it does not parse
#[must_use]
pub fn parse_upload_date(raw: &str, format: &str) -> i64 {
    DateTime::parse_from_str(raw.trim(), format)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Distinct content images in document order, decorative ones dropped
#[must_use]
pub fn parse_page_list(document: &Document, selectors: &CompiledSelectors) -> Vec<PageImage> {
    let mut seen = HashSet::new();
    document
        .select(&selectors.page_images.selector)
        .filter_map(|img| image_or_none(document, &img))
        .filter(|url| seen.insert(url.clone()))
        .filter(|url| !is_decorative_image(url))
        .enumerate()
        .map(|(index, image_url)| PageImage { index, image_url })
        .collect()
}
