//! Image URL extraction with lazy-load attribute fallbacks

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::document::Document;

static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://.*").expect("BUG: hardcoded http URL regex is invalid")
});

/// Attributes checked in order; lazy loaders keep the real source in data-*
const IMAGE_ATTRIBUTES: [&str; 5] = ["data-original", "data-src", "data-lazy-src", "data-srcset", "src"];

/// First usable absolute image URL on `element`, if any
#[must_use]
pub fn image_or_none(document: &Document, element: &ElementRef<'_>) -> Option<String> {
    IMAGE_ATTRIBUTES.iter().find_map(|attr| {
        let raw = element.value().attr(attr)?.trim();
        // srcset lists "url width, url width"; keep the first URL
        let raw = if *attr == "data-srcset" {
            raw.split(',').next()?.split_whitespace().next()?
        } else {
            raw
        };
        if raw.is_empty() {
            return None;
        }
        let absolute = document.base_url().join(raw).ok()?.to_string();
        HTTP_URL.is_match(&absolute).then_some(absolute)
    })
}

/// WordPress thumbnails and site logos are not content pages
#[must_use]
pub fn is_decorative_image(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    if lower.contains("logo") {
        return true;
    }
    lower.contains("wp-content/uploads/")
        && (url.contains("-200x285") || url.contains("-150x") || url.contains("-100x"))
}
