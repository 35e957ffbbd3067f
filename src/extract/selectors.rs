//! Compiled form of `ExtractionSelectors`
//!
//! Selectors come from configuration, so unlike hardcoded ones they are
//! validated once at construction and reported as `InvalidSelector`.

use scraper::Selector;

use crate::categories::parse_selector;
use crate::config::ExtractionSelectors;
use crate::error::SourceResult;

/// A parsed selector together with its source text, for error messages
pub struct CompiledSelector {
    pub source: String,
    pub selector: Selector,
}

impl CompiledSelector {
    pub fn compile(source: &str) -> SourceResult<Self> {
        Ok(Self {
            source: source.to_string(),
            selector: parse_selector(source)?,
        })
    }
}

pub struct CompiledSelectors {
    pub listing_item: CompiledSelector,
    pub listing_title_link: CompiledSelector,
    pub listing_thumbnail: CompiledSelector,
    pub next_page: CompiledSelector,
    pub details_title: CompiledSelector,
    pub details_content: CompiledSelector,
    pub details_genre: CompiledSelector,
    pub details_thumbnail: CompiledSelector,
    pub published_time: CompiledSelector,
    pub page_images: CompiledSelector,
    pub paragraph: CompiledSelector,
    pub list_item: CompiledSelector,
    pub emphasis: CompiledSelector,
}

impl CompiledSelectors {
    pub fn compile(selectors: &ExtractionSelectors) -> SourceResult<Self> {
        Ok(Self {
            listing_item: CompiledSelector::compile(&selectors.listing_item)?,
            listing_title_link: CompiledSelector::compile(&selectors.listing_title_link)?,
            listing_thumbnail: CompiledSelector::compile(&selectors.listing_thumbnail)?,
            next_page: CompiledSelector::compile(&selectors.next_page)?,
            details_title: CompiledSelector::compile(&selectors.details_title)?,
            details_content: CompiledSelector::compile(&selectors.details_content)?,
            details_genre: CompiledSelector::compile(&selectors.details_genre)?,
            details_thumbnail: CompiledSelector::compile(&selectors.details_thumbnail)?,
            published_time: CompiledSelector::compile(&selectors.published_time)?,
            page_images: CompiledSelector::compile(&selectors.page_images)?,
            paragraph: CompiledSelector::compile("p")?,
            list_item: CompiledSelector::compile("li")?,
            emphasis: CompiledSelector::compile("em")?,
        })
    }
}
