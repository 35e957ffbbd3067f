//! Template-driven field extraction for listing and item pages

pub mod chapters;
pub mod details;
pub mod images;
pub mod listing;
pub mod models;
pub mod selectors;

pub use chapters::{parse_chapter_list, parse_page_list, parse_upload_date};
pub use details::parse_details;
pub use images::{image_or_none, is_decorative_image};
pub use listing::parse_listing;
pub use models::{Chapter, ItemDetails, ItemSummary, ListingPage, PageImage};
pub use selectors::{CompiledSelector, CompiledSelectors};
