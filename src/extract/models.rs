//! Structured results returned to callers

use serde::{Deserialize, Serialize};

/// One item on a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Site-relative URL of the item page
    pub url: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub items: Vec<ItemSummary>,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub title: String,
    pub description: String,
    /// Genre labels joined by ", "
    pub genre: String,
    pub thumbnail_url: String,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,
    /// Site-relative URL
    pub url: String,
    /// Upload time in epoch milliseconds; 0 when unknown
    pub date_upload: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageImage {
    pub index: usize,
    pub image_url: String,
}
