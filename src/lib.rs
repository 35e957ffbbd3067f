pub mod categories;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod http;
pub mod search;
pub mod source;
pub mod utils;

pub use categories::{CacheState, CategoryCache, CategoryEntry, CategoryParser, PathClassifier};
pub use config::{ClassifierPolicy, ExtractionSelectors, FilterStyle, SiteConfig};
pub use document::Document;
pub use error::{SourceError, SourceResult, TransportError};
pub use extract::{Chapter, ItemDetails, ItemSummary, ListingPage, PageImage};
pub use http::{
    CategoryInterceptor, HttpExecutor, Method, ReqwestExecutor, ResponseBody, SiteRequest,
    SiteResponse,
};
pub use search::{
    Filter, FilterList, FilterPresenter, Resolution, ResolutionOutcome, SearchFilterSelection,
    SearchTargetResolver, SelectFilter,
};
pub use source::OceanWpSource;
