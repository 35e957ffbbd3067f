//! `OceanWpSource`: the adapter a host talks to
//!
//! Composition of the pieces: one executor (optionally wrapped by the
//! category interceptor), one category cache, the resolver, the presenter
//! and the compiled extraction selectors.

use std::sync::Arc;

use log::debug;

use crate::categories::{CategoryCache, CategoryEntry, CategoryParser};
use crate::config::SiteConfig;
use crate::document::Document;
use crate::error::{SourceError, SourceResult};
use crate::extract::{
    Chapter, CompiledSelectors, ItemDetails, ListingPage, PageImage, parse_chapter_list,
    parse_details, parse_listing, parse_page_list,
};
use crate::http::{CategoryInterceptor, HttpExecutor, ReqwestExecutor, SiteRequest, SiteResponse};
use crate::search::{
    FilterList, FilterPresenter, Resolution, SearchFilterSelection, SearchTargetResolver,
};
use crate::utils::paged_url;

pub struct OceanWpSource {
    config: SiteConfig,
    executor: Arc<dyn HttpExecutor>,
    /// The caller's executor without the interceptor layer
    transport: Arc<dyn HttpExecutor>,
    cache: Arc<CategoryCache>,
    parser: Arc<CategoryParser>,
    resolver: SearchTargetResolver,
    presenter: FilterPresenter,
    selectors: CompiledSelectors,
}

impl OceanWpSource {
    /// Adapter over a reqwest client built from `config`
    pub fn new(config: SiteConfig) -> SourceResult<Self> {
        let executor = ReqwestExecutor::new(&config)?;
        Self::with_executor(config, executor)
    }

    /// Adapter over a caller-supplied transport. The category interceptor is
    /// layered on top when the config enables it.
    pub fn with_executor<E>(config: SiteConfig, executor: E) -> SourceResult<Self>
    where
        E: HttpExecutor + 'static,
    {
        config.validate()?;
        let cache = Arc::new(CategoryCache::new(config.max_category_attempts()));
        let parser = Arc::new(CategoryParser::from_config(&config)?);

        let transport: Arc<dyn HttpExecutor> = Arc::new(executor);
        let executor: Arc<dyn HttpExecutor> = if config.interceptor_enabled() {
            Arc::new(CategoryInterceptor::new(
                Arc::clone(&transport),
                Arc::clone(&cache),
                Arc::clone(&parser),
                config.max_inspect_bytes(),
            ))
        } else {
            Arc::clone(&transport)
        };

        Ok(Self {
            resolver: SearchTargetResolver::new(&config)?,
            presenter: FilterPresenter::from_config(&config),
            selectors: CompiledSelectors::compile(config.selectors())?,
            config,
            executor,
            transport,
            cache,
            parser,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn category_cache(&self) -> &Arc<CategoryCache> {
        &self.cache
    }

    #[must_use]
    pub fn executor(&self) -> &Arc<dyn HttpExecutor> {
        &self.executor
    }

    // ============================== Popular / Latest ==============================

    #[must_use]
    pub fn popular_request(&self, page: u32) -> SiteRequest {
        SiteRequest::get(paged_url(self.config.base_url(), "", page))
    }

    /// The template has no separate "latest" ordering; the root is newest first
    #[must_use]
    pub fn latest_request(&self, page: u32) -> SiteRequest {
        self.popular_request(page)
    }

    pub async fn list_popular(&self, page: u32) -> SourceResult<ListingPage> {
        self.fetch_listing(self.popular_request(page)).await
    }

    pub async fn list_latest(&self, page: u32) -> SourceResult<ListingPage> {
        self.fetch_listing(self.latest_request(page)).await
    }

    // ============================== Search ==============================

    /// Resolve the request for a search without fetching it
    pub async fn search_request(&self, page: u32, selection: &SearchFilterSelection) -> Resolution {
        self.resolver
            .resolve_detailed(self.executor.as_ref(), page, selection)
            .await
    }

    pub async fn search(
        &self,
        page: u32,
        selection: &SearchFilterSelection,
    ) -> SourceResult<ListingPage> {
        let resolution = self.search_request(page, selection).await;
        debug!(
            target: "oceanwp::search",
            "Search resolved to {} ({:?})",
            resolution.request.url,
            resolution.outcome
        );
        self.fetch_listing(resolution.request).await
    }

    // ============================== Details / Chapters / Pages ==============================

    pub fn fetch_details(&self, document: &Document) -> SourceResult<ItemDetails> {
        parse_details(document, &self.selectors)
    }

    pub async fn fetch_chapter_list(&self, response: SiteResponse) -> SourceResult<Vec<Chapter>> {
        let page_url = response.url.clone();
        let document = self.read_document(response).await?;
        parse_chapter_list(
            &document,
            &page_url,
            &self.selectors,
            self.config.date_format(),
        )
    }

    #[must_use]
    pub fn fetch_page_list(&self, document: &Document) -> Vec<PageImage> {
        parse_page_list(document, &self.selectors)
    }

    // ============================== Filters ==============================

    /// Filters built from discovered categories.
    ///
    /// Triggers one explicit discovery attempt when nothing has been
    /// discovered yet and the attempt budget allows it.
    pub async fn get_filter_options(&self) -> FilterList {
        self.cache
            .ensure_populated(|| self.discover_categories())
            .await;
        self.presenter.present(&self.cache.entries())
    }

    /// Bypasses the interceptor so the page is parsed once, here, and the
    /// result is adopted through the attempt-counted path.
    async fn discover_categories(&self) -> SourceResult<Vec<CategoryEntry>> {
        let request = SiteRequest::get(format!("{}/", self.config.base_url()));
        let response = check_status(self.transport.execute(request).await?)?;
        let document = self.read_document(response).await?;
        Ok(self.parser.parse(&document))
    }

    // ============================== Transport helpers ==============================

    /// Execute a request whose content is required; non-success is an error
    pub async fn execute_checked(&self, request: SiteRequest) -> SourceResult<SiteResponse> {
        check_status(self.executor.execute(request).await?)
    }

    /// Fetch and parse a page
    pub async fn fetch_document(&self, request: SiteRequest) -> SourceResult<Document> {
        let response = self.execute_checked(request).await?;
        self.read_document(response).await
    }

    async fn read_document(&self, response: SiteResponse) -> SourceResult<Document> {
        let url = response.url.clone();
        let text = response.text().await?;
        Document::parse(&text, &url)
    }

    async fn fetch_listing(&self, request: SiteRequest) -> SourceResult<ListingPage> {
        let document = self.fetch_document(request).await?;
        Ok(parse_listing(&document, &self.selectors))
    }
}

fn check_status(response: SiteResponse) -> SourceResult<SiteResponse> {
    if !response.is_success() {
        return Err(SourceError::Status {
            url: response.url,
            status: response.status,
        });
    }
    Ok(response)
}
