//! Shared configuration constants for the OceanWP adapter
//!
//! Default values used by `SiteConfig` and the extraction layer, kept in one
//! place to avoid magic numbers across modules.

/// Maximum explicit category-discovery fetches per adapter instance
///
/// Opportunistic population through the interceptor does not count against
/// this budget. Once it is spent, the filter list degrades to a placeholder.
pub const DEFAULT_MAX_CATEGORY_ATTEMPTS: u32 = 3;

/// Largest response body the interceptor will buffer and parse (10 MB)
///
/// Category menus live in the page chrome; anything larger than this is not
/// an ordinary listing page.
pub const DEFAULT_MAX_INSPECT_BYTES: usize = 10 * 1024 * 1024;

/// Request timeout for the reqwest-backed executor
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Query parameter used by WordPress search
pub const DEFAULT_SEARCH_PARAM: &str = "s";

/// Delimiter used when an href cannot be parsed as a URL
pub const DEFAULT_URL_DELIMITER: &str = "/";

/// Timestamp format of `time.published[datetime]` (chrono syntax)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Anchors that usually point at category and tag archives
pub const DEFAULT_CATEGORY_SELECTOR: &str =
    "ul.megamenu li a, .post-tags a, .meta-category a, .tagcloud a";

/// Bucket names accepted by the restrictive classifier
pub const KNOWN_BUCKETS: [&str; 3] = ["category", "tag", "genre"];

/// Bucket prefixed onto a bare term when every probe failed
pub const FALLBACK_BUCKET: &str = "category";

/// Bucket that marks a key as a tag in the filter presenter
pub const TAG_BUCKET: &str = "tag";

/// Prefixes tried, in priority order, for a key without a bucket
pub const PROBE_PREFIXES: [&str; 4] = ["", "genre/", "category/", "tag/"];

/// Label of the synthetic "no filter" entry
pub const ALL_LABEL: &str = "All";

/// Header shown when no categories could be discovered
pub const CATEGORIES_UNAVAILABLE: &str = "Categories unavailable";

/// Browser user agent for outgoing requests
///
/// Several OceanWP hosts sit behind bot filters that reject obvious library
/// user agents on listing pages.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
