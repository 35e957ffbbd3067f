pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{is_valid_url, normalize_base_url, page_path_segment, paged_url, url_without_domain};
