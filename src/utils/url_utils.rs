//! URL manipulation helpers shared by the resolver and the extractors.

use url::Url;

/// Normalize a user supplied base URL.
///
/// Adds `https://` when no scheme is present and strips trailing slashes, so
/// that `format!("{base}/{path}")` never produces a double slash.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// Append the WordPress pagination segment for `page` to a path that already
/// ends with `/`. Page 1 is the bare path.
#[must_use]
pub fn page_path_segment(page: u32) -> String {
    if page > 1 {
        format!("page/{page}/")
    } else {
        String::new()
    }
}

/// Build `<base>/<path>/[page/N/]`, always ending with a slash.
#[must_use]
pub fn paged_url(base: &str, path: &str, page: u32) -> String {
    let mut url = String::with_capacity(base.len() + path.len() + 16);
    url.push_str(base);
    url.push('/');
    url.push_str(path);
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(&page_path_segment(page));
    url
}

/// Check if a URL is an absolute http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Strip scheme and host, keeping path, query and fragment.
///
/// Items are stored relative to the site so that a mirror or a changed
/// domain does not invalidate them. Unparseable input is returned unchanged.
#[must_use]
pub fn url_without_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let mut out = parsed.path().to_string();
            if let Some(query) = parsed.query() {
                out.push('?');
                out.push_str(query);
            }
            if let Some(fragment) = parsed.fragment() {
                out.push('#');
                out.push_str(fragment);
            }
            out
        }
        Err(_) => url.to_string(),
    }
}
