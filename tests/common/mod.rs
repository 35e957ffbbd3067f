//! Test utilities and helper functions for the adapter test suite

use std::collections::HashMap;

use futures::future::BoxFuture;
use oceanwp_source::{HttpExecutor, SiteRequest, SiteResponse, TransportError};
use parking_lot::Mutex;

pub const BASE: &str = "https://site.test";

/// Creates a test HTML document with specified content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

/// A listing page with a megamenu, two items, a tag cloud and a next link
#[allow(dead_code)]
pub fn listing_page_html() -> String {
    create_test_html(
        "Catalog",
        r#"
<header>
  <ul class="megamenu">
    <li><a href="/category/romance/">Romance</a></li>
    <li><a href="https://site.test/category/drama/">Drama</a></li>
  </ul>
</header>
<main>
  <article class="blog-entry">
    <h2 class="blog-entry-title"><a href="https://site.test/item-one/">Item One</a></h2>
    <div class="thumbnail"><img data-src="/wp-content/uploads/one.jpg" src="data:image/gif;base64,R0lGOD"></div>
  </article>
  <article class="entry">
    <h2 class="entry-title"><a href="/item-two/?ref=list">Item   Two</a></h2>
    <div class="thumbnail"><img src="https://cdn.site.test/two.jpg"></div>
  </article>
</main>
<aside><div class="tagcloud"><a href="/tag/action/">Action</a></div></aside>
<ul class="page-numbers"><li><a class="next" href="/page/2/">Next</a></li></ul>
"#,
    )
}

/// An item page with title, content, credits, gallery and publish time
#[allow(dead_code)]
pub fn item_page_html() -> String {
    create_test_html(
        "Item One",
        r#"
<header class="entry-header">
  <h1 class="single-post-title">Item One</h1>
  <img src="/wp-content/uploads/cover.jpg">
  <time class="published" datetime="2024-03-01T12:00:00+00:00">March 1, 2024</time>
</header>
<div class="meta-category"><a href="/category/romance/">Romance</a><a href="/category/drama/">Drama</a></div>
<div class="entry-content">
  <p>First paragraph.</p>
  <p>   </p>
  <p>Second paragraph.</p>
  <ul>
    <li>Parody: <em>Original</em></li>
    <li>Artists: <em> Jane Doe </em></li>
  </ul>
  <img data-lazy-src="/wp-content/uploads/p1.jpg">
  <img src="https://site.test/wp-content/uploads/p2.jpg">
  <img src="https://site.test/wp-content/uploads/p1.jpg">
  <img src="https://site.test/wp-content/uploads/p3-150x150.jpg">
  <img src="https://site.test/wp-content/uploads/site-logo.png">
</div>
"#,
    )
}

#[derive(Clone)]
#[allow(dead_code)]
pub enum Route {
    Html(String),
    Status(u16),
    Fail,
}

/// Executor answering from a fixed URL table and recording every request.
/// Unknown URLs answer 404.
#[derive(Default)]
pub struct ScriptedExecutor {
    routes: Mutex<HashMap<String, Route>>,
    requests: Mutex<Vec<SiteRequest>>,
}

#[allow(dead_code)]
impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, url: &str, route: Route) -> Self {
        self.routes.lock().insert(url.to_string(), route);
        self
    }

    pub fn html(self, url: &str, body: impl Into<String>) -> Self {
        self.route(url, Route::Html(body.into()))
    }

    pub fn requests(&self) -> Vec<SiteRequest> {
        self.requests.lock().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.lock().iter().map(|r| r.url.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl HttpExecutor for ScriptedExecutor {
    fn execute(&self, request: SiteRequest) -> BoxFuture<'_, Result<SiteResponse, TransportError>> {
        Box::pin(async move {
            self.requests.lock().push(request.clone());
            let route = self.routes.lock().get(&request.url).cloned();
            match route {
                Some(Route::Html(body)) => Ok(SiteResponse::html(request.url, body)),
                Some(Route::Status(status)) => Ok(SiteResponse::buffered(
                    request.url,
                    status,
                    Some("text/html"),
                    "",
                )),
                Some(Route::Fail) => Err(TransportError::Request {
                    url: request.url,
                    message: "connection refused".to_string(),
                }),
                None => Ok(SiteResponse::buffered(request.url, 404, Some("text/html"), "")),
            }
        })
    }
}
