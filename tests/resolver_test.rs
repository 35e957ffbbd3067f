//! Search target resolution: query, browse, direct keys and probing

mod common;

use common::{BASE, Route, ScriptedExecutor};
use oceanwp_source::{
    Method, ReqwestExecutor, ResolutionOutcome, SearchFilterSelection, SearchTargetResolver,
    SiteConfig,
};

fn resolver() -> SearchTargetResolver {
    let config = SiteConfig::builder().base_url(BASE).build().expect("valid config");
    SearchTargetResolver::new(&config).expect("valid base url")
}

#[tokio::test]
async fn query_wins_over_selected_keys() {
    let executor = ScriptedExecutor::new();
    let selection = SearchFilterSelection::new("hello world", vec!["romance".to_string()]);

    let resolution = resolver().resolve_detailed(&executor, 1, &selection).await;

    assert_eq!(resolution.outcome, ResolutionOutcome::Query);
    assert_eq!(resolution.request.url, "https://site.test/?s=hello+world");
    assert_eq!(executor.count(), 0);
}

#[tokio::test]
async fn query_request_carries_page_segment() {
    let executor = ScriptedExecutor::new();
    let request = resolver()
        .resolve(&executor, 3, &SearchFilterSelection::query("isekai"))
        .await;
    assert_eq!(request.url, "https://site.test/page/3?s=isekai");
}

#[tokio::test]
async fn whitespace_query_counts_as_empty() {
    let executor = ScriptedExecutor::new();
    let resolution = resolver()
        .resolve_detailed(&executor, 1, &SearchFilterSelection::query("   "))
        .await;
    assert_eq!(resolution.outcome, ResolutionOutcome::Browse);
    assert_eq!(resolution.request.url, "https://site.test/");
}

#[tokio::test]
async fn no_query_and_no_keys_browses_the_catalog() {
    let executor = ScriptedExecutor::new();
    let selection = SearchFilterSelection::keys(["", " / "]);

    let first = resolver().resolve(&executor, 1, &selection).await;
    let second = resolver().resolve(&executor, 2, &selection).await;

    assert_eq!(first.url, "https://site.test/");
    assert_eq!(second.url, "https://site.test/page/2/");
    assert_eq!(executor.count(), 0);
}

#[tokio::test]
async fn bucketed_key_is_used_without_probing() {
    let executor = ScriptedExecutor::new();
    let resolution = resolver()
        .resolve_detailed(&executor, 2, &SearchFilterSelection::keys(["tag/action"]))
        .await;

    assert_eq!(resolution.outcome, ResolutionOutcome::Direct);
    assert_eq!(resolution.request.url, "https://site.test/tag/action/page/2/");
    assert_eq!(executor.count(), 0);
}

#[tokio::test]
async fn bare_key_stops_at_first_successful_probe() {
    let executor = ScriptedExecutor::new()
        .route("https://site.test/romance/", Route::Status(404))
        .route("https://site.test/genre/romance/", Route::Status(404))
        .html("https://site.test/category/romance/", "<html></html>")
        .html("https://site.test/tag/romance/", "<html></html>");

    let resolution = resolver()
        .resolve_detailed(&executor, 1, &SearchFilterSelection::keys(["romance"]))
        .await;

    assert_eq!(resolution.request.url, "https://site.test/category/romance/");
    assert_eq!(resolution.outcome, ResolutionOutcome::Probed { probes: 3 });
    assert!(resolution.is_verified());
    assert_eq!(
        executor.urls(),
        vec![
            "https://site.test/romance/",
            "https://site.test/genre/romance/",
            "https://site.test/category/romance/",
        ]
    );
}

#[tokio::test]
async fn probes_include_the_page_segment() {
    let executor = ScriptedExecutor::new().html("https://site.test/genre/drama/page/4/", "ok");

    let request = resolver()
        .resolve(&executor, 4, &SearchFilterSelection::keys(["drama"]))
        .await;

    assert_eq!(request.url, "https://site.test/genre/drama/page/4/");
    assert_eq!(executor.count(), 2);
}

#[tokio::test]
async fn transport_failure_does_not_stop_probing() {
    let executor = ScriptedExecutor::new()
        .route("https://site.test/romance/", Route::Fail)
        .html("https://site.test/genre/romance/", "ok");

    let resolution = resolver()
        .resolve_detailed(&executor, 1, &SearchFilterSelection::keys(["romance"]))
        .await;

    assert_eq!(resolution.request.url, "https://site.test/genre/romance/");
    assert_eq!(resolution.outcome, ResolutionOutcome::Probed { probes: 2 });
}

#[tokio::test]
async fn exhausted_probes_fall_back_to_category_bucket() {
    let executor = ScriptedExecutor::new();

    let resolution = resolver()
        .resolve_detailed(&executor, 2, &SearchFilterSelection::keys(["romance"]))
        .await;

    assert_eq!(resolution.request.url, "https://site.test/category/romance/page/2/");
    assert_eq!(resolution.outcome, ResolutionOutcome::Fallback { probes: 4 });
    assert!(!resolution.is_verified());
    assert_eq!(executor.count(), 4);
}

#[tokio::test]
async fn candidates_are_deduplicated_across_keys() {
    let executor = ScriptedExecutor::new().html("https://site.test/tag/drama/", "ok");

    let resolution = resolver()
        .resolve_detailed(
            &executor,
            1,
            &SearchFilterSelection::keys(["romance", "/romance/", "drama"]),
        )
        .await;

    assert_eq!(resolution.request.url, "https://site.test/tag/drama/");
    assert_eq!(resolution.outcome, ResolutionOutcome::Probed { probes: 8 });
    let urls = executor.urls();
    assert_eq!(urls.len(), 8);
    assert_eq!(
        urls.iter().filter(|u| u.as_str() == "https://site.test/romance/").count(),
        1
    );
}

#[tokio::test]
async fn probes_use_configured_method_but_result_is_get() {
    let config = SiteConfig::builder()
        .base_url(BASE)
        .probe_method(Method::Head)
        .build()
        .expect("valid config");
    let resolver = SearchTargetResolver::new(&config).expect("valid base url");
    let executor = ScriptedExecutor::new().html("https://site.test/romance/", "");

    let request = resolver
        .resolve(&executor, 1, &SearchFilterSelection::keys(["romance"]))
        .await;

    assert_eq!(executor.requests()[0].method, Method::Head);
    assert_eq!(request.method, Method::Get);
}

#[tokio::test]
async fn probes_against_live_server() {
    let mut server = mockito::Server::new_async().await;
    let bare = server
        .mock("GET", "/romance/")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;
    let genre = server
        .mock("GET", "/genre/romance/")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let category = server
        .mock("GET", "/category/romance/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body("<html><body>Romance</body></html>")
        .expect(1)
        .create_async()
        .await;
    let tag = server
        .mock("GET", "/tag/romance/")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let config = SiteConfig::builder()
        .base_url(server.url())
        .build()
        .expect("valid config");
    let executor = ReqwestExecutor::new(&config).expect("client builds");
    let resolver = SearchTargetResolver::new(&config).expect("valid base url");

    let request = resolver
        .resolve(&executor, 1, &SearchFilterSelection::keys(["romance"]))
        .await;

    assert_eq!(request.url, format!("{}/category/romance/", server.url()));
    bare.assert_async().await;
    genre.assert_async().await;
    category.assert_async().await;
    tag.assert_async().await;
}
