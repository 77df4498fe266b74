//! Link extraction and base resolution tests

use crate::{crawler, mount_page, page_with_links};
use link_validator::crawler::{probe_content_type, BaseResolver};
use link_validator::LinkError;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_head(server: &MockServer, route: &str, content_type: &str) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", content_type))
        .mount(server)
        .await;
}

async fn extract(server: &MockServer, route: &str) -> Result<Vec<String>, LinkError> {
    let page_url = format!("{}{}", server.uri(), route);
    let current = Url::parse(&page_url).unwrap();
    let site = Url::parse(&server.uri()).unwrap();
    crawler().extract_links(&page_url, &current, &site).await
}

#[tokio::test]
async fn test_base_tag_overrides_page_location() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/a/b",
        r#"<html><head><base href="/x/"></head><body><a href="c">C</a></body></html>"#,
    )
    .await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let links = extract(&server, "/a/b").await.unwrap();
    assert_eq!(links, vec![format!("{}/x/c", server.uri())]);
}

#[tokio::test]
async fn test_html_page_treated_as_directory() {
    let server = MockServer::start().await;
    mount_page(&server, "/docs/guide", &page_with_links(&["intro", "../faq"])).await;
    mount_head(&server, "/docs/guide", "text/html; charset=utf-8").await;

    let links = extract(&server, "/docs/guide").await.unwrap();
    assert_eq!(
        links,
        vec![
            format!("{}/docs/guide/intro", server.uri()),
            format!("{}/docs/faq", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_file_content_type_uses_parent() {
    let server = MockServer::start().await;
    mount_page(&server, "/docs/report", &page_with_links(&["appendix"])).await;
    mount_head(&server, "/docs/report", "application/pdf").await;

    let links = extract(&server, "/docs/report").await.unwrap();
    assert_eq!(links, vec![format!("{}/docs/appendix", server.uri())]);
}

#[tokio::test]
async fn test_probe_failure_defaults_to_directory() {
    let server = MockServer::start().await;
    mount_page(&server, "/docs/guide", &page_with_links(&["intro"])).await;
    // HEAD falls through to wiremock's default 404

    let links = extract(&server, "/docs/guide").await.unwrap();
    assert_eq!(links, vec![format!("{}/docs/guide/intro", server.uri())]);
}

#[tokio::test]
async fn test_known_extension_skips_probe() {
    let server = MockServer::start().await;
    mount_page(&server, "/blog/post.html", &page_with_links(&["next.html"])).await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let links = extract(&server, "/blog/post.html").await.unwrap();
    assert_eq!(links, vec![format!("{}/blog/next.html", server.uri())]);
}

#[tokio::test]
async fn test_trailing_slash_skips_probe() {
    let server = MockServer::start().await;
    mount_page(&server, "/section/", &page_with_links(&["child"])).await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let links = extract(&server, "/section/").await.unwrap();
    assert_eq!(links, vec![format!("{}/section/child", server.uri())]);
}

#[tokio::test]
async fn test_links_keep_document_order_and_duplicates() {
    let server = MockServer::start().await;
    mount_page(&server, "/", &page_with_links(&["/z", "/a", "/z"])).await;

    let links = extract(&server, "/").await.unwrap();
    let base = server.uri();
    assert_eq!(
        links,
        vec![format!("{}/z", base), format!("{}/a", base), format!("{}/z", base)]
    );
}

#[tokio::test]
async fn test_malformed_html_still_yields_links() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><div><p><a href="/one">One<span></div><a href="/two">Two"#,
    )
    .await;

    let links = extract(&server, "/").await.unwrap();
    let base = server.uri();
    assert!(links.contains(&format!("{}/one", base)));
    assert!(links.contains(&format!("{}/two", base)));
}

#[tokio::test]
async fn test_error_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = extract(&server, "/").await;
    assert!(matches!(result, Err(LinkError::Status { status: 500, .. })));
}

#[tokio::test]
async fn test_probe_strips_parameters() {
    let server = MockServer::start().await;
    mount_head(&server, "/page", "Text/HTML; charset=UTF-8").await;

    let url = Url::parse(&format!("{}/page", server.uri())).unwrap();
    let mime = probe_content_type(&reqwest::Client::new(), &url).await.unwrap();
    assert_eq!(mime, "text/html");
}

#[tokio::test]
async fn test_probe_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/new", server.uri()).as_str()),
        )
        .mount(&server)
        .await;
    mount_head(&server, "/new", "application/pdf").await;

    let url = Url::parse(&format!("{}/old", server.uri())).unwrap();
    let mime = probe_content_type(&reqwest::Client::new(), &url).await.unwrap();
    assert_eq!(mime, "application/pdf");
}

#[tokio::test]
async fn test_probe_blank_content_type() {
    let server = MockServer::start().await;
    mount_head(&server, "/bare", "").await;

    let url = Url::parse(&format!("{}/bare", server.uri())).unwrap();
    let result = probe_content_type(&reqwest::Client::new(), &url).await;
    assert!(matches!(result, Err(LinkError::MissingContentType { .. })));
}

#[tokio::test]
async fn test_resolver_json_is_directory() {
    let server = MockServer::start().await;
    mount_head(&server, "/api/v1.0/items", "application/json").await;

    let resolver = BaseResolver::new(reqwest::Client::new());
    let url = Url::parse(&format!("{}/api/v1.0/items?page=2", server.uri())).unwrap();
    let base = resolver.resolve(&url).await;
    assert_eq!(
        base.as_str(),
        format!("{}/api/v1.0/items/?page=2", server.uri())
    );
}
