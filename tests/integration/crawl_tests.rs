//! Crawl traversal tests

use crate::{crawler, crawler_with_excludes, mount_page, page_with_links};
use link_validator::config::Config;
use link_validator::Crawler;
use std::collections::HashSet;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a small site:
///
/// ```text
/// /  -> /a, /b
/// /a -> /c
/// /c -> /d
/// ```
async fn mount_tree(server: &MockServer) {
    mount_page(server, "/", &page_with_links(&["/a", "/b"])).await;
    mount_page(server, "/a", &page_with_links(&["/c"])).await;
    mount_page(server, "/b", &page_with_links(&[])).await;
    mount_page(server, "/c", &page_with_links(&["/d"])).await;
    mount_page(server, "/d", &page_with_links(&[])).await;
}

fn sorted(mut urls: Vec<String>) -> Vec<String> {
    urls.sort();
    urls
}

#[tokio::test]
async fn test_depth_zero_returns_only_seed() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let seed = format!("{}/", base);
    let urls = crawler().crawl_website(&seed, 0).await.unwrap();
    assert_eq!(urls, vec![seed]);
}

#[tokio::test]
async fn test_depth_one() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_tree(&server).await;

    let seed = format!("{}/", base);
    let urls = crawler().crawl_website(&seed, 1).await.unwrap();

    assert_eq!(urls[0], seed);
    assert_eq!(
        sorted(urls),
        sorted(vec![seed.clone(), format!("{}/a", base), format!("{}/b", base)])
    );
}

#[tokio::test]
async fn test_depth_two_visits_depth_first() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_tree(&server).await;

    let seed = format!("{}/", base);
    let urls = crawler().crawl_website(&seed, 2).await.unwrap();

    assert_eq!(
        urls,
        vec![
            seed.clone(),
            format!("{}/a", base),
            format!("{}/c", base),
            format!("{}/b", base),
        ]
    );
    assert!(!urls.contains(&format!("{}/d", base)));
}

#[tokio::test]
async fn test_pages_at_max_depth_are_not_fetched() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/", &page_with_links(&["/leaf"])).await;
    Mock::given(method("GET"))
        .and(path("/leaf"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let seed = format!("{}/", base);
    let urls = crawler().crawl_website(&seed, 1).await.unwrap();
    assert_eq!(urls, vec![seed, format!("{}/leaf", base)]);
}

#[tokio::test]
async fn test_cycles_terminate_with_each_url_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/", &page_with_links(&["/a", "/b", "/"])).await;
    mount_page(&server, "/a", &page_with_links(&["/b", "/"])).await;
    mount_page(&server, "/b", &page_with_links(&["/a", "/"])).await;

    let seed = format!("{}/", base);
    let urls = crawler().crawl_website(&seed, 10).await.unwrap();

    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0], seed);
    assert_eq!(
        sorted(urls),
        sorted(vec![seed.clone(), format!("{}/a", base), format!("{}/b", base)])
    );
}

#[tokio::test]
async fn test_excluded_urls_never_reported_or_fetched() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        &page_with_links(&["/public", "/private/secret", "/files/report.pdf"]),
    )
    .await;
    mount_page(&server, "/public", &page_with_links(&[])).await;
    Mock::given(method("GET"))
        .and(path("/private/secret"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let seed = format!("{}/", base);
    let urls = crawler_with_excludes(&["/private/", r"\.pdf$"])
        .crawl_website(&seed, 3)
        .await
        .unwrap();

    assert_eq!(urls, vec![seed, format!("{}/public", base)]);
}

#[tokio::test]
async fn test_seed_is_never_excluded() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_page(&server, "/", &page_with_links(&["/next"])).await;
    mount_page(&server, "/next", &page_with_links(&[])).await;

    let seed = format!("{}/", base);
    let urls = crawler_with_excludes(&["127\\.0\\.0\\.1"])
        .crawl_website(&seed, 2)
        .await
        .unwrap();

    assert_eq!(urls, vec![seed]);
}

#[tokio::test]
async fn test_foreign_hosts_and_non_page_links_dropped() {
    let server = MockServer::start().await;
    let base = server.uri();
    let port = url::Url::parse(&base).unwrap().port().unwrap();

    let localhost_alias = format!("http://localhost:{}/alias", port);
    mount_page(
        &server,
        "/",
        &page_with_links(&[
            "/inside",
            "https://external.example.org/page",
            &localhost_alias,
            "#section",
            "mailto:team@example.com",
            "javascript:void(0)",
            "",
        ]),
    )
    .await;
    mount_page(&server, "/inside", &page_with_links(&[])).await;

    let seed = format!("{}/", base);
    let urls = crawler().crawl_website(&seed, 2).await.unwrap();

    assert_eq!(urls, vec![seed, format!("{}/inside", base)]);
}

#[tokio::test]
async fn test_failed_pages_prune_branch() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/", &page_with_links(&["/broken", "/ok"])).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(&server, "/ok", &page_with_links(&[])).await;

    let seed = format!("{}/", base);
    let urls = crawler().crawl_website(&seed, 3).await.unwrap();

    assert_eq!(
        urls,
        vec![seed, format!("{}/broken", base), format!("{}/ok", base)]
    );
}

#[tokio::test]
async fn test_seed_failure_still_reports_seed() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let seed = format!("{}/", base);
    let urls = crawler().crawl_website(&seed, 3).await.unwrap();
    assert_eq!(urls, vec![seed]);
}

#[tokio::test]
async fn test_duplicate_links_visited_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/", &page_with_links(&["/dup", "/dup", "/dup"])).await;
    Mock::given(method("GET"))
        .and(path("/dup"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let seed = format!("{}/", base);
    let urls = crawler().crawl_website(&seed, 3).await.unwrap();
    assert_eq!(urls, vec![seed, format!("{}/dup", base)]);
}

#[tokio::test]
async fn test_deeper_crawls_extend_shallower_ones() {
    let server = MockServer::start().await;
    let base = server.uri();

    // /c is reachable both directly and through /a
    mount_page(&server, "/", &page_with_links(&["/a", "/c"])).await;
    mount_page(&server, "/a", &page_with_links(&["/c"])).await;
    mount_page(&server, "/c", &page_with_links(&["/d"])).await;
    mount_page(&server, "/d", &page_with_links(&[])).await;

    let seed = format!("{}/", base);
    let mut previous: HashSet<String> = HashSet::new();
    for depth in 0..=4 {
        let urls = crawler().crawl_website(&seed, depth).await.unwrap();
        assert_eq!(urls[0], seed);

        let current: HashSet<String> = urls.into_iter().collect();
        assert!(
            current.is_superset(&previous),
            "depth {} lost {:?}",
            depth,
            previous.difference(&current).collect::<Vec<_>>()
        );
        previous = current;
    }

    let reachable: HashSet<String> = ["/", "/a", "/c", "/d"]
        .iter()
        .map(|route| format!("{}{}", base, route))
        .collect();
    assert_eq!(previous, reachable);
}

#[tokio::test]
async fn test_configured_user_agent_sent_on_crawl_requests() {
    let server = MockServer::start().await;
    let base = server.uri();
    let agent = "CrawlAgent/2.0";

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", agent))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(page_with_links(&["/docs"]).into_bytes(), "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs"))
        .and(header("user-agent", agent))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(page_with_links(&["intro"]).into_bytes(), "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;
    // Content-type lookup for the extensionless /docs page
    Mock::given(method("HEAD"))
        .and(path("/docs"))
        .and(header("user-agent", agent))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        base_url: Some(format!("{}/", base)),
        timeout: 5,
        user_agent: agent.to_string(),
        ..Config::default()
    };
    let seed = format!("{}/", base);
    let urls = Crawler::new(&config)
        .unwrap()
        .crawl_website(&seed, 2)
        .await
        .unwrap();

    assert_eq!(
        urls,
        vec![seed, format!("{}/docs", base), format!("{}/docs/intro", base)]
    );
}
