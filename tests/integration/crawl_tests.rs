//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test the full crawl
//! cycle end-to-end. The HTTP client overrides DNS so that `example.com` and its
//! subdomains all land on the mock server; the Host header tells them apart.

use reqwest::Client;
use robots_finder::config::CrawlerConfig;
use robots_finder::crawler::Crawler;
use robots_finder::resolve::build_seeds;
use robots_finder::url::DomainScope;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a client that resolves every given host to the mock server
fn client_for(server: &MockServer, hosts: &[&str]) -> Client {
    let addr = *server.address();
    let mut builder = Client::builder().user_agent("TestFinder/1.0 (+https://example.com/)");
    for host in hosts {
        builder = builder.resolve(host, addr);
    }
    builder.build().expect("Failed to build client")
}

/// `host:port` as sent in the Host header
fn authority(host: &str, server: &MockServer) -> String {
    format!("{}:{}", host, server.address().port())
}

/// Absolute URL on a host served by the mock server
fn url_on(host: &str, server: &MockServer, path: &str) -> String {
    format!("http://{}{}", authority(host, server), path)
}

fn crawler_config(max_depth: u32) -> CrawlerConfig {
    CrawlerConfig {
        max_depth,
        timeout_secs: 1,
        max_workers: 4,
    }
}

fn crawler(server: &MockServer, hosts: &[&str], max_depth: u32) -> Crawler {
    Crawler::with_client(
        crawler_config(max_depth),
        client_for(server, hosts),
        DomainScope::new("example.com"),
    )
    .expect("Failed to create crawler")
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_raw(body, "text/html; charset=utf-8")
}

fn plain(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/plain")
        .set_body_string(body)
}

async fn mount_robots(server: &MockServer, host: &str, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .and(header("host", authority(host, server).as_str()))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, host: &str, page: &str, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .and(header("host", authority(host, server).as_str()))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

fn seed(url: &str) -> Vec<Url> {
    vec![Url::parse(url).expect("Failed to parse seed")]
}

#[tokio::test]
async fn test_depth_zero_probes_robots_only() {
    let server = MockServer::start().await;

    mount_robots(&server, "example.com", plain("User-agent: *\nDisallow:"), 1).await;
    mount_page(
        &server,
        "example.com",
        "/",
        html(r#"<a href="/never">never</a>"#.to_string()),
        0,
    )
    .await;

    let crawler = crawler(&server, &["example.com"], 0);
    let report = crawler.run(&seed(&url_on("example.com", &server, "/"))).await;

    assert_eq!(
        report.robots_found,
        vec![url_on("example.com", &server, "/robots.txt")]
    );
    assert_eq!(report.visited_count(), 1);
    assert_eq!(report.depths.len(), 1);
}

#[tokio::test]
async fn test_next_frontier_is_scoped() {
    let server = MockServer::start().await;

    mount_robots(&server, "example.com", ResponseTemplate::new(404), 1).await;
    mount_page(
        &server,
        "example.com",
        "/",
        html(format!(
            r#"<html><body>
            <a href="{}">A</a>
            <a href="{}">B</a>
            <a href="http://evil.com/c">C</a>
            </body></html>"#,
            url_on("example.com", &server, "/a"),
            url_on("sub.example.com", &server, "/b"),
        )),
        1,
    )
    .await;

    let crawler = crawler(&server, &["example.com", "sub.example.com"], 1);
    let frontier: HashSet<String> = [url_on("example.com", &server, "/")].into_iter().collect();
    let result = crawler.crawl_depth(&frontier, 0).await;

    let expected: HashSet<String> = [
        url_on("example.com", &server, "/a"),
        url_on("sub.example.com", &server, "/b"),
    ]
    .into_iter()
    .collect();

    assert_eq!(result.dispatched, 1);
    assert_eq!(result.next_frontier, expected);
}

#[tokio::test]
async fn test_terminal_depth_probes_but_does_not_fetch() {
    let server = MockServer::start().await;

    mount_robots(&server, "example.com", ResponseTemplate::new(404), 1).await;
    mount_robots(&server, "sub.example.com", plain("User-agent: *"), 1).await;
    mount_page(
        &server,
        "example.com",
        "/",
        html(format!(
            r#"<a href="/a">A</a><a href="{}">B</a><a href="http://evil.com/c">C</a>"#,
            url_on("sub.example.com", &server, "/b"),
        )),
        1,
    )
    .await;
    mount_page(&server, "example.com", "/a", html(String::new()), 0).await;
    mount_page(&server, "sub.example.com", "/b", html(String::new()), 0).await;

    let crawler = crawler(&server, &["example.com", "sub.example.com"], 1);
    let report = crawler.run(&seed(&url_on("example.com", &server, "/"))).await;

    assert_eq!(
        report.robots_found,
        vec![url_on("sub.example.com", &server, "/robots.txt")]
    );
    assert_eq!(report.visited_count(), 3);
    assert!(!report.visited.iter().any(|u| u.contains("evil.com")));
    assert_eq!(report.depths.len(), 2);
}

#[tokio::test]
async fn test_missing_robots_does_not_stop_crawl() {
    let server = MockServer::start().await;

    mount_robots(&server, "example.com", ResponseTemplate::new(404), 1).await;
    mount_page(
        &server,
        "example.com",
        "/",
        html(r#"<a href="/a">A</a>"#.to_string()),
        1,
    )
    .await;
    mount_page(
        &server,
        "example.com",
        "/a",
        html(r#"<a href="/b">B</a>"#.to_string()),
        1,
    )
    .await;

    let crawler = crawler(&server, &["example.com"], 2);
    let report = crawler.run(&seed(&url_on("example.com", &server, "/"))).await;

    assert!(report.robots_found.is_empty());
    assert_eq!(
        report.visited,
        vec![
            url_on("example.com", &server, "/"),
            url_on("example.com", &server, "/a"),
            url_on("example.com", &server, "/b"),
        ]
    );
}

#[tokio::test]
async fn test_each_url_crawled_once() {
    let server = MockServer::start().await;

    mount_robots(&server, "example.com", plain("User-agent: *"), 1).await;
    mount_page(
        &server,
        "example.com",
        "/",
        html(r#"<a href="/left">L</a><a href="/right">R</a>"#.to_string()),
        1,
    )
    .await;
    mount_page(
        &server,
        "example.com",
        "/left",
        html(r#"<a href="/shared">S</a><a href="/">home</a>"#.to_string()),
        1,
    )
    .await;
    mount_page(
        &server,
        "example.com",
        "/right",
        html(r#"<a href="/shared#top">S</a><a href="/left">L</a>"#.to_string()),
        1,
    )
    .await;
    mount_page(
        &server,
        "example.com",
        "/shared",
        html(r#"<a href="/">home</a>"#.to_string()),
        1,
    )
    .await;

    let crawler = crawler(&server, &["example.com"], 3);
    let report = crawler.run(&seed(&url_on("example.com", &server, "/"))).await;

    assert_eq!(report.visited_count(), 4);
    let unique: HashSet<&String> = report.visited.iter().collect();
    assert_eq!(unique.len(), report.visited.len());

    // The cycle back to "/" ends the crawl before max_depth
    assert_eq!(report.depths.len(), 3);
    assert_eq!(report.depths[2].discovered, 0);
}

#[tokio::test]
async fn test_subdomain_mentions_in_text_are_followed() {
    let server = MockServer::start().await;

    mount_robots(&server, "example.com", plain("User-agent: *"), 1).await;
    mount_page(
        &server,
        "example.com",
        "/",
        html(
            "<p>Documentation moved to https://docs.example.com/guide, \
             status at http://status.eu.example.com</p>"
                .to_string(),
        ),
        1,
    )
    .await;

    let crawler = crawler(&server, &["example.com"], 1);
    let frontier: HashSet<String> = [url_on("example.com", &server, "/")].into_iter().collect();
    let result = crawler.crawl_depth(&frontier, 0).await;

    let expected: HashSet<String> = [
        "https://docs.example.com/".to_string(),
        "http://status.eu.example.com/".to_string(),
    ]
    .into_iter()
    .collect();
    assert_eq!(result.next_frontier, expected);
    assert_eq!(
        crawler.robots_found().sorted(),
        vec![url_on("example.com", &server, "/robots.txt")]
    );
}

#[tokio::test]
async fn test_non_html_pages_yield_no_links() {
    let server = MockServer::start().await;

    mount_robots(&server, "example.com", ResponseTemplate::new(404), 1).await;
    mount_page(
        &server,
        "example.com",
        "/",
        ResponseTemplate::new(200)
            .set_body_raw(r#"{"link": "<a href='/hidden'>x</a>"}"#, "application/json"),
        1,
    )
    .await;

    let crawler = crawler(&server, &["example.com"], 2);
    let report = crawler.run(&seed(&url_on("example.com", &server, "/"))).await;

    assert_eq!(report.visited_count(), 1);
    assert_eq!(report.depths.len(), 1);
}

#[tokio::test]
async fn test_slow_page_only_loses_its_own_links() {
    let server = MockServer::start().await;

    mount_robots(&server, "example.com", ResponseTemplate::new(404), 1).await;
    mount_page(
        &server,
        "example.com",
        "/",
        html(r#"<a href="/slow">slow</a><a href="/fast">fast</a>"#.to_string()),
        1,
    )
    .await;
    mount_page(
        &server,
        "example.com",
        "/slow",
        html(r#"<a href="/behind-slow">x</a>"#.to_string()).set_delay(Duration::from_secs(3)),
        1,
    )
    .await;
    mount_page(
        &server,
        "example.com",
        "/fast",
        html(r#"<a href="/behind-fast">y</a>"#.to_string()),
        1,
    )
    .await;

    let crawler = crawler(&server, &["example.com"], 2);
    let report = crawler.run(&seed(&url_on("example.com", &server, "/"))).await;

    assert!(report
        .visited
        .contains(&url_on("example.com", &server, "/behind-fast")));
    assert!(!report
        .visited
        .contains(&url_on("example.com", &server, "/behind-slow")));
}

#[tokio::test]
async fn test_out_of_scope_seed_is_visited_but_not_probed() {
    let server = MockServer::start().await;

    mount_robots(&server, "example.com", plain("User-agent: *"), 1).await;
    mount_robots(&server, "other.org", plain("User-agent: *"), 0).await;
    mount_page(&server, "example.com", "/", html(String::new()), 1).await;
    mount_page(&server, "other.org", "/", html(String::new()), 0).await;

    let seeds = vec![
        Url::parse(&url_on("example.com", &server, "/")).unwrap(),
        Url::parse(&url_on("other.org", &server, "/")).unwrap(),
    ];

    let crawler = crawler(&server, &["example.com", "other.org"], 1);
    let report = crawler.run(&seeds).await;

    assert_eq!(report.visited_count(), 2);
    assert_eq!(report.robots_found.len(), 1);
}

#[tokio::test]
async fn test_empty_seed_list_terminates_immediately() {
    let server = MockServer::start().await;
    let crawler = crawler(&server, &[], 2);

    let report = crawler.run(&[]).await;

    assert!(report.depths.is_empty());
    assert_eq!(report.visited_count(), 0);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[test]
fn test_ip_without_reverse_dns_seeds_raw_ip() {
    let seeds = build_seeds("93.184.216.34", &[]).unwrap();
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].as_str(), "http://93.184.216.34/");

    let scope = DomainScope::from_seed(&seeds[0]).unwrap();
    assert_eq!(scope.base_domain(), "93.184.216.34");
}
