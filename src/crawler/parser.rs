//! HTML link extraction
//!
//! Links come from two places:
//! - `<a href="...">` tags, resolved against the page URL
//! - subdomain URLs of the base domain mentioned in the page text
//!
//! The text scan is a best-effort heuristic. It can pick up a longer host that
//! merely starts with a subdomain of the base domain, and it misses mentions
//! without a scheme. Text nodes are concatenated without separators before the
//! scan, so a mention split across inline tags still matches. Anchor extraction
//! is exact.

use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts absolute URLs from fetched HTML for one crawl
///
/// Built once per crawl because the subdomain pattern depends on the base domain.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    subdomain_pattern: Regex,
}

impl LinkExtractor {
    /// Creates an extractor for the given base domain
    ///
    /// The text pattern is `https?://(<label>.)+<base_domain>` with the base
    /// domain escaped literally.
    pub fn new(base_domain: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            r"https?://([a-zA-Z0-9][-a-zA-Z0-9]*\.)+{}",
            regex::escape(base_domain)
        );

        Ok(Self {
            subdomain_pattern: Regex::new(&pattern)?,
        })
    }

    /// Returns every absolute URL reachable from the page
    ///
    /// Anchor hrefs are resolved against `page_url`; text matches are added
    /// verbatim. Never fails: anything that cannot be extracted is skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use robots_finder::crawler::LinkExtractor;
    /// use url::Url;
    ///
    /// let extractor = LinkExtractor::new("example.com").unwrap();
    /// let page = Url::parse("http://example.com/").unwrap();
    /// let html = r#"<a href="/about">About</a> see http://blog.example.com too"#;
    /// let links = extractor.extract(&page, html);
    /// assert!(links.contains("http://example.com/about"));
    /// assert!(links.contains("http://blog.example.com"));
    /// ```
    pub fn extract(&self, page_url: &Url, html: &str) -> HashSet<String> {
        let document = Html::parse_document(html);

        let mut links = extract_anchor_links(&document, page_url);

        let text: String = document.root_element().text().collect();
        for mention in self.subdomain_pattern.find_iter(&text) {
            links.insert(mention.as_str().to_string());
        }

        if !document.errors.is_empty() {
            tracing::trace!(
                "{} HTML parse errors on {}",
                document.errors.len(),
                page_url
            );
        }

        links
    }
}

/// Resolves all `<a href>` targets in the document against the page URL
fn extract_anchor_links(document: &Html, page_url: &Url) -> HashSet<String> {
    let mut links = HashSet::new();

    let a_selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(e) => {
            tracing::debug!("Error extracting links from {}: {:?}", page_url, e);
            return links;
        }
    };

    for element in document.select(&a_selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute_url) = resolve_link(href, page_url) {
                links.insert(absolute_url);
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only links
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url.to_string())
        }
        _ => None,
    }
}
