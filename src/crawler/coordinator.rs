//! Crawler coordinator - frontier orchestration
//!
//! The crawl advances one depth at a time:
//! 1. Every frontier URL not yet visited is marked visited and dispatched
//! 2. Dispatched URLs run concurrently, bounded by a semaphore of `max_workers` permits
//! 3. The coordinator waits for all of them before building the next frontier
//! 4. The union of their links, normalized, in scope and unvisited, becomes that frontier
//!
//! Each dispatched URL always gets a robots.txt probe of its host. Its page is only
//! fetched and parsed for links below `max_depth`.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::parser::LinkExtractor;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::robots::RobotsChecker;
use crate::state::{RobotsFoundSet, VisitedSet};
use crate::url::{base_url, normalize_url, DomainScope};
use crate::FinderError;
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// What a single depth iteration produced
#[derive(Debug, Clone, Default)]
pub struct DepthResult {
    /// URLs actually dispatched (frontier minus already visited)
    pub dispatched: usize,
    /// Normalized, in-scope, unvisited URLs for the next depth
    pub next_frontier: HashSet<String>,
}

/// Per-depth statistics kept in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthStats {
    pub depth: u32,
    pub frontier: usize,
    pub dispatched: usize,
    pub discovered: usize,
}

/// Final state of a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Base domain that bounded the crawl
    pub base_domain: String,
    /// Confirmed robots.txt URLs, ascending
    pub robots_found: Vec<String>,
    /// Every URL dispatched during the crawl, ascending
    pub visited: Vec<String>,
    /// One entry per depth iteration that ran
    pub depths: Vec<DepthStats>,
}

impl CrawlReport {
    /// Number of URLs dispatched during the crawl
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// The per-depth progress line shown on stdout
fn progress_line(urls: usize, depth: u32) -> String {
    format!("Crawling {} URLs at depth {}...", urls, depth)
}

/// Main crawler structure
///
/// Cheap to clone; clones share the same visited and found sets, which is how
/// spawned workers reach them.
#[derive(Debug, Clone)]
pub struct Crawler {
    inner: Arc<CrawlerInner>,
}

#[derive(Debug)]
struct CrawlerInner {
    config: CrawlerConfig,
    client: Client,
    scope: DomainScope,
    extractor: LinkExtractor,
    robots: RobotsChecker,
    visited: VisitedSet,
}

impl Crawler {
    /// Creates a crawler with its own HTTP client
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `scope` - Scope boundary, fixed for the crawl's lifetime
    pub fn new(config: &Config, scope: DomainScope) -> Result<Self, FinderError> {
        let client = build_http_client(&config.user_agent)?;
        Self::with_client(config.crawler.clone(), client, scope)
    }

    /// Creates a crawler around an existing HTTP client
    ///
    /// The client's own settings are kept; the crawl's timeout is applied per request.
    pub fn with_client(
        config: CrawlerConfig,
        client: Client,
        scope: DomainScope,
    ) -> Result<Self, FinderError> {
        let extractor = LinkExtractor::new(scope.base_domain())?;
        let robots = RobotsChecker::new(client.clone(), config.timeout());

        Ok(Self {
            inner: Arc::new(CrawlerInner {
                config,
                client,
                scope,
                extractor,
                robots,
                visited: VisitedSet::new(),
            }),
        })
    }

    /// The crawl's scope boundary
    pub fn scope(&self) -> &DomainScope {
        &self.inner.scope
    }

    /// URLs dispatched so far
    pub fn visited(&self) -> &VisitedSet {
        &self.inner.visited
    }

    /// robots.txt URLs confirmed so far
    pub fn robots_found(&self) -> &RobotsFoundSet {
        self.inner.robots.found()
    }

    /// The HTTP client shared by every request of this crawl
    pub fn client(&self) -> &Client {
        &self.inner.client
    }

    /// Runs the depth loop from the given seeds until the frontier is empty or
    /// `max_depth` has been processed
    pub async fn run(&self, seeds: &[Url]) -> CrawlReport {
        let max_depth = self.inner.config.max_depth;
        let mut frontier: HashSet<String> = seeds.iter().map(Url::to_string).collect();
        let mut depths = Vec::new();

        tracing::info!(
            "Crawling within {} (max depth {}, {} workers)",
            self.inner.scope.base_domain(),
            max_depth,
            self.inner.config.max_workers
        );

        for depth in 0..=max_depth {
            if frontier.is_empty() {
                break;
            }

            println!("{}", progress_line(frontier.len(), depth));

            let result = self.crawl_depth(&frontier, depth).await;

            tracing::debug!(
                "Depth {}: dispatched {}, discovered {} new URLs",
                depth,
                result.dispatched,
                result.next_frontier.len()
            );

            depths.push(DepthStats {
                depth,
                frontier: frontier.len(),
                dispatched: result.dispatched,
                discovered: result.next_frontier.len(),
            });

            frontier = result.next_frontier;
        }

        CrawlReport {
            base_domain: self.inner.scope.base_domain().to_string(),
            robots_found: self.robots_found().sorted(),
            visited: self.visited().sorted(),
            depths,
        }
    }

    /// Processes one depth level and waits for all of its work to finish
    ///
    /// URLs already visited are skipped; every other URL is marked visited before
    /// its task is spawned, so it is crawled at most once across the whole run.
    pub async fn crawl_depth(&self, frontier: &HashSet<String>, depth: u32) -> DepthResult {
        let semaphore = Arc::new(Semaphore::new(self.inner.config.max_workers.max(1)));
        let mut tasks = JoinSet::new();
        let mut dispatched = 0;

        for raw in frontier {
            if !self.inner.visited.insert(raw) {
                continue;
            }

            let url = match Url::parse(raw) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("Skipping unparseable URL {}: {}", raw, e);
                    continue;
                }
            };

            dispatched += 1;
            let crawler = self.clone();
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return HashSet::new(),
                };
                crawler.crawl_url(&url, depth).await
            });
        }

        let mut candidates = HashSet::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(links) => candidates.extend(links),
                Err(e) => tracing::warn!("Crawl task failed: {}", e),
            }
        }

        DepthResult {
            dispatched,
            next_frontier: self.next_frontier(candidates),
        }
    }

    /// Crawls a single URL at the given depth and returns the links it yields
    ///
    /// Returns an empty set when the depth is past the limit, the host is out of
    /// scope, the URL is at the terminal depth, or the page could not be used.
    pub async fn crawl_url(&self, url: &Url, depth: u32) -> HashSet<String> {
        let max_depth = self.inner.config.max_depth;

        if depth > max_depth {
            return HashSet::new();
        }

        if !self.inner.scope.contains(url) {
            tracing::debug!("Out of scope: {}", url);
            return HashSet::new();
        }

        self.inner.robots.check(&base_url(url)).await;

        if depth == max_depth {
            return HashSet::new();
        }

        match fetch_url(
            &self.inner.client,
            url.as_str(),
            self.inner.config.timeout(),
            "text/html",
        )
        .await
        {
            FetchResult::Success {
                final_url, body, ..
            } => {
                let page_url = Url::parse(&final_url).unwrap_or_else(|_| url.clone());
                self.inner.extractor.extract(&page_url, &body)
            }
            FetchResult::ContentMismatch { content_type } => {
                tracing::debug!("Not HTML: {} ({})", url, content_type);
                HashSet::new()
            }
            FetchResult::HttpError { status_code } => {
                tracing::debug!("Error crawling {}: HTTP {}", url, status_code);
                HashSet::new()
            }
            FetchResult::NetworkError { error } => {
                tracing::debug!("Error crawling {}: {}", url, error);
                HashSet::new()
            }
        }
    }

    /// Normalizes candidates and keeps those in scope and not yet visited
    fn next_frontier(&self, candidates: HashSet<String>) -> HashSet<String> {
        candidates
            .into_iter()
            .filter_map(|link| match normalize_url(&link) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::trace!("Dropping link {}: {}", link, e);
                    None
                }
            })
            .filter(|url| self.inner.scope.contains(url))
            .map(String::from)
            .filter(|url| !self.inner.visited.contains(url))
            .collect()
    }
}
