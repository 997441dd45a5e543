//! Robots.txt probing
//!
//! A robots.txt counts as found when the GET returns HTTP 200 with a
//! `text/plain` Content-Type. Each robots.txt URL is fetched at most once per
//! crawl and nothing is retried.

use crate::crawler::{fetch_url, FetchResult};
use crate::state::{RobotsFoundSet, VisitedSet};
use crate::url::robots_url;
use reqwest::Client;
use std::time::Duration;

/// Outcome of probing one host for robots.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The file exists and was recorded by this probe
    Found,
    /// Already recorded earlier in the crawl; nothing fetched
    AlreadyFound,
    /// Another probe for the same URL already ran or is in flight; nothing fetched
    AlreadyProbed,
    /// Non-200 response
    NotFound { status_code: u16 },
    /// 200 response that is not `text/plain`
    WrongContentType { content_type: String },
    /// Timeout, connection or DNS failure
    Failed { error: String },
}

/// Probes hosts for robots.txt and owns the crawl's `RobotsFoundSet`
#[derive(Debug)]
pub struct RobotsChecker {
    client: Client,
    timeout: Duration,
    found: RobotsFoundSet,
    probed: VisitedSet,
}

impl RobotsChecker {
    /// Creates a checker that uses `client` with a per-request `timeout`
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            found: RobotsFoundSet::new(),
            probed: VisitedSet::new(),
        }
    }

    /// The robots.txt URLs confirmed so far
    pub fn found(&self) -> &RobotsFoundSet {
        &self.found
    }

    /// Probes `<base>/robots.txt`
    ///
    /// # Arguments
    ///
    /// * `base` - Scheme and host (and port), e.g. `http://example.com`
    ///
    /// Failures are returned as outcomes and never abort the crawl.
    pub async fn check(&self, base: &str) -> ProbeOutcome {
        let url = robots_url(base);

        if self.found.contains(&url) {
            return ProbeOutcome::AlreadyFound;
        }

        if !self.probed.insert(&url) {
            return ProbeOutcome::AlreadyProbed;
        }

        let outcome = match fetch_url(&self.client, &url, self.timeout, "text/plain").await {
            FetchResult::Success { .. } => {
                if self.found.insert(&url) {
                    ProbeOutcome::Found
                } else {
                    ProbeOutcome::AlreadyFound
                }
            }
            FetchResult::ContentMismatch { content_type } => {
                ProbeOutcome::WrongContentType { content_type }
            }
            FetchResult::HttpError { status_code } => ProbeOutcome::NotFound { status_code },
            FetchResult::NetworkError { error } => ProbeOutcome::Failed { error },
        };

        match &outcome {
            ProbeOutcome::Found => tracing::debug!("Found robots.txt: {}", url),
            ProbeOutcome::NotFound { status_code } => {
                tracing::debug!("No robots.txt at: {} (Status: {})", url, status_code)
            }
            ProbeOutcome::WrongContentType { content_type } => tracing::debug!(
                "No robots.txt at: {} (Content-Type: {})",
                url,
                content_type
            ),
            ProbeOutcome::Failed { error } => {
                tracing::debug!("Error checking {}: {}", url, error)
            }
            ProbeOutcome::AlreadyFound | ProbeOutcome::AlreadyProbed => {}
        }

        outcome
    }
}
