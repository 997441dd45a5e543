//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the identifying user agent
//! - GET requests with a per-request timeout
//! - Content-Type gating before the body is read
//! - Error classification
//!
//! Nothing here retries. Every failure is returned as a `FetchResult` variant so
//! the caller can treat it as "no result" for that URL.

use crate::config::UserAgentConfig;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client, StatusCode};
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// HTTP 200 with the expected Content-Type
    Success {
        /// Final URL after redirects
        final_url: String,
        /// Content-Type header value
        content_type: String,
        /// Response body
        body: String,
    },

    /// HTTP 200 but the Content-Type is not the expected one
    ContentMismatch {
        /// The actual Content-Type received
        content_type: String,
    },

    /// Any status other than 200
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, DNS failure, body read error)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed with reqwest's default limit. Timeouts are applied per
/// request by the callers, not on the client.
///
/// # Example
///
/// ```no_run
/// use robots_finder::config::UserAgentConfig;
/// use robots_finder::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .redirect(Policy::default())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once and checks its status and Content-Type
///
/// # Request Flow
///
/// | Condition | Result |
/// |-----------|--------|
/// | Send fails (timeout, connect, DNS) | `NetworkError` |
/// | Status is not 200 | `HttpError` |
/// | Content-Type does not contain `expected_type` | `ContentMismatch` |
/// | Body cannot be read | `NetworkError` |
/// | Otherwise | `Success` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `timeout` - Timeout for this request
/// * `expected_type` - Substring the Content-Type must contain, e.g. `text/html`
pub async fn fetch_url(
    client: &Client,
    url: &str,
    timeout: Duration,
    expected_type: &str,
) -> FetchResult {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(&e),
    };

    let status = response.status();
    if status != StatusCode::OK {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains(expected_type) {
        return FetchResult::ContentMismatch { content_type };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            content_type,
            body,
        },
        Err(e) => classify_error(&e),
    }
}

fn classify_error(e: &reqwest::Error) -> FetchResult {
    let error = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        e.to_string()
    };

    FetchResult::NetworkError { error }
}
