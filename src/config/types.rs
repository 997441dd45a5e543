use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Robots-Finder
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum link-traversal depth from the seed URLs
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum number of concurrent in-flight crawl operations
    #[serde(rename = "max-workers")]
    pub max_workers: usize,
}

impl CrawlerConfig {
    /// Per-request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            timeout_secs: 10,
            max_workers: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value
    ///
    /// Format: `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{})",
            self.crawler_name, self.crawler_version, self.contact_url
        )
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "RobotsTxtFinder".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://github.com/example/robots-txt-finder".to_string(),
        }
    }
}

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_depth: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub max_workers: Option<usize>,
}

impl Config {
    /// Applies command-line overrides on top of the loaded values
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(depth) = overrides.max_depth {
            self.crawler.max_depth = depth;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.crawler.timeout_secs = timeout;
        }
        if let Some(workers) = overrides.max_workers {
            self.crawler.max_workers = workers;
        }
    }
}
