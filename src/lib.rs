//! Robots-Finder: discovers robots.txt files across a site and its subdomains
//!
//! This crate implements a breadth-limited, concurrent crawler that starts from a
//! seed host or IP address, follows in-scope links depth by depth, and probes
//! every host it reaches for a `/robots.txt` file.

pub mod config;
pub mod crawler;
pub mod output;
pub mod resolve;
pub mod robots;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Robots-Finder operations
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Robots-Finder operations
pub type Result<T> = std::result::Result<T, FinderError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlReport, Crawler};
pub use state::{RobotsFoundSet, VisitedSet};
pub use crate::url::{extract_domain, is_in_scope, normalize_url, DomainScope};
