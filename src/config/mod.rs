//! Configuration module for Robots-Finder
//!
//! Settings come from built-in defaults, an optional TOML file, and command-line
//! overrides, in that order. The merged result is validated before any crawl starts.
//!
//! # Example
//!
//! ```no_run
//! use robots_finder::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("finder.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, Overrides, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
