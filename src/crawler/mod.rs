//! Crawler module for frontier expansion
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with per-request timeouts
//! - HTML link extraction
//! - Depth-by-depth frontier expansion with bounded concurrency

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{CrawlReport, Crawler, DepthResult, DepthStats};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use parser::LinkExtractor;
