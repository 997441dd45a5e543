//! State module for tracking crawl progress
//!
//! This module provides the shared sets a crawl mutates from many workers at once.
//!
//! # Components
//!
//! - `VisitedSet`: URLs already dispatched for crawling, at any depth
//! - `RobotsFoundSet`: robots.txt URLs confirmed to exist
//!
//! Both are owned by a single crawl and shared with its workers through `Arc`.
//! Every insertion happens under a lock and reports whether it was the first.

mod robots_found;
mod visited;

// Re-export main types
pub use robots_found::RobotsFoundSet;
pub use visited::VisitedSet;
