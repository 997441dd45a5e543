//! Output module for presenting crawl results
//!
//! This module handles:
//! - Printing the discovered robots.txt URLs and crawl totals
//! - The optional yes/no prompt after a crawl
//! - Fetching and printing robots.txt contents
//!
//! None of this is part of the crawl itself; the binary decides what to call.

mod report;

pub use report::{confirm, write_crawl_totals, write_results, write_robots_contents};
