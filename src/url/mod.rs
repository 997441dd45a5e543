//! URL handling module for Robots-Finder
//!
//! This module provides URL normalization, host extraction, and the domain
//! scoping rule that keeps a crawl inside its base domain.

mod domain;
mod normalize;
mod scope;

// Re-export main functions
pub use domain::extract_domain;
pub use normalize::{base_url, normalize_url, robots_url};
pub use scope::{is_in_scope, DomainScope};
