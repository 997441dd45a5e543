//! Seed construction for host and IP targets
//!
//! A hostname target becomes a single normalized seed. An IP target is looked up
//! with reverse DNS; every PTR name becomes a seed `http://<name>/`, followed by
//! the raw IP seed. Without PTR records the raw IP seed is the only one.

use crate::url::normalize_url;
use crate::UrlError;
use std::net::IpAddr;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::ResolveError;
use trust_dns_resolver::TokioAsyncResolver;
use url::Url;

/// Parses the target as a bare IPv4 or IPv6 address
///
/// ```
/// use robots_finder::resolve::parse_ip;
///
/// assert!(parse_ip("93.184.216.34").is_some());
/// assert!(parse_ip("2606:2800:220:1::").is_some());
/// assert!(parse_ip("example.com").is_none());
/// assert!(parse_ip("http://93.184.216.34/").is_none());
/// ```
pub fn parse_ip(target: &str) -> Option<IpAddr> {
    target.trim().parse().ok()
}

/// Builds the resolver from the system configuration, falling back to defaults
fn build_resolver() -> Result<TokioAsyncResolver, ResolveError> {
    TokioAsyncResolver::tokio_from_system_conf().or_else(|e| {
        tracing::debug!("System resolver configuration unavailable: {}", e);
        TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
    })
}

/// Looks up the hostnames of an IP address
///
/// Returns the PTR names in answer order, without trailing dots and without
/// duplicates. Any failure, including a missing PTR record, yields an empty list.
pub async fn resolve_ip_to_hostnames(ip: IpAddr) -> Vec<String> {
    let resolver = match build_resolver() {
        Ok(resolver) => resolver,
        Err(e) => {
            tracing::warn!("Could not create DNS resolver: {}", e);
            return Vec::new();
        }
    };

    match resolver.reverse_lookup(ip).await {
        Ok(lookup) => clean_hostnames(lookup.iter().map(|name| name.to_string())),
        Err(e) => {
            tracing::debug!("Reverse lookup for {} failed: {}", ip, e);
            Vec::new()
        }
    }
}

/// Strips trailing dots, drops empty names and keeps the first of any duplicates
fn clean_hostnames<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut hostnames: Vec<String> = Vec::new();
    for name in names {
        let name = name.trim_end_matches('.').to_lowercase();
        if !name.is_empty() && !hostnames.contains(&name) {
            hostnames.push(name);
        }
    }
    hostnames
}

/// Formats the seed URL for a bare IP address
fn ip_seed(ip: IpAddr) -> Result<Url, UrlError> {
    let raw = match ip {
        IpAddr::V4(v4) => format!("http://{}/", v4),
        IpAddr::V6(v6) => format!("http://[{}]/", v6),
    };
    normalize_url(&raw)
}

/// Builds the depth-0 seed list for a target
///
/// # Arguments
///
/// * `target` - Hostname, URL or bare IP supplied by the user
/// * `hostnames` - Reverse-DNS names for an IP target; ignored for other targets
///
/// # Examples
///
/// ```
/// use robots_finder::resolve::build_seeds;
///
/// let seeds = build_seeds("example.com", &[]).unwrap();
/// assert_eq!(seeds[0].as_str(), "http://example.com/");
///
/// let seeds = build_seeds("93.184.216.34", &[]).unwrap();
/// assert_eq!(seeds.len(), 1);
/// assert_eq!(seeds[0].as_str(), "http://93.184.216.34/");
/// ```
pub fn build_seeds(target: &str, hostnames: &[String]) -> Result<Vec<Url>, UrlError> {
    let ip = match parse_ip(target) {
        Some(ip) => ip,
        None => return Ok(vec![normalize_url(target)?]),
    };

    let mut seeds = Vec::with_capacity(hostnames.len() + 1);
    for host in hostnames {
        match normalize_url(&format!("http://{}/", host)) {
            Ok(url) => seeds.push(url),
            Err(e) => tracing::debug!("Ignoring resolved hostname {}: {}", host, e),
        }
    }
    seeds.push(ip_seed(ip)?);

    Ok(seeds)
}
