use url::Url;

/// Checks whether a host lies within the crawl's base domain
///
/// A host is in scope when it equals the base domain or is a subdomain of it.
/// The subdomain test requires a dot boundary, so `notexample.com` is not a
/// subdomain of `example.com`.
///
/// # Examples
///
/// ```
/// use robots_finder::url::is_in_scope;
///
/// assert!(is_in_scope("example.com", "example.com"));
/// assert!(is_in_scope("sub.example.com", "example.com"));
/// assert!(!is_in_scope("notexample.com", "example.com"));
/// ```
pub fn is_in_scope(host: &str, base_domain: &str) -> bool {
    if host.is_empty() || base_domain.is_empty() {
        return false;
    }

    host == base_domain || host.ends_with(&format!(".{}", base_domain))
}

/// The scope boundary of a single crawl
///
/// Holds the lowercase base domain taken from the first seed URL. It is fixed
/// once built and never changes for the crawl's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainScope {
    base_domain: String,
}

impl DomainScope {
    /// Creates a scope for the given base domain
    pub fn new(base_domain: &str) -> Self {
        Self {
            base_domain: base_domain.to_lowercase(),
        }
    }

    /// Creates a scope from a seed URL's host
    ///
    /// Returns None if the URL has no host.
    pub fn from_seed(seed: &Url) -> Option<Self> {
        seed.host_str().map(Self::new)
    }

    /// The base domain of this scope
    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    /// Checks a host against this scope
    pub fn contains_host(&self, host: &str) -> bool {
        is_in_scope(&host.to_lowercase(), &self.base_domain)
    }

    /// Checks a URL's host against this scope
    pub fn contains(&self, url: &Url) -> bool {
        url.host_str()
            .map_or(false, |host| self.contains_host(host))
    }
}
