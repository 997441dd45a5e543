use crate::UrlError;
use url::Url;

/// Normalizes a raw target or link into an absolute HTTP(S) URL
///
/// # Normalization Steps
///
/// 1. Prepend `http://` when the input carries no scheme
/// 2. Parse the URL; reject if malformed or not HTTP(S)
/// 3. Remove the fragment
/// 4. Empty path becomes `/`
///
/// Query strings are kept as they are.
///
/// # Examples
///
/// ```
/// use robots_finder::url::normalize_url;
///
/// let url = normalize_url("example.com").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/");
///
/// let url = normalize_url("https://example.com/page?q=1#top").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page?q=1");
/// ```
pub fn normalize_url(raw: &str) -> Result<Url, UrlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    let mut url = if has_scheme(raw) {
        Url::parse(raw)
    } else {
        Url::parse(&format!("http://{}", raw))
    }
    .map_err(|e| UrlError::Parse(format!("{}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);

    if url.path().is_empty() {
        url.set_path("/");
    }

    Ok(url)
}

/// Returns true if the input starts with `<scheme>://`
///
/// Only the leading characters count, so a `://` inside a query string does not
/// make a scheme-less target look absolute.
fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Returns the scheme and authority of a URL, without path
///
/// ```
/// use robots_finder::url::base_url;
/// use url::Url;
///
/// let url = Url::parse("http://example.com:8080/a/b?c=d").unwrap();
/// assert_eq!(base_url(&url), "http://example.com:8080");
/// ```
pub fn base_url(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Builds the robots.txt location from a base URL
///
/// ```
/// use robots_finder::url::robots_url;
///
/// assert_eq!(robots_url("http://example.com"), "http://example.com/robots.txt");
/// assert_eq!(robots_url("http://example.com/"), "http://example.com/robots.txt");
/// ```
pub fn robots_url(base: &str) -> String {
    format!("{}/robots.txt", base.trim_end_matches('/'))
}
