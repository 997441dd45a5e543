use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Set of URLs already dispatched for crawling
///
/// Grows monotonically. `insert` is the only way in and tells the caller whether
/// it won the race for that URL, which is what guarantees a URL is crawled at most
/// once even when two sources hand it over concurrently.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URL as visited
    ///
    /// # Returns
    ///
    /// * `true` - The URL was not visited before; the caller owns its crawl
    /// * `false` - Someone already marked it
    pub fn insert(&self, url: &str) -> bool {
        let mut urls = self.lock();
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    /// Checks whether a URL was already visited
    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains(url)
    }

    /// Number of visited URLs
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing was visited yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Sorted copy of the visited URLs
    pub fn sorted(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.lock().iter().cloned().collect();
        urls.sort();
        urls
    }

    // A panicking worker cannot leave the set half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.urls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
