use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Set of robots.txt URLs confirmed to exist
///
/// Membership is final: there is no removal. Entries are kept ordered so the
/// final report can list them without another sort.
#[derive(Debug, Default)]
pub struct RobotsFoundSet {
    urls: Mutex<BTreeSet<String>>,
}

impl RobotsFoundSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a confirmed robots.txt URL
    ///
    /// Returns true only for the first writer of a given URL.
    pub fn insert(&self, url: &str) -> bool {
        let mut urls = self.lock();
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    /// Checks whether a robots.txt URL has been confirmed
    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains(url)
    }

    /// Number of confirmed robots.txt files
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no robots.txt has been found
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Confirmed URLs in ascending order
    pub fn sorted(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.urls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
