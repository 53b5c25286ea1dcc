//! The tag universe: every tag observed across all cards in one run.
//!
//! Collected after compound inference, this set is the source of truth
//! both registries are reconciled against. It is built once per run and
//! passed between pipeline stages as an immutable snapshot.

use rustc_hash::FxHashSet;

/// Deduplicated set of all observed tags, including derived ones.
#[derive(Clone, Debug, Default)]
pub struct TagUniverse {
    tags: FxHashSet<String>,
}

impl TagUniverse {
    /// Create an empty universe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every tag of one card.
    pub fn observe(&mut self, tags: &[String]) {
        for tag in tags {
            if !self.tags.contains(tag) {
                self.tags.insert(tag.clone());
            }
        }
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if no tag has been observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over the tags in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// All tags, sorted lexicographically. This is the order every
    /// persisted artifact uses.
    #[must_use]
    pub fn sorted(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tags.iter().cloned().collect();
        tags.sort();
        tags
    }
}

impl FromIterator<String> for TagUniverse {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self { tags: iter.into_iter().collect() }
    }
}
