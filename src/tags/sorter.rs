//! Display-priority ordering for a card's tag list.
//!
//! Tags sort by a fixed priority table; the first table entry that
//! distinguishes two tags decides their order, and tags the table
//! cannot tell apart fall back to plain lexicographic order. The table
//! is applied through a single comparator rather than by bucketing so
//! the lexicographic fallback composes with it into one total order.

use std::cmp::Ordering;

/// How a priority entry matches a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityKind {
    /// The tag must equal the pattern.
    Exactly,
    /// The tag must start with the pattern.
    StartsWith,
}

/// One entry of the priority table.
#[derive(Clone, Copy, Debug)]
pub struct PriorityEntry {
    pub pattern: &'static str,
    pub kind: PriorityKind,
}

/// Display-priority table, highest priority first.
///
/// A tag matching an earlier entry sorts before any tag that does not
/// match that entry.
pub const PRIORITY_TABLE: &[PriorityEntry] = &[
    PriorityEntry { pattern: "deck_restriction", kind: PriorityKind::Exactly },
    PriorityEntry { pattern: "fast_play", kind: PriorityKind::Exactly },
    PriorityEntry { pattern: "timing_fast_", kind: PriorityKind::StartsWith },
    PriorityEntry { pattern: "customizable", kind: PriorityKind::Exactly },
    PriorityEntry { pattern: "unidentified", kind: PriorityKind::Exactly },
    PriorityEntry { pattern: "limit_", kind: PriorityKind::StartsWith },
    PriorityEntry { pattern: "uses_type_", kind: PriorityKind::StartsWith },
    PriorityEntry { pattern: "uses_starting_", kind: PriorityKind::StartsWith },
];

impl PriorityEntry {
    fn matches(&self, tag: &str) -> bool {
        match self.kind {
            PriorityKind::Exactly => tag == self.pattern,
            PriorityKind::StartsWith => tag.starts_with(self.pattern),
        }
    }
}

/// Compare two tags under the priority table.
///
/// Walks the table in order; the first entry matched by exactly one of
/// the two tags decides. Ties fall back to lexicographic order, so the
/// result is a total order and sorting with it is idempotent.
#[must_use]
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    for entry in PRIORITY_TABLE {
        match (entry.matches(a), entry.matches(b)) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    a.cmp(b)
}

/// Sort a tag list in place by display priority.
pub fn sort_tags(tags: &mut [String]) {
    tags.sort_by(|a, b| compare_tags(a, b));
}
