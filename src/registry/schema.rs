//! Enum-form registry: the schema's flat list of known tag names.
//!
//! On disk this is `{ "enum": ["tag_a", "tag_b", ...] }`. There is no
//! metadata to preserve, so reconciliation rewrites the list as the
//! sorted universe and only has to report what changed.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::tags::TagUniverse;

use super::ReconcileOutcome;

/// The schema's tag enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaTags {
    #[serde(rename = "enum")]
    pub variants: Vec<String>,
}

impl SchemaTags {
    /// Replace the enumeration with the universe, sorted and
    /// deduplicated, and report the diff.
    pub fn reconcile(&mut self, universe: &TagUniverse) -> ReconcileOutcome {
        let known: FxHashSet<&str> = self.variants.iter().map(String::as_str).collect();

        let mut added: Vec<String> = universe
            .iter()
            .filter(|tag| !known.contains(tag))
            .map(str::to_string)
            .collect();
        added.sort();

        let mut removed: Vec<String> = known
            .iter()
            .filter(|tag| !universe.contains(tag))
            .map(|tag| tag.to_string())
            .collect();
        removed.sort();

        self.variants = universe.sorted();

        ReconcileOutcome { added, removed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(tags: &[&str]) -> TagUniverse {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_adds_and_removes() {
        let mut schema = SchemaTags {
            variants: vec!["a".to_string(), "b".to_string()],
        };
        let outcome = schema.reconcile(&universe(&["b", "c"]));

        assert_eq!(outcome.added, vec!["c"]);
        assert_eq!(outcome.removed, vec!["a"]);
        assert_eq!(schema.variants, vec!["b", "c"]);
    }

    #[test]
    fn test_unchanged_when_already_in_sync() {
        let mut schema = SchemaTags {
            variants: vec!["a".to_string(), "b".to_string()],
        };
        let outcome = schema.reconcile(&universe(&["a", "b"]));

        assert!(outcome.is_unchanged());
        assert_eq!(schema.variants, vec!["a", "b"]);
    }

    #[test]
    fn test_result_is_sorted_and_deduplicated() {
        // Duplicates in the persisted file do not survive a rewrite.
        let mut schema = SchemaTags {
            variants: vec!["b".to_string(), "b".to_string(), "z".to_string()],
        };
        let outcome = schema.reconcile(&universe(&["c", "b", "a"]));

        assert_eq!(schema.variants, vec!["a", "b", "c"]);
        assert_eq!(outcome.added, vec!["a", "c"]);
        assert_eq!(outcome.removed, vec!["z"]);
    }

    #[test]
    fn test_added_and_removed_are_disjoint() {
        let mut schema = SchemaTags {
            variants: vec!["a".to_string(), "b".to_string()],
        };
        let outcome = schema.reconcile(&universe(&["b", "c", "d"]));

        for tag in &outcome.added {
            assert!(!outcome.removed.contains(tag));
        }
    }
}
