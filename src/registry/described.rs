//! Described-form registry: tag names with human descriptions.
//!
//! On disk this is an array of `{ "name": ..., "description": ... }`.
//! Unlike the schema enum there is state worth preserving: the
//! description of every surviving tag must come through reconciliation
//! byte-identical. Only presence changes; added names get an empty
//! description for a human to fill in later.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::tags::TagUniverse;

use super::ReconcileOutcome;

/// One registry entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub name: String,
    pub description: String,
}

/// The full described registry, unique by name, sorted by name when
/// persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagTable {
    pub entries: Vec<TagEntry>,
}

impl TagTable {
    /// Reconcile against the universe.
    ///
    /// Entries whose name left the universe are deleted; names the
    /// universe gained are inserted with an empty description; entries
    /// that survive keep their description untouched. Duplicate names
    /// in the input keep their first occurrence. The table ends sorted
    /// by name.
    pub fn reconcile(&mut self, universe: &TagUniverse) -> ReconcileOutcome {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut removed: Vec<String> = Vec::new();

        self.entries.retain(|entry| {
            if !universe.contains(&entry.name) {
                if seen.insert(entry.name.clone()) {
                    removed.push(entry.name.clone());
                }
                return false;
            }
            seen.insert(entry.name.clone())
        });

        let mut added: Vec<String> = universe
            .iter()
            .filter(|tag| !seen.contains(*tag))
            .map(str::to_string)
            .collect();
        added.sort();
        removed.sort();

        for name in &added {
            self.entries.push(TagEntry {
                name: name.clone(),
                description: String::new(),
            });
        }

        self.entries.sort_by(|a, b| a.name.cmp(&b.name));

        ReconcileOutcome { added, removed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(tags: &[&str]) -> TagUniverse {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn entry(name: &str, description: &str) -> TagEntry {
        TagEntry {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_survivors_keep_descriptions() {
        let mut table = TagTable {
            entries: vec![entry("ally", "A friendly character."), entry("stale", "old")],
        };
        let outcome = table.reconcile(&universe(&["ally", "fresh"]));

        assert_eq!(outcome.added, vec!["fresh"]);
        assert_eq!(outcome.removed, vec!["stale"]);
        assert_eq!(
            table.entries,
            vec![entry("ally", "A friendly character."), entry("fresh", "")]
        );
    }

    #[test]
    fn test_added_entries_have_empty_description() {
        let mut table = TagTable::default();
        table.reconcile(&universe(&["b", "a"]));

        assert_eq!(table.entries, vec![entry("a", ""), entry("b", "")]);
    }

    #[test]
    fn test_sorted_by_name() {
        let mut table = TagTable {
            entries: vec![entry("c", "third"), entry("a", "first")],
        };
        table.reconcile(&universe(&["c", "a", "b"]));

        let names: Vec<&str> = table.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_names_keep_first_occurrence() {
        let mut table = TagTable {
            entries: vec![entry("ally", "kept"), entry("ally", "dropped")],
        };
        let outcome = table.reconcile(&universe(&["ally"]));

        assert!(outcome.is_unchanged());
        assert_eq!(table.entries, vec![entry("ally", "kept")]);
    }

    #[test]
    fn test_keys_match_universe_exactly() {
        let mut table = TagTable {
            entries: vec![entry("x", ""), entry("y", "")],
        };
        table.reconcile(&universe(&["y", "z"]));

        let names: Vec<&str> = table.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["y", "z"]);
    }
}
