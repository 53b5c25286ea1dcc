//! Persisted tag registries and their reconciliation.
//!
//! Two registries track the known tags: the schema enum (a bare list of
//! names) and the described table (name plus human description). Both
//! are reconciled against the tag universe of the current run: tags the
//! universe gained are added, tags no card uses any more are removed,
//! and the result is persisted sorted lexicographically.

pub mod described;
pub mod schema;

pub use described::{TagEntry, TagTable};
pub use schema::SchemaTags;

/// What a reconciliation changed.
///
/// `added` and `removed` are disjoint by construction and sorted for
/// deterministic logging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Tags present in the universe but missing from the registry.
    pub added: Vec<String>,
    /// Tags present in the registry but absent from the universe.
    pub removed: Vec<String>,
}

impl ReconcileOutcome {
    /// True when the registry already matched the universe.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
