//! # tag-sync
//!
//! Batch tag normalization for a catalog of cards. One run re-sorts
//! every card's tags, derives compound tags from rules, reconciles the
//! observed tag universe against the schema enum and the described
//! registry, and regenerates the export, type, and statistics
//! artifacts.
//!
//! ## Design Principles
//!
//! 1. **Full recompute**: every run rebuilds all derived state from the
//!    pack files. There is no incremental or historical state.
//!
//! 2. **Snapshot threading**: derived collections (pack snapshot, tag
//!    universe, usage ranking) are built completely and passed by value
//!    between stages. No stage reads a structure another stage is still
//!    filling.
//!
//! 3. **Typed rules**: compound-tag clauses carry their param in the
//!    clause variant, so a param of the wrong shape cannot exist in
//!    memory. Mismatched shapes on the wire are dropped on load, not
//!    errors.
//!
//! ## Modules
//!
//! - `cards`: pack-file card records and the tagged-cards export shape
//! - `tags`: priority sorting, compound inference, the tag universe
//! - `registry`: schema-enum and described-registry reconciliation
//! - `stats`: usage counting, ranking, count buckets, CSV rendering
//! - `pipeline`: layout, file I/O, and the run driver
//! - `error`: the crate error type

pub mod cards;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod stats;
pub mod tags;

// Re-export commonly used types
pub use crate::cards::{Card, Pack, TaggedCard};
pub use crate::error::{Result, SyncError};
pub use crate::pipeline::{run, SyncPaths};
pub use crate::registry::{ReconcileOutcome, SchemaTags, TagEntry, TagTable};
pub use crate::stats::{aggregate, render_csv, TagUsage, UsageBuckets, UsageStat};
pub use crate::tags::{compare_tags, infer_tags, sort_tags, CompoundTag, RuleClause, TagUniverse};
