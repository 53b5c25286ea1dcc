//! Tag ordering, compound-tag inference, and the tag universe.
//!
//! ## Key Types
//!
//! - `PriorityKind` / `PRIORITY_TABLE`: the fixed display-priority table
//! - `CompoundTag` / `RuleClause`: derived-tag rules
//! - `TagUniverse`: every tag observed in one run, after inference

pub mod compound;
pub mod sorter;
pub mod universe;

pub use compound::{infer_tags, CompoundTag, RuleClause};
pub use sorter::{compare_tags, sort_tags};
pub use universe::TagUniverse;
