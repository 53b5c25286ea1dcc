//! Compound-tag rules and inference.
//!
//! A compound tag is never written in the source data; it is derived
//! from the presence pattern of other tags. Each rule names the derived
//! tag and carries clauses; the rule fires when any clause matches
//! (logical OR across clauses).
//!
//! ## Wire format
//!
//! ```json
//! { "name": "budget_fast_play",
//!   "rules": [ { "type": "all", "param": ["fast_play", "limit_3"] } ] }
//! ```
//!
//! `all`/`any` take an array param, `prefix`/`suffix`/`contains` a
//! string. A clause whose param shape does not match its type is
//! discarded on load (logged, treated as a non-match) rather than
//! failing the run; in memory the clause kind carries its own typed
//! param, so a mismatch cannot be represented at all.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::warn;

/// One clause of a compound-tag rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleClause {
    /// Every listed tag is present. Vacuously true for an empty list.
    All(Vec<String>),
    /// At least one listed tag is present.
    Any(Vec<String>),
    /// Some tag starts with the literal.
    Prefix(String),
    /// Some tag ends with the literal.
    Suffix(String),
    /// Some tag contains the literal.
    Contains(String),
}

impl RuleClause {
    /// Evaluate this clause against a card's tag set.
    #[must_use]
    pub fn matches(&self, tags: &FxHashSet<&str>) -> bool {
        match self {
            RuleClause::All(params) => params.iter().all(|p| tags.contains(p.as_str())),
            RuleClause::Any(params) => params.iter().any(|p| tags.contains(p.as_str())),
            RuleClause::Prefix(literal) => tags.iter().any(|t| t.starts_with(literal)),
            RuleClause::Suffix(literal) => tags.iter().any(|t| t.ends_with(literal)),
            RuleClause::Contains(literal) => tags.iter().any(|t| t.contains(literal)),
        }
    }
}

/// A named derived tag with its clauses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCompoundTag")]
pub struct CompoundTag {
    pub name: String,
    pub clauses: Vec<RuleClause>,
}

// Tolerant wire shapes. The param is read as either a string or an
// array and only then checked against the clause type, so a shape
// mismatch is a dropped clause, not a parse error.

#[derive(Deserialize)]
struct RawCompoundTag {
    name: String,
    rules: Vec<RawClause>,
}

#[derive(Deserialize)]
struct RawClause {
    #[serde(rename = "type")]
    kind: RawClauseKind,
    param: RawParam,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawClauseKind {
    All,
    Any,
    Prefix,
    Suffix,
    Contains,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawParam {
    One(String),
    Many(Vec<String>),
}

impl From<RawCompoundTag> for CompoundTag {
    fn from(raw: RawCompoundTag) -> Self {
        let mut clauses = Vec::with_capacity(raw.rules.len());
        for clause in raw.rules {
            match (clause.kind, clause.param) {
                (RawClauseKind::All, RawParam::Many(params)) => {
                    clauses.push(RuleClause::All(params));
                }
                (RawClauseKind::Any, RawParam::Many(params)) => {
                    clauses.push(RuleClause::Any(params));
                }
                (RawClauseKind::Prefix, RawParam::One(literal)) => {
                    clauses.push(RuleClause::Prefix(literal));
                }
                (RawClauseKind::Suffix, RawParam::One(literal)) => {
                    clauses.push(RuleClause::Suffix(literal));
                }
                (RawClauseKind::Contains, RawParam::One(literal)) => {
                    clauses.push(RuleClause::Contains(literal));
                }
                (kind, _) => {
                    warn!(rule = %raw.name, ?kind, "dropping clause with mismatched param shape");
                }
            }
        }
        CompoundTag { name: raw.name, clauses }
    }
}

/// Extend a card's tag list with every derived tag whose rule fires.
///
/// Clauses are evaluated against the *input* tag set only: a derived
/// tag is never visible to later rules in the same invocation, so
/// inference is one hop. A rule chain (rule B matching on rule A's
/// derived tag) needs a second run to close; this is a known
/// limitation, kept deliberately.
///
/// The result preserves the input order and appends derived names in
/// rule order. Never removes a tag.
#[must_use]
pub fn infer_tags(tags: &[String], rules: &[CompoundTag]) -> Vec<String> {
    let current: FxHashSet<&str> = tags.iter().map(String::as_str).collect();

    let mut result: Vec<String> = Vec::with_capacity(tags.len());
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for tag in tags {
        if seen.insert(tag.as_str()) {
            result.push(tag.clone());
        }
    }

    for rule in rules {
        if rule.clauses.iter().any(|clause| clause.matches(&current)) {
            if !current.contains(rule.name.as_str())
                && !result.iter().any(|t| t == &rule.name)
            {
                result.push(rule.name.clone());
            }
        }
    }

    result
}
