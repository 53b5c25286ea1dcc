//! File layout of a catalog project.
//!
//! All paths derive from a single root directory, mirroring the layout
//! the pipeline expects:
//!
//! ```text
//! <root>/json/input/pack/*.json        pack files (rewritten in place)
//! <root>/json/input/compound-tags.json compound-tag rules
//! <root>/json/input/tags.json          described registry (rewritten)
//! <root>/json/output/schema.tags.json  schema enum (rewritten)
//! <root>/json/output/tagged-cards.json tagged-cards export
//! <root>/json/statistics/              cleared and repopulated
//! <root>/src/tags.ts                   generated tag type
//! ```

use std::path::{Path, PathBuf};

/// Paths of every file and folder one sync run touches.
#[derive(Clone, Debug)]
pub struct SyncPaths {
    root: PathBuf,
}

impl SyncPaths {
    /// Create a layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of pack files.
    #[must_use]
    pub fn pack_dir(&self) -> PathBuf {
        self.root.join("json").join("input").join("pack")
    }

    /// Compound-tag rules file.
    #[must_use]
    pub fn compound_tags_file(&self) -> PathBuf {
        self.root.join("json").join("input").join("compound-tags.json")
    }

    /// Described registry file.
    #[must_use]
    pub fn tags_file(&self) -> PathBuf {
        self.root.join("json").join("input").join("tags.json")
    }

    /// Schema enum file.
    #[must_use]
    pub fn schema_tags_file(&self) -> PathBuf {
        self.root.join("json").join("output").join("schema.tags.json")
    }

    /// Tagged-cards export file.
    #[must_use]
    pub fn tagged_cards_file(&self) -> PathBuf {
        self.root.join("json").join("output").join("tagged-cards.json")
    }

    /// Generated tag-type artifact.
    #[must_use]
    pub fn tag_type_file(&self) -> PathBuf {
        self.root.join("src").join("tags.ts")
    }

    /// Statistics directory, cleared every run.
    #[must_use]
    pub fn stats_dir(&self) -> PathBuf {
        self.root.join("json").join("statistics")
    }

    /// Usage-ranking CSV inside the statistics directory.
    #[must_use]
    pub fn usage_ranking_file(&self) -> PathBuf {
        self.stats_dir().join("usage-ranking.csv")
    }

    /// A bucket file inside the statistics directory.
    #[must_use]
    pub fn bucket_file(&self, stem: &str) -> PathBuf {
        self.stats_dir().join(format!("{stem}.json"))
    }
}
