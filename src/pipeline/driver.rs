//! The sync run: every pass, in order.
//!
//! The run is strictly synchronous. Each stage fully materializes its
//! output before the next stage starts, and derived collections (the
//! pack snapshot, the universe, the ranking) are threaded between
//! stages as values rather than shared accumulators, so no stage can
//! observe a half-populated structure.
//!
//! Pass order:
//!
//! 1. sort tags in every pack file, rewriting each file in place;
//! 2. re-read the packs into one snapshot with inferred + sorted tags;
//! 3. reconcile the schema enum and the described registry against the
//!    snapshot's tag universe;
//! 4. write the tagged-cards export and the generated tag type;
//! 5. clear the statistics folder and write the ranking CSV plus the
//!    six bucket files.
//!
//! A failure anywhere aborts the run; artifacts already written stay as
//! they are (no transactional guarantee across the output set).

use std::path::Path;

use tracing::{info, warn};

use crate::cards::{Card, Pack, TaggedCard};
use crate::error::Result;
use crate::pipeline::files;
use crate::pipeline::paths::SyncPaths;
use crate::registry::{ReconcileOutcome, SchemaTags, TagTable};
use crate::stats::{aggregate, render_csv, UsageBuckets};
use crate::tags::{infer_tags, sort_tags, CompoundTag, TagUniverse};

/// Run the full pipeline against the given layout.
pub fn run(paths: &SyncPaths) -> Result<()> {
    let rules: Vec<CompoundTag> = files::read_json(&paths.compound_tags_file())?;

    sort_pack_files(paths)?;
    let packs = load_enriched_packs(paths, &rules)?;

    let mut universe = TagUniverse::new();
    for pack in &packs {
        for card in &pack.cards {
            universe.observe(&card.tags);
        }
    }
    info!(tags = universe.len(), "collected tag universe");

    reconcile_registries(paths, &universe)?;
    write_tagged_cards(paths, &packs)?;
    write_tag_type(paths, &universe)?;
    write_statistics(paths, &universe, &packs)?;

    Ok(())
}

/// Pass 1: re-sort every pack file's tags and write it back before
/// reading the next file.
fn sort_pack_files(paths: &SyncPaths) -> Result<()> {
    let pack_paths = files::files_in_dir(&paths.pack_dir())?;
    for path in &pack_paths {
        let mut cards: Vec<Card> = files::read_json(path)?;
        for card in &mut cards {
            sort_tags(&mut card.tags);
        }
        files::write_json_pretty(path, &cards)?;
    }
    info!(files = pack_paths.len(), "sorted tags in the input files");
    Ok(())
}

/// Pass 2: one snapshot of every pack with inferred, sorted tags.
/// Every derived artifact downstream reads this snapshot only.
fn load_enriched_packs(paths: &SyncPaths, rules: &[CompoundTag]) -> Result<Vec<Pack>> {
    let pack_paths = files::files_in_dir(&paths.pack_dir())?;
    let mut packs = Vec::with_capacity(pack_paths.len());
    for path in &pack_paths {
        let mut cards: Vec<Card> = files::read_json(path)?;
        for card in &mut cards {
            card.tags = infer_tags(&card.tags, rules);
            sort_tags(&mut card.tags);
        }
        packs.push(Pack { name: pack_name(path), cards });
    }
    Ok(packs)
}

/// The pack name is the file stem: `core.json` -> `core`.
fn pack_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn reconcile_registries(paths: &SyncPaths, universe: &TagUniverse) -> Result<()> {
    let schema_path = paths.schema_tags_file();
    let mut schema: SchemaTags = files::read_json(&schema_path)?;
    let outcome = schema.reconcile(universe);
    files::write_json_pretty(&schema_path, &schema)?;
    log_outcome("schema.tags.json", &outcome);

    let tags_path = paths.tags_file();
    let mut table: TagTable = files::read_json(&tags_path)?;
    let outcome = table.reconcile(universe);
    files::write_json_pretty(&tags_path, &table)?;
    log_outcome("tags.json", &outcome);

    Ok(())
}

fn log_outcome(registry: &str, outcome: &ReconcileOutcome) {
    if outcome.added.is_empty() {
        info!(registry, "no new tags to add");
    } else {
        info!(registry, tags = ?outcome.added, "added {} new tags", outcome.added.len());
    }
    if outcome.removed.is_empty() {
        info!(registry, "no unused tags to remove");
    } else {
        warn!(registry, tags = ?outcome.removed, "removed {} unused tags", outcome.removed.len());
    }
}

/// Compact export of every card's final tag list, in pack order.
fn write_tagged_cards(paths: &SyncPaths, packs: &[Pack]) -> Result<()> {
    let tagged: Vec<TaggedCard> = packs
        .iter()
        .flat_map(|pack| pack.cards.iter())
        .map(|card| TaggedCard { card: card.code.clone(), tags: card.tags.clone() })
        .collect();
    files::write_json_compact(&paths.tagged_cards_file(), &tagged)?;
    info!(cards = tagged.len(), "updated the tagged-cards export");
    Ok(())
}

fn write_tag_type(paths: &SyncPaths, universe: &TagUniverse) -> Result<()> {
    files::write_text(&paths.tag_type_file(), &render_tag_type(&universe.sorted()))?;
    info!("updated the generated tag type");
    Ok(())
}

/// Render the generated sum type over every known tag literal.
#[must_use]
pub fn render_tag_type(tags: &[String]) -> String {
    let variants = tags
        .iter()
        .map(|tag| format!("  | \"{tag}\""))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "// This file is generated by tag-sync. Do not edit manually.\nexport type Tag =\n{variants};"
    )
}

fn write_statistics(paths: &SyncPaths, universe: &TagUniverse, packs: &[Pack]) -> Result<()> {
    files::recreate_dir(&paths.stats_dir())?;

    let ranking = aggregate(universe, packs);
    files::write_text(&paths.usage_ranking_file(), &render_csv(&ranking))?;

    let buckets = UsageBuckets::partition(ranking);
    files::write_json_pretty(&paths.bucket_file("one-used"), &buckets.one_used)?;
    files::write_json_pretty(&paths.bucket_file("two-used"), &buckets.two_used)?;
    files::write_json_pretty(&paths.bucket_file("three-used"), &buckets.three_used)?;
    files::write_json_pretty(&paths.bucket_file("up-to-five"), &buckets.up_to_five)?;
    files::write_json_pretty(&paths.bucket_file("up-to-ten"), &buckets.up_to_ten)?;
    files::write_json_pretty(&paths.bucket_file("more-than-ten"), &buckets.more_than_ten)?;

    info!("updated statistics files");
    Ok(())
}
