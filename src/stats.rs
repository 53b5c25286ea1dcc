//! Per-tag usage statistics.
//!
//! One statistic per universe tag, counting how many cards carry it and
//! which ones (by card code, card name, and pack of origin). The
//! ranking is the statistics sorted by descending count; the buckets
//! partition that ranking into fixed count ranges.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Pack;
use crate::tags::TagUniverse;

/// One card's use of a tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagUsage {
    pub code: String,
    pub name: String,
    pub pack: String,
}

/// Usage statistic for a single tag.
///
/// Invariant: `count == usages.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStat {
    pub tag: String,
    pub count: usize,
    pub usages: Vec<TagUsage>,
}

/// Build the usage ranking for every universe tag.
///
/// The packs carry cards whose tags are already inferred and sorted.
/// Statistics start in lexicographic tag order, so ties in the final
/// descending-count sort break deterministically (the sort is stable).
/// Tags no card uses keep a zero count rather than being dropped.
#[must_use]
pub fn aggregate(universe: &TagUniverse, packs: &[Pack]) -> Vec<UsageStat> {
    let mut ranking: Vec<UsageStat> = universe
        .sorted()
        .into_iter()
        .map(|tag| UsageStat { tag, count: 0, usages: Vec::new() })
        .collect();

    let index: FxHashMap<String, usize> = ranking
        .iter()
        .enumerate()
        .map(|(i, stat)| (stat.tag.clone(), i))
        .collect();

    for pack in packs {
        for card in &pack.cards {
            for tag in &card.tags {
                // Tags outside the universe cannot occur: the universe
                // is built from these same tag lists.
                if let Some(&i) = index.get(tag) {
                    let stat = &mut ranking[i];
                    stat.count += 1;
                    stat.usages.push(TagUsage {
                        code: card.code.clone(),
                        name: card.name.clone(),
                        pack: pack.name.clone(),
                    });
                }
            }
        }
    }

    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

/// The ranking partitioned into fixed count ranges.
///
/// The ranges are mutually exclusive and cover every count a universe
/// tag can have: exactly 1, exactly 2, exactly 3, 4 to 5, 6 to 10, and
/// more than 10. Each bucket keeps the ranking's descending-count
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsageBuckets {
    pub one_used: Vec<UsageStat>,
    pub two_used: Vec<UsageStat>,
    pub three_used: Vec<UsageStat>,
    pub up_to_five: Vec<UsageStat>,
    pub up_to_ten: Vec<UsageStat>,
    pub more_than_ten: Vec<UsageStat>,
}

impl UsageBuckets {
    /// Partition a ranking into buckets, consuming it.
    #[must_use]
    pub fn partition(ranking: Vec<UsageStat>) -> Self {
        let mut buckets = Self::default();
        for stat in ranking {
            match stat.count {
                1 => buckets.one_used.push(stat),
                2 => buckets.two_used.push(stat),
                3 => buckets.three_used.push(stat),
                4..=5 => buckets.up_to_five.push(stat),
                6..=10 => buckets.up_to_ten.push(stat),
                0 => {}
                _ => buckets.more_than_ten.push(stat),
            }
        }
        buckets
    }
}

/// Render the ranking as `tag, count` CSV lines, no header.
#[must_use]
pub fn render_csv(ranking: &[UsageStat]) -> String {
    ranking
        .iter()
        .map(|stat| format!("{}, {}", stat.tag, stat.count))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn card(code: &str, name: &str, tags: &[&str]) -> Card {
        Card {
            code: code.to_string(),
            name: name.to_string(),
            text: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn packs() -> Vec<Pack> {
        vec![
            Pack {
                name: "core".to_string(),
                cards: vec![
                    card("01001", "First", &["ally", "unique"]),
                    card("01002", "Second", &["ally"]),
                ],
            },
            Pack {
                name: "expansion".to_string(),
                cards: vec![card("02001", "Third", &["ally", "spell"])],
            },
        ]
    }

    fn universe(tags: &[&str]) -> TagUniverse {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_counts_and_usages_agree() {
        let ranking = aggregate(&universe(&["ally", "unique", "spell"]), &packs());
        for stat in &ranking {
            assert_eq!(stat.count, stat.usages.len());
        }
    }

    #[test]
    fn test_ranking_is_descending() {
        let ranking = aggregate(&universe(&["ally", "unique", "spell"]), &packs());
        assert_eq!(ranking[0].tag, "ally");
        assert_eq!(ranking[0].count, 3);
        for pair in ranking.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_usage_records_carry_pack_of_origin() {
        let ranking = aggregate(&universe(&["ally", "unique", "spell"]), &packs());
        let ally = ranking.iter().find(|s| s.tag == "ally").unwrap();
        let packs_seen: Vec<&str> = ally.usages.iter().map(|u| u.pack.as_str()).collect();
        assert_eq!(packs_seen, vec!["core", "core", "expansion"]);
        assert_eq!(ally.usages[0].code, "01001");
        assert_eq!(ally.usages[0].name, "First");
    }

    #[test]
    fn test_unused_universe_tag_gets_zero_count() {
        let ranking = aggregate(&universe(&["ally", "ghost"]), &packs());
        let ghost = ranking.iter().find(|s| s.tag == "ghost").unwrap();
        assert_eq!(ghost.count, 0);
        assert!(ghost.usages.is_empty());
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let ranking = aggregate(&universe(&["unique", "spell"]), &packs());
        // Both used once; lexicographic insertion order survives the
        // stable sort.
        let tags: Vec<&str> = ranking.iter().map(|s| s.tag.as_str()).collect();
        assert_eq!(tags, vec!["spell", "unique"]);
    }

    #[test]
    fn test_buckets_are_exclusive_and_exhaustive() {
        let mut many = Vec::new();
        for (i, count) in [1usize, 2, 3, 4, 5, 6, 10, 11, 40].iter().enumerate() {
            many.push(UsageStat {
                tag: format!("tag_{i}"),
                count: *count,
                usages: Vec::new(),
            });
        }
        let total = many.len();
        let buckets = UsageBuckets::partition(many);

        assert_eq!(
            buckets.one_used.len()
                + buckets.two_used.len()
                + buckets.three_used.len()
                + buckets.up_to_five.len()
                + buckets.up_to_ten.len()
                + buckets.more_than_ten.len(),
            total
        );
        assert_eq!(buckets.up_to_five.iter().map(|s| s.count).collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(buckets.up_to_ten.iter().map(|s| s.count).collect::<Vec<_>>(), vec![6, 10]);
        assert_eq!(buckets.more_than_ten.iter().map(|s| s.count).collect::<Vec<_>>(), vec![11, 40]);
    }

    #[test]
    fn test_tag_used_twice_lands_in_two_used() {
        let packs = vec![Pack {
            name: "core".to_string(),
            cards: vec![
                card("01001", "First", &["x"]),
                card("01002", "Second", &["x"]),
            ],
        }];
        let ranking = aggregate(&universe(&["x"]), &packs);
        let buckets = UsageBuckets::partition(ranking);

        assert!(buckets.one_used.is_empty());
        assert_eq!(buckets.two_used.len(), 1);
        assert_eq!(buckets.two_used[0].count, 2);
        assert_eq!(buckets.two_used[0].usages.len(), 2);
    }

    #[test]
    fn test_render_csv() {
        let ranking = vec![
            UsageStat { tag: "ally".to_string(), count: 3, usages: Vec::new() },
            UsageStat { tag: "spell".to_string(), count: 1, usages: Vec::new() },
        ];
        assert_eq!(render_csv(&ranking), "ally, 3\nspell, 1");
    }
}
