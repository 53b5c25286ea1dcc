//! Card records as they appear in the pack files.
//!
//! A pack file is a JSON array of cards. The serde shapes here must
//! round-trip the files exactly, since the pipeline rewrites them in
//! place: any field we drop on read is lost on write.

use serde::{Deserialize, Serialize};

/// A single card from a pack file.
///
/// `code` is unique across the catalog. `tags` is an ordered sequence:
/// tags are unique within a card but their order carries display
/// priority, so the pipeline sorts rather than deduplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub code: String,
    pub name: String,
    pub text: String,
    pub tags: Vec<String>,
}

/// An in-memory pack: the file stem it came from plus its cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pack {
    pub name: String,
    pub cards: Vec<Card>,
}

/// One entry of the tagged-cards export: a card's code with its final
/// (inferred and sorted) tag list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedCard {
    pub card: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_round_trip() {
        let json = r#"{
  "code": "01001",
  "name": "Sample Card",
  "text": "Does a thing.",
  "tags": ["fast_play", "limit_3"]
}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.code, "01001");
        assert_eq!(card.tags, vec!["fast_play", "limit_3"]);

        let back = serde_json::to_string_pretty(&card).unwrap();
        let again: Card = serde_json::from_str(&back).unwrap();
        assert_eq!(card, again);
    }

    #[test]
    fn test_tagged_card_shape() {
        let tagged = TaggedCard {
            card: "01001".to_string(),
            tags: vec!["unique".to_string()],
        };
        let json = serde_json::to_string(&tagged).unwrap();
        assert_eq!(json, r#"{"card":"01001","tags":["unique"]}"#);
    }
}
