use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wordcard_types::TagCode;

use crate::draft::Draft;

/// Document written to the store for every saved card.
///
/// Field names follow the layout existing readers of the store expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "english")]
    pub word: String,
    pub meaning: String,
    #[serde(rename = "gifUrl")]
    pub animation_url: String,
    #[serde(rename = "parts")]
    pub tags: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<BTreeMap<String, String>>,
}

impl Card {
    pub fn from_draft(draft: &Draft) -> Self {
        let tags = if draft.tag_info.tags.is_empty() {
            flag_map(&[TagCode::SENTINEL])
        } else {
            flag_map(&draft.tag_info.tags)
        };

        Self {
            word: draft.word.clone(),
            meaning: draft.meaning.clone(),
            animation_url: draft.animation_url.clone(),
            tags,
            examples: draft.tag_info.examples.as_deref().map(index_map),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// `["a", "b"]` becomes `{"0": "a", "1": "b"}`
pub fn index_map<T: ToString>(items: &[T]) -> BTreeMap<String, String> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item.to_string()))
        .collect()
}

/// `["N", "V"]` becomes `{"N": true, "V": true}`; duplicates collapse
pub fn flag_map<T: ToString>(items: &[T]) -> BTreeMap<String, bool> {
    items.iter().map(|item| (item.to_string(), true)).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wordcard_types::TagInfo;

    use super::*;

    #[test]
    fn converts_lists_to_maps() {
        let examples = index_map(&["a", "b"]);
        assert_eq!(examples.get("0").map(String::as_str), Some("a"));
        assert_eq!(examples.get("1").map(String::as_str), Some("b"));

        let flags = flag_map(&["N", "V", "N"]);
        assert_eq!(flags.len(), 2);
        assert_eq!(flags.get("N"), Some(&true));
        assert_eq!(flags.get("V"), Some(&true));
    }

    #[test]
    fn untagged_card_gets_sentinel_and_no_examples() {
        let draft = Draft {
            word: "dog".to_string(),
            meaning: "a pet".to_string(),
            ..Draft::blank()
        };

        let card = Card::from_draft(&draft);
        assert_eq!(
            card.to_json().unwrap(),
            json!({
                "english": "dog",
                "meaning": "a pet",
                "gifUrl": "",
                "parts": { "N/A": true }
            })
        );
    }

    #[test]
    fn tagged_card_keeps_every_distinct_tag_and_examples() {
        let draft = Draft {
            word: "run".to_string(),
            meaning: "move fast".to_string(),
            animation_url: "https://media.example/run.gif".to_string(),
            tag_info: TagInfo {
                tags: vec![TagCode::Verb, TagCode::Noun, TagCode::Verb],
                examples: Some(vec!["run home".to_string(), "a long run".to_string()]),
            },
            ..Draft::blank()
        };

        let card = Card::from_draft(&draft);
        assert_eq!(
            card.to_json().unwrap(),
            json!({
                "english": "run",
                "meaning": "move fast",
                "gifUrl": "https://media.example/run.gif",
                "parts": { "N": true, "V": true },
                "examples": { "0": "run home", "1": "a long run" }
            })
        );
    }
}
