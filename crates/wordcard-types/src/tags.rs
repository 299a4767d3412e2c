use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Part-of-speech category a card can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TagCode {
    #[serde(rename = "N")]
    Noun,
    #[serde(rename = "V")]
    Verb,
    #[serde(rename = "Adj")]
    Adjective,
    #[serde(rename = "Adv")]
    Adverb,
    /// Fallback for anything the dictionary cannot classify, also the sentinel
    /// written when a card has no tags at all
    #[serde(rename = "N/A")]
    Unclassifiable,
}

impl TagCode {
    pub const ALL: [TagCode; 5] = [
        TagCode::Noun,
        TagCode::Verb,
        TagCode::Adjective,
        TagCode::Adverb,
        TagCode::Unclassifiable,
    ];

    pub const SENTINEL: TagCode = TagCode::Unclassifiable;

    pub fn as_str(&self) -> &'static str {
        match self {
            TagCode::Noun => "N",
            TagCode::Verb => "V",
            TagCode::Adjective => "Adj",
            TagCode::Adverb => "Adv",
            TagCode::Unclassifiable => "N/A",
        }
    }

    /// Collapse a dictionary part-of-speech label into a tag code
    pub fn from_part_of_speech(part: Option<&str>) -> Self {
        match part.map(str::trim) {
            Some("noun") => TagCode::Noun,
            Some("verb") => TagCode::Verb,
            Some("adjective") => TagCode::Adjective,
            Some("adverb") => TagCode::Adverb,
            _ => TagCode::Unclassifiable,
        }
    }
}

impl fmt::Display for TagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag code: {0}")]
pub struct UnknownTagCode(pub String);

impl FromStr for TagCode {
    type Err = UnknownTagCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "noun" => Ok(TagCode::Noun),
            "v" | "verb" => Ok(TagCode::Verb),
            "adj" | "adjective" => Ok(TagCode::Adjective),
            "adv" | "adverb" => Ok(TagCode::Adverb),
            "n/a" | "na" => Ok(TagCode::Unclassifiable),
            _ => Err(UnknownTagCode(s.to_string())),
        }
    }
}

/// Tags plus example sentences gathered for a word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub tags: Vec<TagCode>,
    pub examples: Option<Vec<String>>,
}
