use async_trait::async_trait;
use serde::Deserialize;
use wordcard_types::{TagCode, TagInfo};

use crate::{LookupError, ProviderMetadata, check_status};

/// Only the first few senses are worth suggesting
const MAX_RESULTS: usize = 2;

/// Dictionary provider interface
#[async_trait]
pub trait DefinitionLookup: Send + Sync {
    /// Tags and example sentences for a normalized word
    async fn define(&self, word: &str) -> Result<TagInfo, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Clone)]
pub struct WordsApiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl WordsApiClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_key, api_url)
    }

    pub fn with_client(client: reqwest::Client, api_key: String, api_url: String) -> Self {
        Self {
            client,
            api_key,
            api_url,
        }
    }

    fn word_url(&self, word: &str) -> Result<reqwest::Url, LookupError> {
        let mut url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .push("words")
            .push(word);

        Ok(url)
    }
}

#[async_trait]
impl DefinitionLookup for WordsApiClient {
    async fn define(&self, word: &str) -> Result<TagInfo, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::AuthenticationError);
        }

        let response = self
            .client
            .get(self.word_url(word)?)
            .header("X-Mashape-Key", &self.api_key)
            .send()
            .await?;

        check_status(response.status(), word)?;

        let entry: WordEntry = response.json().await.map_err(|e| {
            LookupError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        tracing::debug!("'{}': {} dictionary results", word, entry.results.len());

        summarize(&entry.results).ok_or_else(|| LookupError::NotFound(word.to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "WordsAPI".to_string(),
            requires_api_key: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WordEntry {
    #[serde(default)]
    results: Vec<WordSense>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSense {
    pub part_of_speech: Option<String>,
    pub examples: Option<Vec<String>>,
}

/// Collapse the leading senses into distinct tags and one example list.
///
/// `None` when there is nothing to summarize.
pub fn summarize(results: &[WordSense]) -> Option<TagInfo> {
    if results.is_empty() {
        return None;
    }

    let considered = &results[..results.len().min(MAX_RESULTS)];

    let mut tags = Vec::new();
    for sense in considered {
        let tag = TagCode::from_part_of_speech(sense.part_of_speech.as_deref());
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let examples = considered
        .iter()
        .filter_map(|sense| sense.examples.as_ref())
        .flatten()
        .cloned()
        .collect();

    Some(TagInfo {
        tags,
        examples: Some(examples),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sense(part: Option<&str>, examples: &[&str]) -> WordSense {
        WordSense {
            part_of_speech: part.map(str::to_string),
            examples: if examples.is_empty() {
                None
            } else {
                Some(examples.iter().map(|e| e.to_string()).collect())
            },
        }
    }

    #[test]
    fn noun_and_verb_become_two_tags() {
        let info = summarize(&[
            sense(Some("noun"), &["the dog barked"]),
            sense(Some("verb"), &["dog his steps", "they dogged him"]),
        ])
        .unwrap();

        assert_eq!(info.tags, vec![TagCode::Noun, TagCode::Verb]);
        assert_eq!(
            info.examples.unwrap(),
            vec!["the dog barked", "dog his steps", "they dogged him"]
        );
    }

    #[test]
    fn only_first_two_results_count() {
        let info = summarize(&[
            sense(Some("noun"), &[]),
            sense(Some("noun"), &["a"]),
            sense(Some("adverb"), &["ignored"]),
        ])
        .unwrap();

        assert_eq!(info.tags, vec![TagCode::Noun]);
        assert_eq!(info.examples.unwrap(), vec!["a"]);
    }

    #[test]
    fn unknown_parts_collapse_to_sentinel() {
        let info = summarize(&[sense(None, &[]), sense(Some("pronoun"), &[])]).unwrap();

        assert_eq!(info.tags, vec![TagCode::Unclassifiable]);
        assert_eq!(info.examples, Some(Vec::new()));
    }

    #[test]
    fn empty_results_summarize_to_nothing() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn parses_words_api_body() {
        let entry: WordEntry = serde_json::from_str(
            r#"{
                "word": "dog",
                "results": [
                    { "definition": "a domestic animal", "partOfSpeech": "noun", "examples": ["walk the dog"] },
                    { "definition": "follow", "partOfSpeech": "verb" }
                ],
                "frequency": 4.6
            }"#,
        )
        .unwrap();

        let info = summarize(&entry.results).unwrap();
        assert_eq!(info.tags, vec![TagCode::Noun, TagCode::Verb]);
        assert_eq!(info.examples.unwrap(), vec!["walk the dog"]);
    }

    #[test]
    fn word_url_escapes_the_word() {
        let client = WordsApiClient::new(
            "key".to_string(),
            "https://wordsapiv1.p.mashape.com/".to_string(),
        );

        let url = client.word_url("ice cream").unwrap();
        assert_eq!(
            url.as_str(),
            "https://wordsapiv1.p.mashape.com/words/ice%20cream"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let client = WordsApiClient::new(String::new(), "http://127.0.0.1:9".to_string());

        assert!(matches!(
            client.define("dog").await,
            Err(LookupError::AuthenticationError)
        ));
    }
}
