use async_trait::async_trait;

use crate::{LookupError, ProviderMetadata, check_status};

/// Animated image provider interface
#[async_trait]
pub trait AnimationLookup: Send + Sync {
    /// URL of an animation illustrating the word, if the provider has one
    async fn find(&self, word: &str) -> Result<Option<String>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Clone)]
pub struct GiphyClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    rendition: String,
}

impl GiphyClient {
    pub fn new(api_key: String, api_url: String, rendition: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_key, api_url, rendition)
    }

    pub fn with_client(
        client: reqwest::Client,
        api_key: String,
        api_url: String,
        rendition: String,
    ) -> Self {
        Self {
            client,
            api_key,
            api_url,
            rendition,
        }
    }
}

#[async_trait]
impl AnimationLookup for GiphyClient {
    async fn find(&self, word: &str) -> Result<Option<String>, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::AuthenticationError);
        }

        let params = [("api_key", self.api_key.as_str()), ("s", word)];

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?;

        check_status(response.status(), word)?;

        let json: serde_json::Value = response.json().await.map_err(|e| {
            LookupError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let url = rendition_url(&json, &self.rendition);
        if url.is_none() {
            tracing::debug!("No '{}' animation for '{}'", self.rendition, word);
        }

        Ok(url)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "GIPHY".to_string(),
            requires_api_key: true,
        }
    }
}

/// Pull `data.images.<rendition>.url` out of a search response.
///
/// A miss comes back with `data` as an empty array, which simply yields `None`.
pub fn rendition_url(json: &serde_json::Value, rendition: &str) -> Option<String> {
    json["data"]["images"][rendition]["url"]
        .as_str()
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}
