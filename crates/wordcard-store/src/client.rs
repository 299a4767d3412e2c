use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use wordcard_core::Card;
use wordcard_types::Deck;

use crate::value;
use crate::{CardPath, CardStore};

/// Cloud Firestore REST client
#[derive(Clone)]
pub struct FirestoreClient {
    documents_root: String,
    id_token: Option<String>,
    client: reqwest::Client,
}

impl FirestoreClient {
    pub fn new(documents_root: String, id_token: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), documents_root, id_token)
    }

    pub fn with_client(
        client: reqwest::Client,
        documents_root: String,
        id_token: Option<String>,
    ) -> Self {
        Self {
            documents_root,
            id_token,
            client,
        }
    }

    /// Full URL of a document or collection below the documents root
    fn document_url(&self, segments: &[&str]) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.documents_root)
            .with_context(|| format!("Invalid documents root: {}", self.documents_root))?;

        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Documents root cannot be a base: {}", self.documents_root))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.id_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode the JSON answer
    async fn invoke<T>(&self, request: reqwest::RequestBuilder) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .authorize(request)
            .send()
            .await
            .context("Failed to send request to Firestore")?;

        let status = response.status();
        if !status.is_success() {
            let body: FirestoreErrorBody = response.json().await.unwrap_or_default();
            anyhow::bail!(
                "Firestore error ({}): {}",
                status,
                body.error.map(|e| e.message).unwrap_or_default()
            );
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse Firestore response")
    }
}

#[async_trait]
impl CardStore for FirestoreClient {
    async fn put(&self, path: &CardPath, card: &Card) -> Result<()> {
        let url = self.document_url(&path.segments())?;
        let body = value::document(&card.to_json().context("Failed to serialize card")?);

        let _: Value = self.invoke(self.client.patch(url).json(&body)).await?;
        tracing::debug!("Wrote {}", path);

        Ok(())
    }

    async fn list_decks(&self, user_id: &str) -> Result<Vec<Deck>> {
        let url = self.document_url(&["users", user_id, "decks"])?;
        let mut decks = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.client.get(url.clone());
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let page: ListDocuments = self.invoke(request).await?;
            decks.extend(page.documents.iter().filter_map(deck_from_document));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(decks)
    }
}

fn deck_from_document(document: &Value) -> Option<Deck> {
    let id = document["name"].as_str()?.rsplit('/').next()?.to_string();
    let name = value::string_field(document, "name").unwrap_or(&id).to_string();

    Some(Deck { id, name })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocuments {
    #[serde(default)]
    documents: Vec<Value>,
    next_page_token: Option<String>,
}

#[derive(Default, Deserialize)]
struct FirestoreErrorBody {
    error: Option<FirestoreError>,
}

#[derive(Deserialize)]
struct FirestoreError {
    message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builds_escaped_document_urls() {
        let client = FirestoreClient::new(
            "https://firestore.googleapis.com/v1/projects/p/databases/(default)/documents"
                .to_string(),
            None,
        );
        let path = CardPath {
            user_id: "u1".to_string(),
            deck_id: "my deck".to_string(),
            card_id: "c1".to_string(),
        };

        let url = client.document_url(&path.segments()).unwrap();
        assert!(url.as_str().starts_with("https://firestore.googleapis.com/v1/projects/p/databases/"));
        assert!(url.as_str().ends_with("/documents/users/u1/decks/my%20deck/cards/c1"));
    }

    #[test]
    fn deck_id_comes_from_document_name() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/users/u1/decks/d9",
            "fields": { "name": { "stringValue": "Animals" } }
        });
        assert_eq!(
            deck_from_document(&doc),
            Some(Deck {
                id: "d9".to_string(),
                name: "Animals".to_string(),
            })
        );

        let unnamed = json!({ "name": "projects/p/databases/(default)/documents/users/u1/decks/d2" });
        assert_eq!(deck_from_document(&unnamed).map(|d| d.name), Some("d2".to_string()));
    }
}
