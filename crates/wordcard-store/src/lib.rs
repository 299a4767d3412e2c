mod client;
pub mod value;

pub use client::FirestoreClient;

use std::fmt;

use anyhow::Result;
use async_trait::async_trait;
use wordcard_core::Card;
use wordcard_types::Deck;

/// Per-user document store holding decks and their cards
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Write a card document at `path`, replacing anything already there
    async fn put(&self, path: &CardPath, card: &Card) -> Result<()>;

    /// Decks owned by the user
    async fn list_decks(&self, user_id: &str) -> Result<Vec<Deck>>;
}

/// Location of a card: `users/{uid}/decks/{deck_id}/cards/{card_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPath {
    pub user_id: String,
    pub deck_id: String,
    pub card_id: String,
}

impl CardPath {
    /// Path for a new card with a freshly generated id
    pub fn generate(user_id: &str, deck_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            deck_id: deck_id.to_string(),
            card_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn segments(&self) -> [&str; 6] {
        [
            "users",
            self.user_id.as_str(),
            "decks",
            self.deck_id.as_str(),
            "cards",
            self.card_id.as_str(),
        ]
    }
}

impl fmt::Display for CardPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("/"))
    }
}

/// Store a card under a new id in the given deck
pub async fn add_card(
    store: &dyn CardStore,
    user_id: &str,
    deck_id: &str,
    card: &Card,
) -> Result<CardPath> {
    let path = CardPath::generate(user_id, deck_id);
    store.put(&path, card).await?;

    Ok(path)
}
