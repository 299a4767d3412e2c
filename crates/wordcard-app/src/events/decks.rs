use std::sync::Arc;

use kanal::AsyncSender;
use wordcard_types::AppEvent;

use crate::services::Services;
use crate::state::AppState;

/// Fetch the user's decks in the background
pub async fn spawn_deck_load(
    state: Arc<AppState>,
    services: &Services,
    loopback_tx: &AsyncSender<AppEvent>,
) {
    let Some(store) = services.store.clone() else {
        tracing::warn!("Card store disabled, no decks to load");
        return;
    };

    let user_id = state.config.read().await.user_id.clone();
    if user_id.is_empty() {
        tracing::warn!("No user id configured, skipping deck load");
        return;
    }

    let tx = loopback_tx.clone();
    tokio::spawn(async move {
        match store.list_decks(&user_id).await {
            Ok(decks) => {
                if let Err(e) = tx.send(AppEvent::DecksLoaded(decks)).await {
                    tracing::error!("Failed to report decks: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to load decks: {:#}", e);
                if let Err(e) = tx
                    .send(AppEvent::Status(format!("Could not load decks: {}", e)))
                    .await
                {
                    tracing::error!("Failed to report deck load failure: {}", e);
                }
            }
        }
    });
}
