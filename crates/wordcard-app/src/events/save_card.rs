use kanal::AsyncSender;
use wordcard_core::{CardForm, FormError};
use wordcard_types::AppEvent;

use crate::services::Services;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("No user id configured, card not saved")]
    NoUser,

    #[error(transparent)]
    Form(#[from] FormError),
}

/// Take the card out of the form and write it without waiting for the store.
///
/// The form is reset right away; the outcome reaches the UI as `CardSaved` or
/// `SaveFailed`.
pub fn handle_card_save(
    form: &mut CardForm,
    user_id: String,
    services: &Services,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> Result<(), SaveError> {
    // checked before the form is reset so the draft survives
    if user_id.is_empty() {
        return Err(SaveError::NoUser);
    }

    let pending = form.save_card()?;
    let tx = app_to_ui_tx.clone();

    let Some(store) = services.store.clone() else {
        tracing::warn!("Card store disabled");
        tokio::spawn(async move {
            if let Err(e) = tx
                .send(AppEvent::SaveFailed {
                    message: "card store disabled".to_string(),
                })
                .await
            {
                tracing::error!("Failed to report save outcome: {}", e);
            }
        });
        return Ok(());
    };

    tokio::spawn(async move {
        let outcome =
            wordcard_store::add_card(store.as_ref(), &user_id, &pending.deck_id, &pending.card)
                .await;

        let event = match outcome {
            Ok(path) => {
                tracing::info!("Saved card '{}' to {}", pending.card.word, path);
                AppEvent::CardSaved {
                    path: path.to_string(),
                }
            }
            Err(e) => {
                tracing::error!("Failed to save card '{}': {:#}", pending.card.word, e);
                AppEvent::SaveFailed {
                    message: e.to_string(),
                }
            }
        };

        if let Err(e) = tx.send(event).await {
            tracing::error!("Failed to report save outcome: {}", e);
        }
    });

    Ok(())
}
