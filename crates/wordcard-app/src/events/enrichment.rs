use kanal::AsyncSender;
use wordcard_core::EnrichmentTicket;
use wordcard_types::AppEvent;

use crate::services::Services;

/// Look the word up in the dictionary and report back on `loopback_tx`
pub fn spawn_definition_lookup(
    services: &Services,
    ticket: &EnrichmentTicket,
    loopback_tx: &AsyncSender<AppEvent>,
) {
    let Some(dictionary) = services.dictionary.clone() else {
        tracing::debug!("Dictionary disabled, skipping definition lookup");
        return;
    };

    let word = ticket.word.clone();
    let generation = ticket.generation;
    let tx = loopback_tx.clone();

    tokio::spawn(async move {
        let result = match dictionary.define(&word).await {
            Ok(info) => {
                tracing::debug!("'{}': tags {:?}", word, info.tags);
                Ok(info)
            }
            Err(e) => {
                tracing::warn!("Definition lookup for '{}' failed: {}", word, e);
                Err(e.to_string())
            }
        };

        if let Err(e) = tx.send(AppEvent::DefinitionLoaded { generation, result }).await {
            tracing::error!("Failed to report definition: {}", e);
        }
    });
}

/// Search an animation for the word and report back on `loopback_tx`
pub fn spawn_animation_lookup(
    services: &Services,
    ticket: &EnrichmentTicket,
    loopback_tx: &AsyncSender<AppEvent>,
) {
    let generation = ticket.generation;
    let tx = loopback_tx.clone();

    let Some(animation) = services.animation.clone() else {
        tracing::debug!("Animation disabled, skipping lookup");
        // still answer so the loading flag is cleared
        tokio::spawn(async move {
            if let Err(e) = tx
                .send(AppEvent::AnimationLoaded {
                    generation,
                    result: Ok(None),
                })
                .await
            {
                tracing::error!("Failed to report skipped animation: {}", e);
            }
        });
        return;
    };

    let word = ticket.word.clone();

    tokio::spawn(async move {
        let result = match animation.find(&word).await {
            Ok(url) => Ok(url),
            Err(e) => {
                tracing::warn!("Animation lookup for '{}' failed: {}", word, e);
                Err(e.to_string())
            }
        };

        if let Err(e) = tx.send(AppEvent::AnimationLoaded { generation, result }).await {
            tracing::error!("Failed to report animation: {}", e);
        }
    });
}
