use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordcard_core::CardForm;
use wordcard_types::{AppEvent, UiEvent};

use crate::services::Services;
use crate::state::AppState;

pub mod decks;
pub mod enrichment;
pub mod save_card;

use decks::spawn_deck_load;
use enrichment::{spawn_animation_lookup, spawn_definition_lookup};
use save_card::handle_card_save;

enum Flow {
    Continue,
    Exit,
}

/// Owns the form and applies every event to it, one at a time.
///
/// Lookups and writes run as spawned tasks; their answers come back through
/// `loopback_tx` so the draft is only ever touched from this task.
pub async fn event_loop(
    state: Arc<AppState>,
    services: Services,
    inbound_rx: AsyncReceiver<AppEvent>,
    loopback_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let discard_stale = state.config.read().await.form.discard_stale_responses;
    let mut form = CardForm::new(Vec::new(), discard_stale);

    spawn_deck_load(state.clone(), &services, &loopback_tx).await;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = inbound_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::warn!("[EVENT_LOOP] Inbound channel closed");
                    break;
                }
            },
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        match handle_events(
            state.clone(),
            &services,
            &mut form,
            &loopback_tx,
            &app_to_ui_tx,
            event,
        )
        .await?
        {
            Flow::Continue => {}
            Flow::Exit => break,
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

async fn handle_events(
    state: Arc<AppState>,
    services: &Services,
    form: &mut CardForm,
    loopback_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    let changed = match event {
        AppEvent::UiEvent(UiEvent::SubmitWord(raw)) => match form.submit_word(&raw) {
            Some(ticket) => {
                tracing::info!("Looking up '{}'", ticket.word);
                spawn_definition_lookup(services, &ticket, loopback_tx);
                spawn_animation_lookup(services, &ticket, loopback_tx);
                true
            }
            None => {
                tracing::debug!("Ignoring blank word");
                false
            }
        },
        AppEvent::UiEvent(UiEvent::RetryAnimation) => match form.request_animation() {
            Some(ticket) => {
                spawn_animation_lookup(services, &ticket, loopback_tx);
                true
            }
            None => false,
        },
        AppEvent::UiEvent(UiEvent::WordChanged(text)) => {
            form.update_word(text);
            true
        }
        AppEvent::UiEvent(UiEvent::MeaningChanged(text)) => {
            form.update_meaning(text);
            true
        }
        AppEvent::UiEvent(UiEvent::ToggleTag(code)) => {
            form.toggle_tag(code);
            true
        }
        AppEvent::UiEvent(UiEvent::SelectDeck(deck_id)) => {
            form.update_deck_selection(&deck_id);
            true
        }
        AppEvent::UiEvent(UiEvent::ListDecks) => {
            app_to_ui_tx
                .send(AppEvent::DecksLoaded(form.decks().to_vec()))
                .await?;
            false
        }
        AppEvent::UiEvent(UiEvent::Show) => true,
        AppEvent::UiEvent(UiEvent::Save) => {
            let user_id = state.config.read().await.user_id.clone();
            if let Err(e) = handle_card_save(form, user_id, services, app_to_ui_tx) {
                app_to_ui_tx.send(AppEvent::Status(e.to_string())).await?;
            }
            true
        }
        AppEvent::UiEvent(UiEvent::Cancel) => {
            form.reset_draft();
            true
        }
        AppEvent::UiEvent(UiEvent::Close) => return Ok(Flow::Exit),
        AppEvent::DefinitionLoaded { generation, result } => {
            form.apply_definition(generation, result)
        }
        AppEvent::AnimationLoaded { generation, result } => {
            form.apply_animation(generation, result)
        }
        AppEvent::DecksLoaded(decks) => {
            tracing::info!("{} decks available", decks.len());
            form.set_decks(decks.clone());
            app_to_ui_tx.send(AppEvent::DecksLoaded(decks)).await?;
            true
        }
        AppEvent::Status(message) => {
            app_to_ui_tx.send(AppEvent::Status(message)).await?;
            false
        }
        AppEvent::DraftChanged(_) | AppEvent::CardSaved { .. } | AppEvent::SaveFailed { .. } => {
            // UI-only events, ignore in backend
            false
        }
    };

    if changed {
        app_to_ui_tx.send(AppEvent::DraftChanged(form.view())).await?;
    }

    Ok(Flow::Continue)
}
