use std::fmt::Write;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use wordcard_types::{AppEvent, Deck, DraftView, FormMode, TagCode, UiEvent};

const HELP: &str = "\
Commands:
  word <text>      submit a new English word
  edit <text>      change the word without looking it up again
  meaning <text>   set the meaning
  tag <code>       toggle a tag (N, V, Adj, Adv, N/A)
  deck <id>        choose the deck to save into
  decks            list decks
  gif              fetch the animation again
  show             print the current card
  save             save the card
  cancel           discard the card
  quit             exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Help,
}

/// Line based front end: reads commands from stdin, prints draft snapshots
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut view = DraftView::default();
    let mut decks: Vec<Deck> = Vec::new();

    println!("{HELP}");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => {
                let Some(line) = line? else {
                    forward(&ui_to_app_tx, UiEvent::Close)?;
                    break;
                };

                match parse_command(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Help)) => println!("{HELP}"),
                    Ok(Some(Command::Event(UiEvent::Save))) if !view.can_save => {
                        println!("A word, a meaning and a deck are needed before saving");
                    }
                    Ok(Some(Command::Event(UiEvent::SelectDeck(id)))) => {
                        match check_deck(&decks, &id) {
                            Ok(()) => {
                                forward(&ui_to_app_tx, UiEvent::SelectDeck(id))?;
                            }
                            Err(message) => println!("{message}"),
                        }
                    }
                    Ok(Some(Command::Event(event))) => {
                        let close = event == UiEvent::Close;
                        forward(&ui_to_app_tx, event)?;
                        if close {
                            break;
                        }
                    }
                    Err(message) => println!("{message}"),
                }
            }
            event = app_to_ui_rx.recv() => {
                let event = event?;
                match &event {
                    AppEvent::DraftChanged(latest) => view = latest.clone(),
                    AppEvent::DecksLoaded(loaded) => decks = loaded.clone(),
                    _ => {}
                }
                if let Some(text) = render(&event) {
                    println!("{text}");
                }
            }
        }
    }

    tracing::info!("UI loop stopping");
    Ok(())
}

/// Queue an event for the event loop without waiting on it.
///
/// The event loop may itself be blocked sending to us, so a full queue drops the
/// command instead of stalling the terminal. Returns whether it was queued.
pub fn forward(ui_to_app_tx: &AsyncSender<AppEvent>, event: UiEvent) -> anyhow::Result<bool> {
    if ui_to_app_tx.try_send(AppEvent::UiEvent(event))? {
        return Ok(true);
    }

    tracing::warn!("Event queue full, command dropped");
    println!("Busy, command dropped. Try again");
    Ok(false)
}

/// Deck ids are only checked once a deck list is known
pub fn check_deck(decks: &[Deck], id: &str) -> Result<(), String> {
    if decks.is_empty() || decks.iter().any(|deck| deck.id == id) {
        Ok(())
    } else {
        Err(format!("Unknown deck: {id} (try 'decks')"))
    }
}

pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (line.trim_end(), ""),
    };

    let event = match name.to_ascii_lowercase().as_str() {
        // the argument is passed as typed, normalization happens on submit
        "word" => UiEvent::SubmitWord(rest.to_string()),
        "edit" => UiEvent::WordChanged(rest.to_string()),
        "meaning" => UiEvent::MeaningChanged(rest.trim().to_string()),
        "tag" => UiEvent::ToggleTag(rest.parse::<TagCode>().map_err(|e| e.to_string())?),
        "deck" => {
            let id = rest.trim();
            if id.is_empty() {
                return Err("usage: deck <id>".to_string());
            }
            UiEvent::SelectDeck(id.to_string())
        }
        "decks" => UiEvent::ListDecks,
        "gif" => UiEvent::RetryAnimation,
        "show" => UiEvent::Show,
        "save" => UiEvent::Save,
        "cancel" => UiEvent::Cancel,
        "quit" | "exit" => UiEvent::Close,
        "help" | "?" => return Ok(Some(Command::Help)),
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };

    Ok(Some(Command::Event(event)))
}

pub fn render(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::DraftChanged(view) => Some(render_view(view)),
        AppEvent::DecksLoaded(decks) => Some(render_decks(decks)),
        AppEvent::CardSaved { path } => Some(format!("Saved card to {path}")),
        AppEvent::SaveFailed { message } => Some(format!("Save failed: {message}")),
        AppEvent::Status(message) => Some(message.clone()),
        _ => None,
    }
}

fn render_decks(decks: &[Deck]) -> String {
    if decks.is_empty() {
        return "No decks".to_string();
    }

    let mut out = String::from("Decks:");
    for deck in decks {
        let _ = write!(out, "\n  {}  {}", deck.id, deck.name);
    }
    out
}

pub fn render_view(view: &DraftView) -> String {
    if view.mode == FormMode::Blank {
        return if view.word.is_empty() {
            "New English word: (word <text>)".to_string()
        } else {
            format!("New English word: {}", view.word)
        };
    }

    let mut out = String::new();
    let _ = writeln!(out, "Word:     {}", view.word);

    let gif = if view.loading_animation {
        "loading..."
    } else if view.animation_url.is_empty() {
        "(none)"
    } else {
        view.animation_url.as_str()
    };
    let _ = writeln!(out, "Gif:      {gif}");

    if view.no_definition {
        let _ = writeln!(out, "          There is no suggested meaning");
    }
    let _ = writeln!(out, "Meaning:  {}", view.meaning);

    let tags: Vec<String> = TagCode::ALL
        .iter()
        .map(|code| {
            if view.tag_info.tags.contains(code) {
                format!("[{code}]")
            } else {
                format!(" {code} ")
            }
        })
        .collect();
    let _ = writeln!(out, "Tags:     {}", tags.join(" "));

    if let Some(examples) = &view.tag_info.examples {
        for example in examples {
            let _ = writeln!(out, "          - {example}");
        }
    }

    let _ = writeln!(
        out,
        "Deck:     {}",
        view.selected_deck.as_deref().unwrap_or("(none)")
    );
    let _ = write!(
        out,
        "Save:     {}",
        if view.can_save { "ready" } else { "needs word, meaning and deck" }
    );

    out
}
