use serde::{Deserialize, Serialize};

use crate::tags::{TagCode, TagInfo};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Dictionary answer for the given enrichment generation
    DefinitionLoaded {
        generation: u64,
        result: Result<TagInfo, String>,
    },
    /// Animation answer for the given enrichment generation
    AnimationLoaded {
        generation: u64,
        result: Result<Option<String>, String>,
    },
    DecksLoaded(Vec<Deck>),
    DraftChanged(DraftView),
    CardSaved {
        path: String,
    },
    SaveFailed {
        message: String,
    },
    Status(String),
}

/// User driven events coming from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SubmitWord(String),
    WordChanged(String),
    MeaningChanged(String),
    ToggleTag(TagCode),
    SelectDeck(String),
    RetryAnimation,
    ListDecks,
    Show,
    Save,
    Cancel,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Blank,
    WordEntered,
}

/// Read-only snapshot of the draft for rendering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftView {
    pub mode: FormMode,
    pub word: String,
    pub meaning: String,
    pub animation_url: String,
    pub tag_info: TagInfo,
    pub selected_deck: Option<String>,
    pub loading_animation: bool,
    pub no_definition: bool,
    pub can_save: bool,
}
