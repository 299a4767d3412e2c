use wordcard_types::{Deck, DraftView, FormMode, TagCode, TagInfo};

use crate::card::Card;
use crate::draft::Draft;
use crate::error::FormError;
use crate::preprocess::normalize_word;

/// Lookups to launch for a submitted word, tagged with the generation they answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentTicket {
    pub word: String,
    pub generation: u64,
}

/// A card ready to be handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCard {
    pub deck_id: String,
    pub card: Card,
}

/// State container for the card authoring form.
///
/// Every mutation of the draft goes through here. Network work is not done by
/// the form itself: `submit_word` hands back a ticket and the caller reports the
/// lookup answers through `apply_definition` / `apply_animation`.
#[derive(Debug, Clone)]
pub struct CardForm {
    draft: Draft,
    decks: Vec<Deck>,
    selected_deck: Option<String>,
    generation: u64,
    discard_stale: bool,
}

impl CardForm {
    pub fn new(decks: Vec<Deck>, discard_stale: bool) -> Self {
        Self {
            draft: Draft::blank(),
            decks,
            selected_deck: None,
            generation: 0,
            discard_stale,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.draft.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn selected_deck(&self) -> Option<&str> {
        self.selected_deck.as_deref()
    }

    /// Replace the deck list; a selection that no longer exists is dropped
    pub fn set_decks(&mut self, decks: Vec<Deck>) {
        if let Some(selected) = &self.selected_deck
            && !decks.iter().any(|deck| &deck.id == selected)
        {
            self.selected_deck = None;
        }
        self.decks = decks;

        if self.draft.mode == FormMode::WordEntered {
            self.default_deck();
        }
    }

    /// Normalize and submit the word for enrichment.
    ///
    /// Returns `None` for blank input, leaving the form untouched.
    pub fn submit_word(&mut self, raw: &str) -> Option<EnrichmentTicket> {
        if raw.trim().is_empty() {
            return None;
        }

        let word = normalize_word(raw);
        self.generation += 1;

        self.draft.mode = FormMode::WordEntered;
        self.draft.word = word.clone();
        // enrichment of the previous word must not leak into this one
        self.draft.animation_url.clear();
        self.draft.tag_info = TagInfo::default();
        self.draft.loading_animation = true;
        self.draft.no_definition = false;
        self.default_deck();

        tracing::debug!(word = %word, generation = self.generation, "word submitted");

        Some(EnrichmentTicket {
            word,
            generation: self.generation,
        })
    }

    /// Ask for a fresh animation for the word currently in the form
    pub fn request_animation(&mut self) -> Option<EnrichmentTicket> {
        if self.draft.mode != FormMode::WordEntered || self.draft.word.trim().is_empty() {
            return None;
        }

        self.draft.loading_animation = true;

        Some(EnrichmentTicket {
            word: normalize_word(&self.draft.word),
            generation: self.generation,
        })
    }

    pub fn toggle_tag(&mut self, code: TagCode) {
        self.draft.toggle_tag(code);
    }

    pub fn update_word(&mut self, text: impl Into<String>) {
        self.draft.word = text.into();
    }

    pub fn update_meaning(&mut self, text: impl Into<String>) {
        self.draft.meaning = text.into();
    }

    pub fn update_deck_selection(&mut self, deck_id: &str) {
        self.selected_deck = Some(deck_id.to_string());
    }

    /// Merge a dictionary answer. Returns whether the draft changed.
    pub fn apply_definition(&mut self, generation: u64, result: Result<TagInfo, String>) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(generation, current = self.generation, "stale definition dropped");
            return false;
        }

        match result {
            Ok(tag_info) => {
                self.draft.tag_info = tag_info;
                self.draft.no_definition = false;
            }
            Err(reason) => {
                tracing::debug!("no definition: {}", reason);
                self.draft.no_definition = true;
            }
        }

        true
    }

    /// Merge an animation answer. The loading flag is cleared on every outcome.
    pub fn apply_animation(
        &mut self,
        generation: u64,
        result: Result<Option<String>, String>,
    ) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(generation, current = self.generation, "stale animation dropped");
            return false;
        }

        match result {
            Ok(Some(url)) => self.draft.animation_url = url,
            Ok(None) => {}
            Err(reason) => tracing::debug!("animation lookup failed: {}", reason),
        }
        self.draft.loading_animation = false;

        true
    }

    /// Presence check used by the presentation layer to enable saving
    pub fn can_save(&self) -> bool {
        self.draft.is_complete() && self.selected_deck.is_some()
    }

    /// Build the card from the draft and reset the form.
    ///
    /// Word and meaning are expected to be checked by the caller already.
    pub fn save_card(&mut self) -> Result<PendingCard, FormError> {
        let deck_id = self
            .selected_deck
            .clone()
            .ok_or(FormError::NoDeckSelected)?;

        let card = Card::from_draft(&self.draft);
        self.reset_draft();

        Ok(PendingCard { deck_id, card })
    }

    /// Back to the blank form. The deck selection is kept.
    pub fn reset_draft(&mut self) {
        self.draft = Draft::blank();
        self.generation += 1;
    }

    pub fn view(&self) -> DraftView {
        DraftView {
            mode: self.draft.mode,
            word: self.draft.word.clone(),
            meaning: self.draft.meaning.clone(),
            animation_url: self.draft.animation_url.clone(),
            tag_info: self.draft.tag_info.clone(),
            selected_deck: self.selected_deck.clone(),
            loading_animation: self.draft.loading_animation,
            no_definition: self.draft.no_definition,
            can_save: self.can_save(),
        }
    }

    fn default_deck(&mut self) {
        if self.selected_deck.is_none()
            && let Some(first) = self.decks.first()
        {
            self.selected_deck = Some(first.id.clone());
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.discard_stale || generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decks() -> Vec<Deck> {
        vec![
            Deck {
                id: "d1".to_string(),
                name: "Verbs".to_string(),
            },
            Deck {
                id: "d2".to_string(),
                name: "Animals".to_string(),
            },
        ]
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut form = CardForm::new(decks(), true);

        assert_eq!(form.submit_word(""), None);
        assert_eq!(form.submit_word("   "), None);
        assert_eq!(form.mode(), FormMode::Blank);
        assert_eq!(form.selected_deck(), None);
        assert_eq!(form.generation(), 0);
    }

    #[test]
    fn submit_normalizes_and_selects_first_deck() {
        let mut form = CardForm::new(decks(), true);

        let ticket = form.submit_word("Dog ").unwrap();
        assert_eq!(ticket.word, "dog");
        assert_eq!(form.mode(), FormMode::WordEntered);
        assert_eq!(form.draft().word, "dog");
        assert!(form.draft().loading_animation);
        assert_eq!(form.selected_deck(), Some("d1"));
    }

    #[test]
    fn submit_keeps_existing_deck_selection() {
        let mut form = CardForm::new(decks(), true);
        form.update_deck_selection("d2");

        form.submit_word("cat");
        assert_eq!(form.selected_deck(), Some("d2"));
    }

    #[test]
    fn submit_without_decks_leaves_selection_empty() {
        let mut form = CardForm::new(Vec::new(), true);

        form.submit_word("cat");
        assert_eq!(form.selected_deck(), None);
        assert_eq!(form.save_card(), Err(FormError::NoDeckSelected));
        assert_eq!(form.draft().word, "cat");
    }

    #[test]
    fn deck_selection_is_replaced_as_given() {
        let mut form = CardForm::new(decks(), true);

        form.update_deck_selection("d9");
        assert_eq!(form.selected_deck(), Some("d9"));

        form.submit_word("cat");
        assert_eq!(form.selected_deck(), Some("d9"));
    }

    #[test]
    fn resubmitted_word_drops_previous_enrichment() {
        let mut form = CardForm::new(decks(), true);
        let cat = form.submit_word("cat").unwrap();
        form.apply_animation(cat.generation, Ok(Some("cat.gif".to_string())));
        form.apply_definition(
            cat.generation,
            Ok(TagInfo {
                tags: vec![TagCode::Noun],
                examples: Some(vec!["the cat sat".to_string()]),
            }),
        );

        let other = form.submit_word("zzxq").unwrap();
        assert_eq!(form.draft().animation_url, "");
        assert_eq!(form.draft().tag_info, TagInfo::default());

        form.apply_animation(other.generation, Ok(None));
        form.apply_definition(other.generation, Err("not found".to_string()));
        form.update_meaning("gibberish");

        let pending = form.save_card().unwrap();
        assert_eq!(pending.card.word, "zzxq");
        assert_eq!(pending.card.animation_url, "");
        assert_eq!(pending.card.examples, None);
        assert_eq!(pending.card.tags.len(), 1);
        assert_eq!(pending.card.tags.get("N/A"), Some(&true));
    }

    #[test]
    fn enrichment_answers_merge_in_any_order() {
        let mut form = CardForm::new(decks(), true);
        let ticket = form.submit_word("Dog").unwrap();

        assert!(form.apply_animation(ticket.generation, Ok(None)));
        assert_eq!(form.draft().animation_url, "");
        assert!(!form.draft().loading_animation);

        let info = TagInfo {
            tags: vec![TagCode::Noun, TagCode::Verb],
            examples: Some(vec!["walk the dog".to_string()]),
        };
        assert!(form.apply_definition(ticket.generation, Ok(info.clone())));
        assert_eq!(form.draft().tag_info, info);
        assert!(!form.draft().no_definition);
    }

    #[test]
    fn failed_lookups_raise_flags_and_clear_loading() {
        let mut form = CardForm::new(decks(), true);
        let ticket = form.submit_word("zzxq").unwrap();

        form.apply_definition(ticket.generation, Err("not found".to_string()));
        assert!(form.draft().no_definition);
        assert_eq!(form.draft().tag_info, TagInfo::default());

        form.apply_animation(ticket.generation, Err("timeout".to_string()));
        assert!(!form.draft().loading_animation);
    }

    #[test]
    fn stale_answers_are_dropped_when_guarded() {
        let mut form = CardForm::new(decks(), true);
        let first = form.submit_word("cat").unwrap();
        let second = form.submit_word("dog").unwrap();

        assert!(!form.apply_animation(first.generation, Ok(Some("cat.gif".to_string()))));
        assert_eq!(form.draft().animation_url, "");
        assert!(form.draft().loading_animation);

        assert!(form.apply_animation(second.generation, Ok(Some("dog.gif".to_string()))));
        assert_eq!(form.draft().animation_url, "dog.gif");
    }

    #[test]
    fn stale_answers_overwrite_when_unguarded() {
        let mut form = CardForm::new(decks(), false);
        let first = form.submit_word("cat").unwrap();
        form.submit_word("dog");

        assert!(form.apply_animation(first.generation, Ok(Some("cat.gif".to_string()))));
        assert_eq!(form.draft().animation_url, "cat.gif");
    }

    #[test]
    fn answers_after_cancel_do_not_refill_the_form() {
        let mut form = CardForm::new(decks(), true);
        let ticket = form.submit_word("cat").unwrap();
        form.reset_draft();

        assert!(!form.apply_definition(
            ticket.generation,
            Ok(TagInfo {
                tags: vec![TagCode::Noun],
                examples: None,
            })
        ));
        assert_eq!(form.draft(), &Draft::blank());
    }

    #[test]
    fn save_builds_card_and_resets() {
        let mut form = CardForm::new(decks(), true);
        let ticket = form.submit_word("Dog").unwrap();
        form.apply_definition(
            ticket.generation,
            Ok(TagInfo {
                tags: vec![TagCode::Noun, TagCode::Verb],
                examples: None,
            }),
        );
        form.update_meaning("a loyal pet");
        assert!(form.can_save());

        let pending = form.save_card().unwrap();
        assert_eq!(pending.deck_id, "d1");
        assert_eq!(pending.card.word, "dog");
        assert_eq!(pending.card.meaning, "a loyal pet");
        assert_eq!(pending.card.tags.len(), 2);
        assert_eq!(pending.card.tags.get("N"), Some(&true));
        assert_eq!(pending.card.tags.get("V"), Some(&true));
        assert_eq!(pending.card.examples, None);

        assert_eq!(form.draft(), &Draft::blank());
        assert_eq!(form.mode(), FormMode::Blank);
        assert_eq!(form.selected_deck(), Some("d1"));
        assert!(!form.can_save());
    }

    #[test]
    fn save_with_no_tags_uses_sentinel() {
        let mut form = CardForm::new(decks(), true);
        form.submit_word("thing");
        form.update_meaning("something");
        form.toggle_tag(TagCode::Adjective);
        form.toggle_tag(TagCode::Adjective);

        let pending = form.save_card().unwrap();
        assert_eq!(pending.card.tags.len(), 1);
        assert_eq!(pending.card.tags.get("N/A"), Some(&true));
        assert_eq!(pending.card.examples, None);
    }

    #[test]
    fn reset_blanks_every_field() {
        let mut form = CardForm::new(decks(), true);
        let ticket = form.submit_word("run").unwrap();
        form.update_meaning("move");
        form.toggle_tag(TagCode::Verb);
        form.apply_animation(ticket.generation, Ok(Some("run.gif".to_string())));
        form.apply_definition(ticket.generation, Err("offline".to_string()));

        form.reset_draft();

        let view = form.view();
        assert_eq!(view.mode, FormMode::Blank);
        assert_eq!(view.word, "");
        assert_eq!(view.meaning, "");
        assert_eq!(view.animation_url, "");
        assert_eq!(view.tag_info, TagInfo::default());
        assert!(!view.loading_animation);
        assert!(!view.no_definition);
    }

    #[test]
    fn retry_only_applies_to_entered_word() {
        let mut form = CardForm::new(decks(), true);
        assert_eq!(form.request_animation(), None);

        let ticket = form.submit_word("Cat").unwrap();
        form.apply_animation(ticket.generation, Ok(None));
        form.update_word("Cats ");

        let retry = form.request_animation().unwrap();
        assert_eq!(retry.word, "cats");
        assert_eq!(retry.generation, ticket.generation);
        assert!(form.draft().loading_animation);
    }

    #[test]
    fn dropping_selected_deck_falls_back_to_first() {
        let mut form = CardForm::new(decks(), true);
        form.update_deck_selection("d2");
        form.submit_word("cat");

        form.set_decks(vec![Deck {
            id: "d3".to_string(),
            name: "Misc".to_string(),
        }]);
        assert_eq!(form.selected_deck(), Some("d3"));
    }
}
