use wordcard_types::{FormMode, TagCode, TagInfo};

/// The card being authored, owned by a single [`crate::CardForm`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub mode: FormMode,
    pub word: String,
    pub meaning: String,
    pub animation_url: String,
    pub tag_info: TagInfo,
    pub loading_animation: bool,
    pub no_definition: bool,
}

impl Draft {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn has_tag(&self, code: TagCode) -> bool {
        self.tag_info.tags.contains(&code)
    }

    /// Remove every occurrence of `code` if present, append it otherwise
    pub fn toggle_tag(&mut self, code: TagCode) {
        if self.has_tag(code) {
            self.tag_info.tags.retain(|tag| *tag != code);
        } else {
            self.tag_info.tags.push(code);
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.word.trim().is_empty() && !self.meaning.trim().is_empty()
    }
}
