use serde::{Deserialize, Serialize};

fn default_discard_stale() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FormConfig {
    /// Drop lookup responses that belong to an older submitted word
    #[serde(default = "default_discard_stale")]
    pub discard_stale_responses: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            discard_stale_responses: default_discard_stale(),
        }
    }
}
