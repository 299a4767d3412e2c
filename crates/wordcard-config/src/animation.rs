use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.giphy.com/v1/gifs/translate".to_string()
}

fn default_rendition() -> String {
    "fixed_height_downsampled".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Which image variant of the search hit to keep
    #[serde(default = "default_rendition")]
    pub rendition: String,
}

impl AnimationConfig {
    pub fn new() -> Self {
        let api_key = env::var("GIPHY_API_KEY").unwrap_or_default();

        Self {
            api_key,
            ..Self::default()
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: String::new(),
            rendition: default_rendition(),
        }
    }
}
