use std::env;

use serde::{Deserialize, Serialize};

use self::animation::AnimationConfig;
use self::dictionary::DictionaryConfig;
use self::form::FormConfig;
use self::store::StoreConfig;

pub mod animation;
pub mod dictionary;
pub mod form;
pub mod store;

fn default_request_timeout() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub animation: AnimationConfig,
    pub store: StoreConfig,
    pub form: FormConfig,

    /// Owner of the decks cards are written to
    pub user_id: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        let user_id = env::var("WORDCARD_USER_ID").unwrap_or_default();

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_request_timeout);

        Config {
            dictionary: DictionaryConfig::new(),
            animation: AnimationConfig::new(),
            store: StoreConfig::new(),
            form: FormConfig::default(),

            user_id,
            request_timeout_seconds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            animation: AnimationConfig::default(),
            store: StoreConfig::default(),
            form: FormConfig::default(),
            user_id: String::new(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}
