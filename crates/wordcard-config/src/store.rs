use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Overrides the documents root derived from `project_id`
    pub base_url: Option<String>,
    pub project_id: String,
    /// Bearer token sent with every request, if any
    pub id_token: Option<String>,
}

impl StoreConfig {
    pub fn new() -> Self {
        let project_id = env::var("FIRESTORE_PROJECT_ID").unwrap_or_default();
        let id_token = env::var("FIRESTORE_ID_TOKEN").ok().filter(|t| !t.is_empty());
        let base_url = env::var("FIRESTORE_BASE_URL").ok();

        Self {
            enabled: default_enabled(),
            base_url,
            project_id,
            id_token,
        }
    }

    /// Root under which document paths are resolved
    pub fn documents_root(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!(
                "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
                self.project_id
            ),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: None,
            project_id: String::new(),
            id_token: None,
        }
    }
}
