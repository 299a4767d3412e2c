use std::sync::Arc;
use std::time::Duration;

use wordcard_config::Config;
use wordcard_lookup::{AnimationLookup, DefinitionLookup, GiphyClient, WordsApiClient};
use wordcard_store::{CardStore, FirestoreClient};

/// Outbound collaborators of the form; `None` when disabled in the config
#[derive(Clone, Default)]
pub struct Services {
    pub dictionary: Option<Arc<dyn DefinitionLookup>>,
    pub animation: Option<Arc<dyn AnimationLookup>>,
    pub store: Option<Arc<dyn CardStore>>,
}

pub fn build(config: &Config) -> anyhow::Result<Services> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .build()?;

    let dictionary = if config.dictionary.enabled {
        let lookup = WordsApiClient::with_client(
            client.clone(),
            config.dictionary.api_key.clone(),
            config.dictionary.api_url.clone(),
        );
        tracing::info!("Dictionary provider: {}", lookup.metadata().name);
        Some(Arc::new(lookup) as Arc<dyn DefinitionLookup>)
    } else {
        tracing::warn!("Dictionary lookups disabled");
        None
    };

    let animation = if config.animation.enabled {
        let lookup = GiphyClient::with_client(
            client.clone(),
            config.animation.api_key.clone(),
            config.animation.api_url.clone(),
            config.animation.rendition.clone(),
        );
        tracing::info!("Animation provider: {}", lookup.metadata().name);
        Some(Arc::new(lookup) as Arc<dyn AnimationLookup>)
    } else {
        tracing::warn!("Animation lookups disabled");
        None
    };

    let store = if config.store.enabled {
        let root = config.store.documents_root();
        tracing::info!("Card store: {}", root);
        Some(Arc::new(FirestoreClient::with_client(
            client,
            root,
            config.store.id_token.clone(),
        )) as Arc<dyn CardStore>)
    } else {
        tracing::warn!("Card store disabled, cards will not be saved");
        None
    };

    Ok(Services {
        dictionary,
        animation,
        store,
    })
}
