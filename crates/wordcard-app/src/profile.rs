use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wordcard_config::Config;

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load the profile at `path`, writing one from the environment defaults if missing
pub fn load_or_init(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        let profile: Profile = serde_json::from_str(&data)
            .with_context(|| format!("Invalid profile {}", path.display()))?;

        tracing::info!("Loaded profile '{}'", profile.name);
        return Ok(profile.value);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "main".to_string());

    let profile = Profile {
        name,
        value: Config::new(),
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created profile {}", path.display());

    Ok(profile.value)
}
