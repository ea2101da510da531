use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::github::DEFAULT_API_URL;

pub const APP_DIR: &str = "repotoggle";
pub const CONFIG_FILE: &str = "config.yml";

/// GitHub caps `per_page` at 100.
const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub token: Option<String>,
    pub per_page: Option<u32>,
}

impl Config {
    pub fn load(config_path: &Path) -> Self {
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(config_path) {
                match serde_yaml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("ignoring invalid config {}: {}", config_path.display(), e)
                    }
                }
            }
        }
        Config::default()
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(MAX_PER_PAGE).clamp(1, MAX_PER_PAGE)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}
