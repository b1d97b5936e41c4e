use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoSettings {
    pub unsplash_app_id: String,
    pub nyt_api_key: String,
    pub image_search_base_url: String,
    pub article_search_base_url: String,
    pub default_image_query: String,
    pub quiz_source: String,
    pub search_output_path: PathBuf,
    pub quiz_output_path: PathBuf,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            unsplash_app_id: global_constants::UNSPLASH_APP_ID.to_string(),
            nyt_api_key: global_constants::NYT_API_KEY.to_string(),
            image_search_base_url: global_constants::UNSPLASH_SEARCH_URL.to_string(),
            article_search_base_url: global_constants::NYT_ARTICLE_SEARCH_URL.to_string(),
            default_image_query: global_constants::DEFAULT_IMAGE_QUERY.to_string(),
            quiz_source: global_constants::DEFAULT_QUIZ_SOURCE.to_string(),
            search_output_path: PathBuf::from(global_constants::DEFAULT_SEARCH_OUTPUT_FILE),
            quiz_output_path: PathBuf::from(global_constants::DEFAULT_QUIZ_OUTPUT_FILE),
        }
    }
}

impl DemoSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: DemoSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] Image search URL: {}",
            settings.image_search_base_url
        );
        log::debug!(
            "[SETTINGS] Article search URL: {}",
            settings.article_search_base_url
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
