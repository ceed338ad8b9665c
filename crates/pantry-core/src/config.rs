//! Configuration types.
//!
//! Configuration lives in `config.toml` under the Pantry config directory.
//! Every field is optional; a missing file means defaults.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::filter::{ViewFilter, DEFAULT_RECENTS_DAYS};
use crate::item::Item;
use crate::view_mode::ViewMode;

/// Runtime configuration read from config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Recents filter settings
    #[serde(default)]
    pub recents: RecentsConfig,

    /// Mode the list opens in
    #[serde(default)]
    pub default_mode: ViewMode,

    /// Recipes to seed the store with
    #[serde(default)]
    pub recipes: Vec<SeedRecipe>,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Build the view filter described by this config.
    pub fn view_filter(&self) -> ViewFilter {
        ViewFilter::with_recents_days(self.recents.window_days)
    }

    /// Materialize the seed recipes relative to `now`.
    pub fn seed_items(&self, now: DateTime<Utc>) -> Vec<Item> {
        self.recipes.iter().map(|seed| seed.to_item(now)).collect()
    }
}

/// Recents filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentsConfig {
    /// Lookback window in days
    pub window_days: u32,
}

impl Default for RecentsConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_RECENTS_DAYS,
        }
    }
}

/// A recipe listed in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRecipe {
    pub title: String,

    #[serde(default)]
    pub favorite: bool,

    /// How many days before startup the recipe was added.
    #[serde(default)]
    pub added_days_ago: u32,

    #[serde(default)]
    pub collections: BTreeSet<String>,
}

impl SeedRecipe {
    fn to_item(&self, now: DateTime<Utc>) -> Item {
        let added_on = now
            .checked_sub_signed(Duration::days(i64::from(self.added_days_ago)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Item {
            collections: self.collections.clone(),
            ..Item::new(self.title.clone())
                .with_favorite(self.favorite)
                .with_added_on(added_on)
        }
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pantry"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Load configuration from `path`, or defaults if the file does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::warn!("No config at {} - using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let text = std::fs::read_to_string(path)?;
    let config = AppConfig::from_toml_str(&text)?;
    tracing::info!(
        "Loaded config from {} ({} seed recipes)",
        path.display(),
        config.recipes.len()
    );
    Ok(config)
}

/// Load configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    load_config_from(&path)
}
