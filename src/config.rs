use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::session::form::{MAX_MAX_TOTAL, MIN_MAX_TOTAL};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_max_total")]
    pub max_total: u32,
    #[serde(default = "default_allow_top_missing")]
    pub allow_top_missing: bool,
    #[serde(default = "default_three_way_split")]
    pub three_way_split: bool,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_max_total() -> u32 {
    10
}
fn default_allow_top_missing() -> bool {
    false
}
fn default_three_way_split() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
            max_total: default_max_total(),
            allow_top_missing: default_allow_top_missing(),
            three_way_split: default_three_way_split(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("splitr")
            .join("config.toml")
    }

    /// Bring hand-edited or stale values back into range. Call after
    /// deserialization and after CLI overrides.
    pub fn normalize(&mut self) {
        if !["en", "nl"].contains(&self.language.as_str()) {
            self.language = default_language();
        }
        self.max_total = self.max_total.clamp(MIN_MAX_TOTAL, MAX_MAX_TOTAL);
    }
}
