//! Persistent settings
//!
//! Settings live in `<config_dir>/chainsite/settings.json`. Missing fields
//! take their defaults, so older files keep loading.

use crate::countdown::Countdown;
use crate::download::ProgressTimings;
use crate::i18n::Language;
use crate::search::SearchTimings;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Language used when nothing valid is persisted
    pub default_language: Language,
    /// Override for the preference storage file
    pub storage_path: Option<PathBuf>,
    pub search: SearchSettings,
    pub download: DownloadSettings,
    pub launch: LaunchSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            storage_path: None,
            search: SearchSettings::default(),
            download: DownloadSettings::default(),
            launch: LaunchSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchSettings {
    pub debounce_ms: u64,
    pub typing_indicator_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            typing_indicator_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DownloadSettings {
    pub tick_ms: u64,
    pub settle_ms: u64,
    pub min_increment: f64,
    pub max_increment: f64,
    /// Where finished downloads are written. Defaults to the user's
    /// download directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            tick_ms: 200,
            settle_ms: 500,
            min_increment: 5.0,
            max_increment: 15.0,
            output_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LaunchSettings {
    /// RFC 3339 timestamp of the mainnet launch
    pub target: String,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            target: "2027-01-01T00:00:00Z".to_string(),
        }
    }
}

impl Settings {
    pub fn search_timings(&self) -> SearchTimings {
        SearchTimings {
            debounce: Duration::from_millis(self.search.debounce_ms),
            typing_indicator: Duration::from_millis(self.search.typing_indicator_ms),
        }
    }

    /// Download pacing. Unusable values fall back to the defaults.
    pub fn progress_timings(&self) -> ProgressTimings {
        let timings = ProgressTimings {
            tick_interval: Duration::from_millis(self.download.tick_ms),
            settle_delay: Duration::from_millis(self.download.settle_ms),
            min_increment: self.download.min_increment,
            max_increment: self.download.max_increment,
        };
        match timings.problem() {
            Some(problem) => {
                tracing::warn!(problem, "invalid download settings, using defaults");
                ProgressTimings::default()
            }
            None => timings,
        }
    }

    pub fn launch_countdown(&self) -> Result<Countdown> {
        let target = parse_target(&self.launch.target)?;
        Ok(Countdown::new(target))
    }
}

pub fn parse_target(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid launch target '{value}', expected RFC 3339"))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Settings persistence manager
pub struct SettingsManager {
    config_path: PathBuf,
}

impl SettingsManager {
    /// Create a settings manager with the default config path
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self {
            config_path: config_dir.join("settings.json"),
        })
    }

    /// Create a settings manager with a custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load settings from disk, falling back to defaults when the file is
    /// missing or empty
    pub fn load(&self) -> Result<Settings> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents =
            fs::read_to_string(&self.config_path).context("Failed to read settings file")?;
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }
        let settings =
            serde_json::from_str(&contents).context("Failed to parse settings file")?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.config_path, json).context("Failed to write settings file")?;
        Ok(())
    }

    /// Apply a partial update to settings
    pub fn update<F>(&self, updater: F) -> Result<Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.load()?;
        updater(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }

    fn get_config_dir() -> Result<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("chainsite"))
        } else if let Some(home) = dirs::home_dir() {
            Ok(home.join(".config").join("chainsite"))
        } else {
            Ok(PathBuf::from(".chainsite"))
        }
    }
}
