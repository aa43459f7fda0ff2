//! Application settings with JSON persistence.
//!
//! The web application kept these in local storage as a serialized plain
//! object; here they round-trip through a JSON file on disk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::watch;
use tracing::info;

/// User-tunable application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// UI language code ("ko", "en", ...)
    pub language: String,
    pub dark_mode: bool,
    /// Zoom the map opens with
    pub default_zoom: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: "ko".to_string(),
            dark_mode: false,
            default_zoom: 13.0,
        }
    }
}

/// Holds the current settings.
pub struct SettingsState {
    tx: watch::Sender<AppSettings>,
}

impl SettingsState {
    pub fn new(settings: AppSettings) -> Self {
        let (tx, _rx) = watch::channel(settings);
        Self { tx }
    }

    /// Read settings from a JSON file; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::new(AppSettings::default()));
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: AppSettings = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed settings file {}", path.display()))?;
        Ok(Self::new(settings))
    }

    /// Persist the current settings as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(&*self.tx.borrow())
            .context("Failed to serialize settings")?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn settings(&self) -> AppSettings {
        self.tx.borrow().clone()
    }

    pub fn set_language(&self, language: impl Into<String>) {
        self.tx.send_modify(|s| s.language = language.into());
    }

    pub fn set_dark_mode(&self, dark_mode: bool) {
        self.tx.send_modify(|s| s.dark_mode = dark_mode);
    }

    pub fn set_default_zoom(&self, zoom: f64) {
        self.tx.send_modify(|s| s.default_zoom = zoom);
    }

    pub fn subscribe(&self) -> watch::Receiver<AppSettings> {
        self.tx.subscribe()
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}
