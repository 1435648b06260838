//! Driver settings and preferences
//!
//! Persisted separately from the best score: a JSON file natively,
//! LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_MS;
use crate::tuning::Tuning;

/// Headless autoplay parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Autoplay {
    /// RNG seed for drop positions
    pub seed: u64,
    /// Ticks to simulate
    pub ticks: u64,
    /// Drop a fruit every this many ticks
    pub drop_every: u64,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            ticks: 2000,
            drop_every: 25,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Tick period the driver aims for (milliseconds)
    pub tick_ms: u64,
    /// Sleep between ticks instead of running flat out
    pub realtime: bool,
    /// Log score every this many ticks (0 disables)
    pub report_every: u64,
    /// Physics balance
    pub tuning: Tuning,
    /// Headless driver
    pub autoplay: Autoplay,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1080.0,
            screen_height: 2200.0,
            tick_ms: TICK_MS,
            realtime: false,
            report_every: 250,
            tuning: Tuning::default(),
            autoplay: Autoplay::default(),
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file (native only)
    pub const PATH_ENV: &'static str = "FRUIT_MERGE_SETTINGS";
    /// Default settings file / LocalStorage key
    const STORAGE_KEY: &'static str = "fruit_merge_settings";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Invalid settings: {}", e);
                None
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    /// Load settings from LocalStorage, storing the defaults when there are
    /// none (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load_or_create() -> Self {
        let stored = Self::storage()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok())
            .flatten();
        let Some(json) = stored else {
            let settings = Self::default();
            settings.save();
            return settings;
        };
        match Self::from_json(&json) {
            Some(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode settings: {}", e);
                return;
            }
        };
        if let Err(e) = storage.set_item(Self::STORAGE_KEY, &json) {
            log::warn!("Failed to save settings: {:?}", e);
            return;
        }
        log::info!("Settings saved");
    }

    /// Settings file path: `$FRUIT_MERGE_SETTINGS` or `fruit_merge_settings.json`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path() -> std::path::PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(Into::into)
            .unwrap_or_else(|| format!("{}.json", Self::STORAGE_KEY).into())
    }

    /// Load settings, writing the defaults when no settings file exists (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_create() -> Self {
        Self::load_or_create_at(&Self::path())
    }

    /// `None` when the file is missing or invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Option<Self> {
        let json = std::fs::read_to_string(path).ok()?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Some(settings)
    }

    /// A missing file gets the defaults written to it; an unreadable one is
    /// left alone and the defaults are used
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_create_at(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_from(path).unwrap_or_else(|| {
                log::info!("Using default settings");
                Self::default()
            });
        }
        let settings = Self::default();
        settings.save_to(path);
        settings
    }

    /// Write settings as pretty JSON, returns whether the file was written
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> bool {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode settings: {}", e);
                return false;
            }
        };
        if let Err(e) = std::fs::write(path, json) {
            log::warn!("Failed to save settings to {}: {}", path.display(), e);
            return false;
        }
        log::info!("Settings saved to {}", path.display());
        true
    }
}
