//! Browser LocalStorage store (wasm only)

use super::{BEST_SCORE_KEY, ScoreStore};

/// Best score kept in LocalStorage under a namespaced key
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    /// LocalStorage key prefix
    const PREFIX: &'static str = "fruit_merge";

    pub fn new() -> Self {
        Self
    }

    fn key() -> String {
        format!("{}_{}", Self::PREFIX, BEST_SCORE_KEY)
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_best(&self) -> Option<u64> {
        let storage = Self::storage()?;
        let raw = storage.get_item(&Self::key()).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn save_best(&mut self, score: u64) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, best score not saved");
            return;
        };
        if let Ok(json) = serde_json::to_string(&score) {
            if storage.set_item(&Self::key(), &json).is_err() {
                log::warn!("Failed to save best score");
                return;
            }
            log::info!("Best score saved ({})", score);
        }
    }
}
