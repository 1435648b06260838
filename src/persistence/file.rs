//! JSON file key/value store (native only)

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{BEST_SCORE_KEY, ScoreStore};

/// Contents of the prefs file as found on disk
enum Prefs {
    Missing,
    Valid(Map<String, Value>),
    Corrupt,
}

/// Preferences file holding a flat JSON object
///
/// Other keys in the file are preserved on save, whatever their type. An
/// unreadable file is moved aside to `*.bak` before it is replaced.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Default file name in the working directory
    pub const DEFAULT_PATH: &'static str = "fruit_merge_prefs.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable prefs file is moved before being replaced
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    fn read_prefs(&self) -> Prefs {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return Prefs::Missing;
        };
        match serde_json::from_str::<Value>(&json) {
            Ok(Value::Object(prefs)) => Prefs::Valid(prefs),
            Ok(_) => {
                log::warn!("Prefs {} is not a JSON object", self.path.display());
                Prefs::Corrupt
            }
            Err(e) => {
                log::warn!("Unreadable prefs {}: {}", self.path.display(), e);
                Prefs::Corrupt
            }
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl ScoreStore for JsonFileStore {
    fn load_best(&self) -> Option<u64> {
        match self.read_prefs() {
            Prefs::Valid(prefs) => prefs.get(BEST_SCORE_KEY)?.as_u64(),
            Prefs::Missing | Prefs::Corrupt => None,
        }
    }

    fn save_best(&mut self, score: u64) {
        let mut prefs = match self.read_prefs() {
            Prefs::Valid(prefs) => prefs,
            Prefs::Missing => Map::new(),
            Prefs::Corrupt => {
                let backup = self.backup_path();
                if let Err(e) = fs::rename(&self.path, &backup) {
                    log::warn!(
                        "Not overwriting unreadable prefs {}: backup failed: {}",
                        self.path.display(),
                        e
                    );
                    return;
                }
                log::warn!("Moved unreadable prefs to {}", backup.display());
                Map::new()
            }
        };
        prefs.insert(BEST_SCORE_KEY.to_string(), Value::from(score));

        let json = match serde_json::to_string_pretty(&prefs) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode prefs: {}", e);
                return;
            }
        };

        // Write then rename so a crash never leaves a truncated file
        let tmp = self.path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, &self.path)) {
            log::warn!("Failed to save best score to {}: {}", self.path.display(), e);
            let _ = fs::remove_file(&tmp);
            return;
        }
        log::info!("Best score saved ({})", score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fruit-merge-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_loads_none() {
        let store = JsonFileStore::new(temp_path("missing.json"));
        assert_eq!(store.load_best(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = JsonFileStore::new(temp_path("roundtrip.json"));
        store.save_best(128);
        assert_eq!(store.load_best(), Some(128));
        store.save_best(256);
        assert_eq!(JsonFileStore::new(store.path()).load_best(), Some(256));
    }

    #[test]
    fn test_save_keeps_other_keys() {
        let path = temp_path("other_keys.json");
        fs::write(
            &path,
            r#"{ "games_played": 3, "player": "ann", "volume": 0.5, "audio": { "muted": true } }"#,
        )
        .unwrap();
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load_best(), None);

        store.save_best(10);

        let prefs: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(prefs["games_played"], 3);
        assert_eq!(prefs["player"], "ann");
        assert_eq!(prefs["volume"], 0.5);
        assert_eq!(prefs["audio"]["muted"], true);
        assert_eq!(prefs[BEST_SCORE_KEY], 10);
        assert_eq!(store.load_best(), Some(10));
    }

    #[test]
    fn test_corrupt_file_backed_up_before_save() {
        let path = temp_path("corrupt_save.json");
        fs::write(&path, "{ not json").unwrap();
        let mut store = JsonFileStore::new(&path);
        let _ = fs::remove_file(store.backup_path());

        store.save_best(42);

        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), "{ not json");
        assert_eq!(store.load_best(), Some(42));
    }

    #[test]
    fn test_corrupt_file_loads_none() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert_eq!(store.load_best(), None);
    }
}
