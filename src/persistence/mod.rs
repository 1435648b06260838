//! Best-score persistence
//!
//! The simulation only ever talks to a [`ScoreStore`]; the medium behind it
//! is the driver's choice:
//! - [`MemoryStore`]: tests and throwaway sessions
//! - `JsonFileStore`: native builds, a small JSON key/value file
//! - `LocalStorageStore`: wasm builds, browser LocalStorage
//!
//! Failures never reach the simulation. Loads return `None`, saves log a
//! warning and carry on.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

/// Key the best score is stored under, shared by every session
pub const BEST_SCORE_KEY: &str = "best_score";

/// Get/set port for the application-wide best score
pub trait ScoreStore {
    /// Stored best score, `None` if nothing was ever saved or it is unreadable
    fn load_best(&self) -> Option<u64>;

    /// Store a new best score
    fn save_best(&mut self, score: u64);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u64>,
    /// Number of `save_best` calls, handy for asserting write frequency
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a best score
    pub fn with_best(score: u64) -> Self {
        Self {
            best: Some(score),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> Option<u64> {
        self.best
    }

    fn save_best(&mut self, score: u64) {
        self.best = Some(score);
        self.saves += 1;
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load_best(&self) -> Option<u64> {
        (**self).load_best()
    }

    fn save_best(&mut self, score: u64) {
        (**self).save_best(score)
    }
}
