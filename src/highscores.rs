//! Session score and best-score tracking
//!
//! The best score is owned by a [`ScoreStore`]; this type caches it for the
//! session and decides when a new candidate is worth writing.

use serde::{Deserialize, Serialize};

use crate::persistence::ScoreStore;

/// Best score seen so far, as loaded from and written back to a store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    best: u64,
}

impl BestScore {
    /// Read the stored best (0 if nothing was saved)
    pub fn load(store: &impl ScoreStore) -> Self {
        let best = store.load_best().unwrap_or(0);
        log::info!("Best score: {}", best);
        Self { best }
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.best
    }

    /// Check if a score beats the best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Propose a session score; writes it to the store when it beats the best
    ///
    /// Returns true if a new best was recorded.
    pub fn submit(&mut self, score: u64, store: &mut impl ScoreStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        store.save_best(score);
        log::info!("New best score: {}", score);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_load_defaults_to_zero() {
        assert_eq!(BestScore::load(&MemoryStore::new()).get(), 0);
        assert_eq!(BestScore::load(&MemoryStore::with_best(64)).get(), 64);
    }

    #[test]
    fn test_submit_only_writes_improvements() {
        let mut store = MemoryStore::with_best(10);
        let mut best = BestScore::load(&store);

        assert!(!best.submit(10, &mut store));
        assert!(!best.submit(4, &mut store));
        assert_eq!(store.saves, 0);

        assert!(best.submit(12, &mut store));
        assert_eq!(best.get(), 12);
        assert_eq!(store.load_best(), Some(12));
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_zero_never_qualifies() {
        assert!(!BestScore::default().qualifies(0));
    }
}
