//! Fruit Merge - a falling-fruit merge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, container collision, merging)
//! - `persistence`: Best-score storage backends
//! - `highscores`: Session score and best-score tracking
//! - `tuning`: Data-driven physics balance
//! - `settings`: Driver preferences, persisted as JSON
//! - `web`: Browser bindings (wasm32 only)

pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::BestScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Highest mergeable tier (watermelon)
    pub const MAX_TIER: u8 = 8;
    /// Asset identifier reserved for the jar background, never a live fruit
    pub const JAR_ASSET_ID: u8 = 9;

    /// Downward acceleration added to vy every tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.8;
    /// Velocity multiplier applied on wall and floor bounces
    pub const DAMPING: f32 = 0.05;
    /// Vertical speeds below this snap to zero after a floor bounce
    pub const REST_SPEED: f32 = 0.2;
    /// Vertical velocity given to a freshly merged fruit (negative is up)
    pub const MERGE_IMPULSE: f32 = -3.0;

    /// Size ratio between consecutive tiers
    pub const GROWTH_FACTOR: f32 = 1.23;
    /// Tier 1 radius as a fraction of the base sprite size
    pub const BASE_RADIUS_FACTOR: f32 = 0.4;
    /// Base sprite size as a fraction of screen width
    pub const BASE_SIZE_RATIO: f32 = 1.0 / 8.0;

    /// Wall distance from each screen edge as a fraction of screen width
    pub const WALL_INSET_RATIO: f32 = 0.25;
    /// Vertical position of the floor curve ends as a fraction of screen height
    pub const CURVE_TOP_RATIO: f32 = 0.9;
    /// How far the floor dips at the container midpoint (pixels)
    pub const CURVE_DEPTH: f32 = 100.0;

    /// Reference tick period of the driver (milliseconds)
    pub const TICK_MS: u64 = 30;
}
