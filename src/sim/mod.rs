//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call, one tick)
//! - Stable iteration order (by insertion index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod container;
pub mod engine;
pub mod state;
pub mod tick;

pub use collision::{Boundary, circles_overlap, resolve_floor, resolve_walls, separation};
pub use container::Container;
pub use engine::Simulation;
pub use state::{Frame, Fruit, FruitView, GameEvent, GameState, JAR_ASSET, Tier};
pub use tick::{TickInput, find_merge_pairs, tick};
