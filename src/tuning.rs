//! Data-driven physics balance
//!
//! Every constant the simulation reads lives here so a session can be
//! replayed with different numbers without touching the engine.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and layout constants for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to vy every tick
    pub gravity: f32,
    /// Bounce energy retention (wall and floor)
    pub damping: f32,
    /// Floor bounces slower than this come to rest
    pub rest_speed: f32,
    /// Initial vy of a merged fruit
    pub merge_impulse: f32,
    /// Radius ratio between consecutive tiers
    pub growth_factor: f32,
    /// Tier 1 radius relative to base size
    pub base_radius_factor: f32,
    /// Base size relative to screen width
    pub base_size_ratio: f32,
    /// Wall inset relative to screen width
    pub wall_inset_ratio: f32,
    /// Floor curve top relative to screen height
    pub curve_top_ratio: f32,
    /// Floor dip at the midpoint, in pixels
    pub curve_depth: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            damping: DAMPING,
            rest_speed: REST_SPEED,
            merge_impulse: MERGE_IMPULSE,
            growth_factor: GROWTH_FACTOR,
            base_radius_factor: BASE_RADIUS_FACTOR,
            base_size_ratio: BASE_SIZE_RATIO,
            wall_inset_ratio: WALL_INSET_RATIO,
            curve_top_ratio: CURVE_TOP_RATIO,
            curve_depth: CURVE_DEPTH,
        }
    }
}

impl Tuning {
    /// Clamp values that would break the simulation (negative gravity is allowed)
    pub fn sanitized(mut self) -> Self {
        self.damping = self.damping.clamp(0.0, 1.0);
        self.rest_speed = self.rest_speed.max(0.0);
        self.growth_factor = self.growth_factor.max(1.0);
        self.base_radius_factor = self.base_radius_factor.max(f32::EPSILON);
        self.base_size_ratio = self.base_size_ratio.max(f32::EPSILON);
        self.wall_inset_ratio = self.wall_inset_ratio.clamp(0.0, 0.49);
        self.curve_depth = self.curve_depth.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 1.5 }"#).unwrap();
        assert_eq!(tuning.gravity, 1.5);
        assert_eq!(tuning.damping, DAMPING);
        assert_eq!(tuning.curve_depth, CURVE_DEPTH);
    }

    #[test]
    fn test_sanitized_clamps_damping() {
        let tuning = Tuning {
            damping: 3.0,
            growth_factor: 0.5,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.damping, 1.0);
        assert_eq!(tuning.growth_factor, 1.0);
    }
}
