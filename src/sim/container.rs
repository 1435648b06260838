//! Container geometry: two vertical walls and a sine-shaped floor
//!
//! Screen space with y growing downward. The floor meets the walls at
//! `curve_top` and dips by `curve_depth` at the horizontal midpoint.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::state::Tier;
use crate::tuning::Tuning;

/// Immutable per-session container bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Left wall x
    pub left: f32,
    /// Right wall x
    pub right: f32,
    /// Floor y at the walls
    pub curve_top: f32,
    /// Extra floor depth at the midpoint
    pub curve_depth: f32,
    /// Base sprite size, everything else scales from it
    pub base_size: f32,
    /// Tier 1 radius relative to `base_size`
    pub base_radius_factor: f32,
    /// Size ratio between consecutive tiers
    pub growth_factor: f32,
}

impl Container {
    /// Lay out a container for the given screen size
    pub fn for_screen(width: f32, height: f32, tuning: &Tuning) -> Self {
        let inset = width * tuning.wall_inset_ratio;
        Self {
            left: inset,
            right: width - inset,
            curve_top: height * tuning.curve_top_ratio,
            curve_depth: tuning.curve_depth,
            base_size: width * tuning.base_size_ratio,
            base_radius_factor: tuning.base_radius_factor,
            growth_factor: tuning.growth_factor,
        }
    }

    /// Horizontal span between the walls
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Scale of a tier relative to tier 1
    #[inline]
    pub fn tier_scale(&self, tier: Tier) -> f32 {
        self.growth_factor.powi(i32::from(tier.get()) - 1)
    }

    /// Collision radius of a fruit of the given tier
    #[inline]
    pub fn radius(&self, tier: Tier) -> f32 {
        self.base_size * self.base_radius_factor * self.tier_scale(tier)
    }

    /// Edge length of the square sprite drawn for a tier
    pub fn sprite_size(&self, tier: Tier) -> f32 {
        self.base_size * self.tier_scale(tier)
    }

    /// Floor y at a given x (clamped to the container span)
    pub fn floor_y(&self, x: f32) -> f32 {
        let width = self.width();
        let ratio = if width > 0.0 {
            ((x - self.left) / width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.curve_top + (ratio * PI).sin() * self.curve_depth
    }

    /// Clamp a drop x so a tier 1 fruit starts clear of both walls
    pub fn clamp_spawn_x(&self, x: f32) -> f32 {
        let r = self.radius(Tier::MIN);
        let lo = self.left + r;
        let hi = self.right - r;
        if lo > hi {
            // Container narrower than a blueberry
            return (self.left + self.right) / 2.0;
        }
        x.clamp(lo, hi)
    }

    /// Sample points along the floor (for rendering or debugging)
    pub fn sample_floor(&self, num_points: usize) -> Vec<(f32, f32)> {
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                let x = self.left + t * self.width();
                (x, self.floor_y(x))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_TIER;

    fn container() -> Container {
        Container::for_screen(800.0, 1000.0, &Tuning::default())
    }

    #[test]
    fn test_layout_from_screen() {
        let c = container();
        assert_eq!(c.left, 200.0);
        assert_eq!(c.right, 600.0);
        assert!((c.curve_top - 900.0).abs() < 1e-3);
        assert_eq!(c.base_size, 100.0);
    }

    #[test]
    fn test_radius_growth() {
        let c = container();
        assert!((c.radius(Tier::MIN) - 40.0).abs() < 1e-4);
        let t2 = Tier::new(2).unwrap();
        assert!((c.radius(t2) - 40.0 * 1.23).abs() < 1e-4);
        let top = Tier::new(MAX_TIER).unwrap();
        assert!((c.radius(top) - 40.0 * 1.23f32.powi(7)).abs() < 1e-3);
    }

    #[test]
    fn test_sprite_size_tracks_radius() {
        let c = container();
        for tier in Tier::all() {
            assert!((c.sprite_size(tier) * 0.4 - c.radius(tier)).abs() < 1e-3);
        }
        assert!((c.sprite_size(Tier::MIN) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_floor_curve_shape() {
        let c = container();
        // Ends sit at curve_top, midpoint is the deepest point
        assert!((c.floor_y(c.left) - 900.0).abs() < 1e-3);
        assert!((c.floor_y(c.right) - 900.0).abs() < 1e-3);
        assert!((c.floor_y(400.0) - 1000.0).abs() < 1e-3);
        // Outside the walls the curve is clamped
        assert!((c.floor_y(-50.0) - 900.0).abs() < 1e-3);
    }

    #[test]
    fn test_clamp_spawn_x() {
        let c = container();
        let r = c.radius(Tier::MIN);
        assert_eq!(c.clamp_spawn_x(c.left - 50.0), c.left + r);
        assert_eq!(c.clamp_spawn_x(10_000.0), c.right - r);
        assert_eq!(c.clamp_spawn_x(400.0), 400.0);
    }

    #[test]
    fn test_sample_floor_endpoints() {
        let c = container();
        let pts = c.sample_floor(5);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0].0, c.left);
        assert_eq!(pts[4].0, c.right);
        assert!(pts[2].1 > pts[0].1);
    }
}
