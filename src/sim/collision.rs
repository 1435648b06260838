//! Collision detection and response for circles in a curved container
//!
//! Walls and floor are resolved by clamping and damped reflection; fruit
//! pairs are resolved by symmetric positional correction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::container::Container;

/// Overlap test on squared distances (no square root)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let sum = ra + rb;
    a.distance_squared(b) < sum * sum
}

/// Which container boundary a fruit touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    LeftWall,
    RightWall,
    Floor,
}

/// Clamp a fruit inside the walls and reflect vx with damping
///
/// Returns the wall that was hit, if any.
pub fn resolve_walls(
    pos: &mut Vec2,
    vel: &mut Vec2,
    radius: f32,
    container: &Container,
    damping: f32,
) -> Option<Boundary> {
    if pos.x - radius < container.left {
        pos.x = container.left + radius;
        vel.x *= -damping;
        Some(Boundary::LeftWall)
    } else if pos.x + radius > container.right {
        pos.x = container.right - radius;
        vel.x *= -damping;
        Some(Boundary::RightWall)
    } else {
        None
    }
}

/// Rest a fruit on the floor curve if its bottom passed it
///
/// The bounce always points up; speeds under `rest_speed` snap to zero so a
/// resting fruit does not jitter.
pub fn resolve_floor(
    pos: &mut Vec2,
    vel: &mut Vec2,
    radius: f32,
    container: &Container,
    damping: f32,
    rest_speed: f32,
) -> Option<Boundary> {
    let floor = container.floor_y(pos.x);
    if pos.y + radius <= floor {
        return None;
    }
    pos.y = floor - radius;
    vel.y = -vel.y.abs() * damping;
    if vel.y.abs() < rest_speed {
        vel.y = 0.0;
    }
    Some(Boundary::Floor)
}

/// Positional correction for one overlapping pair
///
/// Each circle moves half the penetration depth along the center line,
/// `a` away from `b` and `b` away from `a`. `None` when the circles do
/// not overlap or their centers coincide.
pub fn separation(a: Vec2, ra: f32, b: Vec2, rb: f32) -> Option<Vec2> {
    let delta = b - a;
    let dist = delta.length();
    let min_dist = ra + rb;
    if dist >= min_dist || dist == 0.0 {
        return None;
    }
    let overlap = 0.5 * (min_dist - dist);
    Some(delta / dist * overlap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn container() -> Container {
        Container::for_screen(800.0, 1000.0, &Tuning::default())
    }

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(19.0, 0.0), 10.0));
        // Touching is not overlapping
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(15.0, 15.0), 10.0));
    }

    #[test]
    fn test_left_wall_bounce() {
        let c = container();
        let mut pos = Vec2::new(c.left + 5.0, 300.0);
        let mut vel = Vec2::new(-10.0, 0.0);
        let hit = resolve_walls(&mut pos, &mut vel, 20.0, &c, 0.05);
        assert_eq!(hit, Some(Boundary::LeftWall));
        assert_eq!(pos.x, c.left + 20.0);
        assert!((vel.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_right_wall_bounce() {
        let c = container();
        let mut pos = Vec2::new(c.right, 300.0);
        let mut vel = Vec2::new(8.0, 1.0);
        let hit = resolve_walls(&mut pos, &mut vel, 20.0, &c, 0.05);
        assert_eq!(hit, Some(Boundary::RightWall));
        assert_eq!(pos.x, c.right - 20.0);
        assert!((vel.x + 0.4).abs() < 1e-6);
        assert_eq!(vel.y, 1.0);
    }

    #[test]
    fn test_floor_snaps_slow_bounce() {
        let c = container();
        let x = 400.0;
        let mut pos = Vec2::new(x, c.floor_y(x));
        let mut vel = Vec2::new(0.0, 2.0);
        let hit = resolve_floor(&mut pos, &mut vel, 30.0, &c, 0.05, 0.2);
        assert_eq!(hit, Some(Boundary::Floor));
        assert!((pos.y + 30.0 - c.floor_y(x)).abs() < 1e-3);
        // 2.0 * 0.05 = 0.1 < 0.2
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_floor_keeps_fast_bounce() {
        let c = container();
        let x = 300.0;
        let mut pos = Vec2::new(x, c.floor_y(x));
        let mut vel = Vec2::new(0.0, 20.0);
        resolve_floor(&mut pos, &mut vel, 30.0, &c, 0.05, 0.2);
        assert!((vel.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_floor_miss_above_curve() {
        let c = container();
        let mut pos = Vec2::new(400.0, 100.0);
        let mut vel = Vec2::new(0.0, 5.0);
        assert_eq!(resolve_floor(&mut pos, &mut vel, 30.0, &c, 0.05, 0.2), None);
        assert_eq!(vel.y, 5.0);
    }

    #[test]
    fn test_separation_halves_penetration() {
        let push = separation(Vec2::ZERO, 10.0, Vec2::new(16.0, 0.0), 10.0).unwrap();
        assert!((push.x - 2.0).abs() < 1e-6);
        assert_eq!(push.y, 0.0);
    }

    #[test]
    fn test_separation_skips_coincident_centers() {
        assert!(separation(Vec2::ONE, 10.0, Vec2::ONE, 10.0).is_none());
        assert!(separation(Vec2::ZERO, 1.0, Vec2::new(5.0, 0.0), 1.0).is_none());
    }
}
