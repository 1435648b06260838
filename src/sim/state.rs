//! Game state and core simulation types
//!
//! All state that must survive between ticks lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Boundary;
use super::container::Container;
use crate::consts::{JAR_ASSET_ID, MAX_TIER};

/// Asset name of the jar background (identifier 9)
pub const JAR_ASSET: &str = "jar";

/// Fruit rank in `1..=MAX_TIER`, governs size and merge target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    /// Smallest tier, the only one the player can drop
    pub const MIN: Tier = Tier(1);
    /// Largest tier, two of these never merge
    pub const MAX: Tier = Tier(MAX_TIER);

    /// Returns `None` outside `1..=MAX_TIER`
    pub fn new(value: u8) -> Option<Self> {
        (1..=MAX_TIER).contains(&value).then_some(Self(value))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Tier produced by merging two of this tier, `None` past the cap
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Whether two fruits of this tier may merge
    #[inline]
    pub fn can_merge(self) -> bool {
        self < Self::MAX
    }

    /// Points for merging two fruits of this tier: 2^tier
    #[inline]
    pub fn merge_points(self) -> u64 {
        1u64 << self.0
    }

    /// Name of the sprite asset for this tier
    pub fn asset_name(self) -> &'static str {
        match self.0 {
            1 => "blueberry",
            2 => "strawberry",
            3 => "orange",
            4 => "apple",
            5 => "pear",
            6 => "peach",
            7 => "melon",
            _ => "watermelon",
        }
    }

    /// All live tiers in ascending order
    pub fn all() -> impl Iterator<Item = Tier> {
        (1..=MAX_TIER).map(Tier)
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value == JAR_ASSET_ID {
            return Err(format!("tier {value} is reserved for the jar"));
        }
        Tier::new(value).ok_or_else(|| format!("tier {value} out of range 1..={MAX_TIER}"))
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.0
    }
}

/// A fruit entity
///
/// Radius is not stored; it is always derived from the tier through
/// [`Container::radius`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: Tier,
}

impl Fruit {
    /// A fruit at rest
    pub fn new(tier: Tier, pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            tier,
        }
    }

    /// Fruit produced by merging `a` and `b`, placed at their midpoint
    /// and lifted by its own radius so it does not immediately re-overlap
    pub fn merged(a: &Fruit, b: &Fruit, tier: Tier, radius: f32, impulse: f32) -> Self {
        let mid = (a.pos + b.pos) / 2.0;
        Self {
            pos: Vec2::new(mid.x, mid.y - radius),
            vel: Vec2::new(0.0, impulse),
            tier,
        }
    }
}

/// Everything a renderer needs to draw one fruit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FruitView {
    pub pos: Vec2,
    pub radius: f32,
    pub tier: Tier,
}

impl FruitView {
    pub fn of(fruit: &Fruit, container: &Container) -> Self {
        Self {
            pos: fruit.pos,
            radius: container.radius(fruit.tier),
            tier: fruit.tier,
        }
    }

    /// Square bounding box `(min, max)` centered on the fruit
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = Vec2::splat(self.radius);
        (self.pos - half, self.pos + half)
    }
}

/// Things that happened during a tick, for audio/effects collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tier 1 fruit was dropped at x
    Spawned { x: f32 },
    /// Two fruits of `from` merged into one of `into`
    Merged {
        from: Tier,
        into: Tier,
        pos: Vec2,
        points: u64,
    },
    /// Two fruits merged past the top tier and vanished
    MergeDropped { from: Tier },
    /// A fruit hit a wall, or bounced off the floor hard enough to lift off
    Bounced {
        boundary: Boundary,
        tier: Tier,
        /// Speed into the boundary before damping
        speed: f32,
    },
    /// The session score beat the stored best score
    NewBest { score: u64 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session geometry
    pub container: Container,
    /// Live fruits in insertion order
    pub fruits: Vec<Fruit>,
    /// Where the next fruit drops
    pub spawn_x: f32,
    /// Session score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh session with the drop point centered
    pub fn new(container: Container) -> Self {
        Self {
            container,
            fruits: Vec::new(),
            spawn_x: (container.left + container.right) / 2.0,
            score: 0,
            time_ticks: 0,
        }
    }

    /// Collision radius of a live fruit
    #[inline]
    pub fn radius_of(&self, fruit: &Fruit) -> f32 {
        self.container.radius(fruit.tier)
    }

    /// Clamp and store the drop x
    pub fn set_spawn_x(&mut self, x: f32) {
        self.spawn_x = self.container.clamp_spawn_x(x);
    }

    /// Drop a tier 1 fruit at the top of the screen
    pub fn spawn(&mut self) -> GameEvent {
        self.fruits
            .push(Fruit::new(Tier::MIN, Vec2::new(self.spawn_x, 0.0)));
        GameEvent::Spawned { x: self.spawn_x }
    }

    /// Owned copy of everything a renderer reads
    pub fn frame(&self, best_score: u64) -> Frame {
        Frame {
            fruits: self
                .fruits
                .iter()
                .map(|f| FruitView::of(f, &self.container))
                .collect(),
            score: self.score,
            best_score,
            time_ticks: self.time_ticks,
        }
    }
}

/// Read-only snapshot handed to renderers
///
/// Taken between ticks, so it never contains a half-applied merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub fruits: Vec<FruitView>,
    pub score: u64,
    pub best_score: u64,
    pub time_ticks: u64,
}
