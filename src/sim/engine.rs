//! Simulation engine: the surface input, tick and render collaborators use
//!
//! `step` takes `&mut self`, so it can never interleave with a read or with
//! another step. Readers on another thread should take a [`Frame`] between
//! ticks instead of holding on to the live fruit list.

use super::container::Container;
use super::state::{Frame, Fruit, GameEvent, GameState};
use super::tick::{TickInput, tick};
use crate::highscores::BestScore;
use crate::persistence::ScoreStore;
use crate::tuning::Tuning;

/// Owns the live fruits, the container, the score and the best-score port
#[derive(Debug)]
pub struct Simulation<S: ScoreStore> {
    state: GameState,
    tuning: Tuning,
    best: BestScore,
    store: S,
}

impl<S: ScoreStore> Simulation<S> {
    /// New session for a screen of the given size
    pub fn new(screen_width: f32, screen_height: f32, tuning: Tuning, store: S) -> Self {
        let tuning = tuning.sanitized();
        let container = Container::for_screen(screen_width, screen_height, &tuning);
        let best = BestScore::load(&store);
        log::info!(
            "Session started: walls {:.0}..{:.0}, floor {:.0}+{:.0}",
            container.left,
            container.right,
            container.curve_top,
            container.curve_depth
        );
        Self {
            state: GameState::new(container),
            tuning,
            best,
            store,
        }
    }

    /// Clamp and store the drop x
    pub fn set_spawn_position(&mut self, x: i32) {
        self.state.set_spawn_x(x as f32);
    }

    /// Drop a tier 1 fruit at the current drop x
    pub fn spawn(&mut self) -> GameEvent {
        self.state.spawn()
    }

    /// Pointer press: move the drop point and drop
    pub fn drop_at(&mut self, x: i32) -> GameEvent {
        self.set_spawn_position(x);
        self.spawn()
    }

    /// Advance one fixed tick
    pub fn step(&mut self) -> Vec<GameEvent> {
        self.step_with(&TickInput::default())
    }

    /// Advance one fixed tick, applying input first
    pub fn step_with(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = tick(&mut self.state, input, &self.tuning);
        if self.best.submit(self.state.score, &mut self.store) {
            events.push(GameEvent::NewBest {
                score: self.state.score,
            });
        }
        events
    }

    /// Start over; the best score carries across sessions
    pub fn reset(&mut self) {
        log::info!("Session reset at score {}", self.state.score);
        self.state = GameState::new(self.state.container);
    }

    /// Live fruits in insertion order
    pub fn fruits(&self) -> &[Fruit] {
        &self.state.fruits
    }

    /// Collision radius of a fruit
    pub fn radius_of(&self, fruit: &Fruit) -> f32 {
        self.state.radius_of(fruit)
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn best_score(&self) -> u64 {
        self.best.get()
    }

    pub fn spawn_x(&self) -> f32 {
        self.state.spawn_x
    }

    pub fn time_ticks(&self) -> u64 {
        self.state.time_ticks
    }

    pub fn container(&self) -> &Container {
        &self.state.container
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Full state, for save/replay
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state, for scenario setup in tests and tools
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Owned snapshot for renderers
    pub fn frame(&self) -> Frame {
        self.state.frame(self.best.get())
    }
}
