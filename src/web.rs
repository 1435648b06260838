//! Browser bindings
//!
//! The page owns the canvas, the pointer listener and the 30 ms timer; it
//! calls into [`WebGame`] and draws whatever [`WebGame::fruits`] and
//! [`WebGame::floor`] return.

use wasm_bindgen::prelude::*;

use crate::Settings;
use crate::persistence::LocalStorageStore;
use crate::sim::Simulation;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Fruit Merge starting...");
}

/// One game session bound to LocalStorage
#[wasm_bindgen]
pub struct WebGame {
    sim: Simulation<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(screen_width: f32, screen_height: f32) -> WebGame {
        let settings = Settings::load_or_create();
        Self {
            sim: Simulation::new(
                screen_width,
                screen_height,
                settings.tuning,
                LocalStorageStore::new(),
            ),
        }
    }

    /// Pointer press at x
    pub fn press(&mut self, x: i32) {
        self.sim.drop_at(x);
    }

    pub fn step(&mut self) {
        self.sim.step();
    }

    pub fn reset(&mut self) {
        self.sim.reset();
    }

    pub fn score(&self) -> u64 {
        self.sim.score()
    }

    pub fn best_score(&self) -> u64 {
        self.sim.best_score()
    }

    /// Flat `[x, y, radius, tier, ...]` for every fruit, in draw order
    pub fn fruits(&self) -> Vec<f32> {
        self.sim
            .frame()
            .fruits
            .iter()
            .flat_map(|f| [f.pos.x, f.pos.y, f.radius, f32::from(f.tier.get())])
            .collect()
    }

    /// Flat `[x, y, ...]` points along the floor curve, wall to wall
    pub fn floor(&self, samples: usize) -> Vec<f32> {
        self.sim
            .container()
            .sample_floor(samples)
            .into_iter()
            .flat_map(|(x, y)| [x, y])
            .collect()
    }
}
