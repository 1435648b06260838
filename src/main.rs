//! Fruit Merge headless driver
//!
//! Plays an autoplay session: drops fruit at seeded random positions on a
//! fixed cadence and steps the simulation once per tick.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use fruit_merge::Settings;
    use fruit_merge::persistence::JsonFileStore;
    use fruit_merge::sim::{GameEvent, Simulation, Tier, TickInput};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Fruit Merge (headless) starting...");

    let settings = Settings::load_or_create();
    let autoplay = settings.autoplay.clone();
    let mut sim = Simulation::new(
        settings.screen_width,
        settings.screen_height,
        settings.tuning,
        JsonFileStore::default(),
    );
    let mut rng = Pcg32::seed_from_u64(autoplay.seed);
    log::info!("Autoplay seed {}, {} ticks", autoplay.seed, autoplay.ticks);

    let (left, right) = (sim.container().left as i32, sim.container().right as i32);
    let drop_every = autoplay.drop_every.max(1);
    let mut merges = 0u64;
    let mut top_tier = Tier::MIN;

    for t in 0..autoplay.ticks {
        // Out-of-range drops are fine, the engine clamps them
        let drop_x = (t % drop_every == 0).then(|| rng.random_range(left - 20..=right + 20));
        for event in sim.step_with(&TickInput { drop_x }) {
            if let GameEvent::Merged { into, .. } = event {
                merges += 1;
                top_tier = top_tier.max(into);
            }
        }

        if settings.report_every > 0 && sim.time_ticks() % settings.report_every == 0 {
            log::info!(
                "tick {}: {} fruits, score {}, best {}",
                sim.time_ticks(),
                sim.fruits().len(),
                sim.score(),
                sim.best_score()
            );
        }
        if settings.realtime {
            std::thread::sleep(Duration::from_millis(settings.tick_ms));
        }
    }

    println!(
        "Score {} (best {}) after {} ticks: {} merges, largest fruit {}",
        sim.score(),
        sim.best_score(),
        sim.time_ticks(),
        merges,
        top_tier.asset_name()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is fruit_merge::web::start, this is just to satisfy the compiler
}
