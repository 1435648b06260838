//! Fixed timestep simulation tick
//!
//! One call advances the state by one tick. Phase order is fixed:
//! integrate, walls, floor, merge detection, merge execution, separation.

use super::collision::{circles_overlap, resolve_floor, resolve_walls, separation};
use super::state::{Fruit, GameEvent, GameState};
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop a fruit at this x before advancing (pointer press)
    pub drop_x: Option<i32>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(x) = input.drop_x {
        state.set_spawn_x(x as f32);
        events.push(state.spawn());
    }

    state.time_ticks += 1;

    integrate(state, tuning, &mut events);
    let pairs = find_merge_pairs(state);
    apply_merges(state, &pairs, tuning, &mut events);
    resolve_overlaps(state);

    events
}

/// Gravity, motion and container collision for every fruit
///
/// Wall hits and floor bounces that leave the fruit moving are reported;
/// a fruit settling back onto the floor each tick is not.
fn integrate(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let container = state.container;
    for fruit in &mut state.fruits {
        let radius = container.radius(fruit.tier);

        fruit.vel.y += tuning.gravity;
        fruit.pos += fruit.vel;

        let impact = fruit.vel;
        if let Some(boundary) = resolve_walls(
            &mut fruit.pos,
            &mut fruit.vel,
            radius,
            &container,
            tuning.damping,
        ) {
            events.push(GameEvent::Bounced {
                boundary,
                tier: fruit.tier,
                speed: impact.x.abs(),
            });
        }

        let impact = fruit.vel;
        let floor_hit = resolve_floor(
            &mut fruit.pos,
            &mut fruit.vel,
            radius,
            &container,
            tuning.damping,
            tuning.rest_speed,
        );
        if let Some(boundary) = floor_hit.filter(|_| fruit.vel.y != 0.0) {
            events.push(GameEvent::Bounced {
                boundary,
                tier: fruit.tier,
                speed: impact.y.abs(),
            });
        }
    }
}

/// Select merge pairs in index order
///
/// First match wins: once a fruit is part of a selected pair it is skipped
/// for the rest of the pass, so a fruit never merges twice in one tick.
pub fn find_merge_pairs(state: &GameState) -> Vec<(usize, usize)> {
    let fruits = &state.fruits;
    let mut consumed = vec![false; fruits.len()];
    let mut pairs = Vec::new();

    for i in 0..fruits.len() {
        if consumed[i] {
            continue;
        }
        let a = &fruits[i];
        if !a.tier.can_merge() {
            continue;
        }
        let ra = state.radius_of(a);
        for j in (i + 1)..fruits.len() {
            if consumed[j] {
                continue;
            }
            let b = &fruits[j];
            if b.tier == a.tier && circles_overlap(a.pos, ra, b.pos, state.radius_of(b)) {
                consumed[i] = true;
                consumed[j] = true;
                pairs.push((i, j));
                break;
            }
        }
    }

    pairs
}

/// Replace each pair with its merged fruit and award points
///
/// Survivors keep their relative order; merged fruits are appended in pair
/// order. The collection is rebuilt in one assignment so no intermediate
/// state (parents gone, child missing) is ever visible.
fn apply_merges(
    state: &mut GameState,
    pairs: &[(usize, usize)],
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    if pairs.is_empty() {
        return;
    }

    let mut consumed = vec![false; state.fruits.len()];
    let mut created = Vec::with_capacity(pairs.len());

    for &(i, j) in pairs {
        consumed[i] = true;
        consumed[j] = true;

        let (a, b) = (&state.fruits[i], &state.fruits[j]);
        let from = a.tier;
        let Some(into) = from.next() else {
            log::debug!("Tier {} merge past the cap dropped", from.get());
            events.push(GameEvent::MergeDropped { from });
            continue;
        };

        let radius = state.container.radius(into);
        let merged = Fruit::merged(a, b, into, radius, tuning.merge_impulse);
        let points = from.merge_points();
        state.score += points;

        log::debug!(
            "Merged two {} into {} (+{points}, score {})",
            from.asset_name(),
            into.asset_name(),
            state.score
        );
        events.push(GameEvent::Merged {
            from,
            into,
            pos: merged.pos,
            points,
        });
        created.push(merged);
    }

    let survivors = state
        .fruits
        .iter()
        .zip(&consumed)
        .filter(|(_, gone)| !**gone)
        .map(|(f, _)| *f);
    state.fruits = survivors.chain(created).collect();
}

/// Single relaxation pass pushing overlapping fruits apart
///
/// Corrections are applied in place, so later pairs see earlier moves.
/// Clusters settle over several ticks rather than in one. A push never
/// leaves a fruit outside the walls.
fn resolve_overlaps(state: &mut GameState) {
    let container = state.container;
    let fruits = &mut state.fruits;
    for i in 0..fruits.len() {
        for j in (i + 1)..fruits.len() {
            let (head, tail) = fruits.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            if let Some(push) = separation(
                a.pos,
                container.radius(a.tier),
                b.pos,
                container.radius(b.tier),
            ) {
                a.pos -= push;
                b.pos += push;
            }
        }
    }

    for fruit in fruits.iter_mut() {
        let r = container.radius(fruit.tier);
        fruit.pos.x = fruit.pos.x.max(container.left + r).min(container.right - r);
    }
}
