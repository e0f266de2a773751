//! Procedural lane-based world generation
//!
//! Runs once per session from the session seed. Lanes are classified
//! front-to-back, then populated cell by cell with mutually exclusive
//! rolls, so the same seed always yields the same world.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::state::{
    Coin, GameState, LaneKind, Obstacle, ObstacleKind, PowerUp, PowerUpKind, Vehicle,
};

/// Generate lanes, obstacles, collectibles and traffic for a fresh session
pub fn generate_world(state: &mut GameState) {
    let mut rng = Pcg32::seed_from_u64(state.seed);

    for z in GEN_MIN_Z..=GEN_MAX_Z {
        let kind = classify_lane(&mut rng, z);
        state.lanes.insert(z, kind);

        match kind {
            LaneKind::Grass if z % 2 == 0 => populate_grass(state, &mut rng, z),
            LaneKind::River if z % 2 == 0 => populate_river(state, &mut rng, z),
            LaneKind::Road => populate_road(state, &mut rng, z),
            _ => {}
        }
    }

    log::info!(
        "generated world: {} lanes, {} obstacles, {} coins, {} power-ups, {} vehicles (seed {})",
        state.lanes.len(),
        state.obstacles.len(),
        state.coins.len(),
        state.power_ups.len(),
        state.vehicles.len(),
        state.seed
    );
}

/// Classify one lane. The safety zone around spawn is always grass; rivers
/// only land on even z so two never touch.
fn classify_lane(rng: &mut Pcg32, z: i32) -> LaneKind {
    if (SAFE_ZONE_MIN_Z..=SAFE_ZONE_MAX_Z).contains(&z) {
        return LaneKind::Grass;
    }
    let r = rng.random::<f64>();
    if r < RIVER_THRESHOLD && z % 2 == 0 {
        LaneKind::River
    } else if r > ROAD_THRESHOLD {
        LaneKind::Road
    } else {
        LaneKind::Grass
    }
}

/// Grass cells roll obstacle first, then coin, then power-up; at most one
/// entity lands per cell.
fn populate_grass(state: &mut GameState, rng: &mut Pcg32, z: i32) {
    for x in GRID_MIN_X..=GRID_MAX_X {
        if rng.random::<f64>() < OBSTACLE_CHANCE {
            let kind = if rng.random::<f64>() < TREE_WEIGHT {
                ObstacleKind::Tree
            } else {
                ObstacleKind::Rock
            };
            state.obstacles.push(Obstacle { x, z, kind });
            continue;
        }
        let item = rng.random::<f64>();
        if item < COIN_CHANCE {
            state.coins.push(Coin { x, z, active: true });
        } else if item > 1.0 - POWER_UP_CHANCE {
            let kind = match rng.random_range(0..3) {
                0 => PowerUpKind::Shield,
                1 => PowerUpKind::SpeedBoost,
                _ => PowerUpKind::TimeFreeze,
            };
            state.power_ups.push(PowerUp {
                x,
                z,
                active: true,
                kind,
            });
        }
    }
}

fn populate_river(state: &mut GameState, rng: &mut Pcg32, z: i32) {
    for x in GRID_MIN_X..=GRID_MAX_X {
        if rng.random::<f64>() < LILYPAD_CHANCE {
            state.obstacles.push(Obstacle {
                x,
                z,
                kind: ObstacleKind::Lilypad,
            });
        }
    }
}

/// Place 1 or 2 vehicles on a road lane with bounded retries; a spawn that
/// cannot satisfy the separation minimum is dropped without error.
fn populate_road(state: &mut GameState, rng: &mut Pcg32, z: i32) {
    let direction = if z % 2 == 0 { 1.0 } else { -1.0 };
    let count = rng.random_range(1..=2);
    let mut placed: Vec<f32> = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let mut spawn_x = None;
        for _ in 0..VEHICLE_PLACEMENT_RETRIES {
            let x = rng.random_range(VEHICLE_SPAWN_MIN_X..VEHICLE_SPAWN_MAX_X);
            if placed
                .iter()
                .all(|&other| (x - other).abs() >= VEHICLE_MIN_SEPARATION)
            {
                spawn_x = Some(x);
                break;
            }
        }
        let Some(x) = spawn_x else { continue };
        placed.push(x);
        state.vehicles.push(Vehicle {
            x,
            z,
            speed: rng.random_range(VEHICLE_MIN_SPEED..VEHICLE_MAX_SPEED) * direction,
            color_index: rng.random_range(0..VEHICLE_COLOR_COUNT),
        });
    }
}
