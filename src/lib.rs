//! Frogway - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world generation, movement, hazards)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Difficulty and display preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{CameraMode, Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World-space distance between adjacent grid cells
    pub const LANE_STEP: f32 = 2.0;

    /// Playable lateral grid bounds (inclusive)
    pub const GRID_MIN_X: i32 = -10;
    pub const GRID_MAX_X: i32 = 10;

    /// Generated lane range; forward is -z
    pub const GEN_MIN_Z: i32 = -300;
    pub const GEN_MAX_Z: i32 = 20;
    /// Flat-grass safety zone around the spawn lane
    pub const SAFE_ZONE_MIN_Z: i32 = -2;
    pub const SAFE_ZONE_MAX_Z: i32 = 3;

    /// Lane classification thresholds (uniform roll in [0, 1))
    pub const RIVER_THRESHOLD: f64 = 0.3;
    pub const ROAD_THRESHOLD: f64 = 0.6;

    /// Per-cell generation rolls
    pub const OBSTACLE_CHANCE: f64 = 0.4;
    pub const TREE_WEIGHT: f64 = 0.7;
    pub const COIN_CHANCE: f64 = 0.1;
    pub const POWER_UP_CHANCE: f64 = 0.02;
    pub const LILYPAD_CHANCE: f64 = 0.4;

    /// Vehicle spawning
    pub const VEHICLE_SPAWN_MIN_X: f32 = -15.0;
    pub const VEHICLE_SPAWN_MAX_X: f32 = 15.0;
    /// Minimum clearance between vehicles in one lane (grid units)
    pub const VEHICLE_MIN_SEPARATION: f32 = 8.0;
    /// Placement attempts before a vehicle is silently dropped
    pub const VEHICLE_PLACEMENT_RETRIES: u32 = 10;
    /// Vehicle speed magnitude range (grid units per second)
    pub const VEHICLE_MIN_SPEED: f32 = 3.0;
    pub const VEHICLE_MAX_SPEED: f32 = 6.0;
    /// Vehicles wrap when |x| exceeds this bound
    pub const VEHICLE_WRAP_X: f32 = 20.0;
    /// Collision radius along x (grid units)
    pub const VEHICLE_HIT_RADIUS: f32 = 1.2;
    /// Lane match tolerance for vehicle collision
    pub const VEHICLE_LANE_TOLERANCE: f32 = 0.3;
    /// Number of vehicle color variants
    pub const VEHICLE_COLOR_COUNT: usize = 6;

    /// Movement interpolation (ticks)
    pub const MOVE_DURATION_TICKS: u32 = 18;
    pub const BOOSTED_MOVE_DURATION_TICKS: u32 = 8;
    /// Peak of the cosmetic hop arc
    pub const HOP_HEIGHT: f32 = 1.5;

    /// Crushing log hazard (world units)
    pub const LOG_START_Z: f32 = 20.0;
    pub const LOG_SPEED_NORMAL: f32 = 2.4;
    pub const LOG_SPEED_HARD: f32 = 4.8;
    /// Crush when the log is within this margin of the player's world z
    pub const LOG_CRUSH_MARGIN: f32 = 2.0;

    /// Delay between landing on open water and sinking (ticks)
    pub const DROWN_DELAY_TICKS: u32 = 36;

    /// Power-up effect windows (ticks)
    pub const SPEED_BOOST_TICKS: u32 = 960;
    pub const TIME_FREEZE_TICKS: u32 = 600;
    /// Power-up notification display duration (ticks)
    pub const NOTIFICATION_TICKS: u32 = 240;

    /// Scoring
    pub const COIN_SCORE: u32 = 10;
    pub const HERO_UNLOCK_SCORE: u32 = 20;

    /// Day/night phase advance (radians per second)
    pub const SKY_PHASE_RATE: f32 = 0.03;

    /// Entities farther than this from the committed lane are culled
    pub const RENDER_CULL_Z: i32 = 40;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
