//! Frame assembly: game state in, world-space vertices out

use glam::{Mat4, Vec3};

use super::models;
use super::vertex::{colors, Vertex};
use crate::consts::{LANE_STEP, RENDER_CULL_Z};
use crate::settings::CameraMode;
use crate::sim::{GameState, LaneKind, ObstacleKind};

/// Lanes drawn behind and ahead of the committed lane
const LANE_VIEW_BACK: i32 = 60;
const LANE_VIEW_AHEAD: i32 = 10;

/// Build the full scene for one frame. `anim_time` drives the cosmetic
/// spins (coins, power-ups, log roll) and runs on wall-clock time so they
/// keep turning even while the simulation's world is frozen.
pub fn build_frame(state: &GameState, use_hero: bool, anim_time: f32) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(16 * 1024);
    let anchor = state.player.target_z;

    for z in (anchor - LANE_VIEW_BACK)..=(anchor + LANE_VIEW_AHEAD) {
        let color = match state.lane_kind(z) {
            LaneKind::Grass => colors::LANE_GRASS,
            LaneKind::Road => colors::LANE_ROAD,
            LaneKind::River => colors::LANE_RIVER,
        };
        models::lane_tile(&mut out, z, color);
    }

    let visible = |z: i32| (z - anchor).abs() <= RENDER_CULL_Z;

    for obstacle in state.obstacles.iter().filter(|o| visible(o.z)) {
        let pos = cell_pos(obstacle.x, obstacle.z);
        match obstacle.kind {
            ObstacleKind::Tree => models::tree(&mut out, pos),
            ObstacleKind::Rock => models::rock(&mut out, pos),
            ObstacleKind::Lilypad => models::lilypad(&mut out, pos),
        }
    }

    for c in state.coins.iter().filter(|c| c.active && visible(c.z)) {
        models::coin(&mut out, cell_pos(c.x, c.z), anim_time * 3.0);
    }
    for p in state.power_ups.iter().filter(|p| p.active && visible(p.z)) {
        models::power_up(&mut out, cell_pos(p.x, p.z), anim_time * 2.0);
    }
    for v in state.vehicles.iter().filter(|v| visible(v.z)) {
        let pos = Vec3::new(v.x * LANE_STEP, 0.0, v.z as f32 * LANE_STEP);
        let body = colors::CAR_BODIES[v.color_index % colors::CAR_BODIES.len()];
        models::car(&mut out, pos, v.speed > 0.0, body);
    }

    if state.log.active {
        models::crush_log(&mut out, state.log.z, -anim_time * 2.0);
    }

    let player_pos = Vec3::new(
        state.player.current_x * LANE_STEP,
        state.player.hop_y(),
        state.player.current_z * LANE_STEP,
    );
    let body = if state.effects.shield {
        colors::SHIELD_TINT
    } else if use_hero {
        colors::HERO_BODY
    } else {
        colors::FROG_BODY
    };
    if use_hero {
        models::hero(&mut out, player_pos, state.player.angle, body);
    } else {
        models::frog(&mut out, player_pos, state.player.angle, body);
    }

    out
}

/// Combined view-projection for the chosen camera mode, tracking the
/// player's interpolated position
pub fn view_proj(state: &GameState, mode: CameraMode, aspect: f32) -> Mat4 {
    let rx = state.player.current_x * LANE_STEP;
    let rz = state.player.current_z * LANE_STEP;
    let proj = Mat4::perspective_rh(50.0_f32.to_radians(), aspect, 0.1, 500.0);
    let view = match mode {
        CameraMode::Follow => Mat4::look_at_rh(
            Vec3::new(rx, 20.0, rz + 20.0),
            Vec3::new(rx, 2.0, rz),
            Vec3::Y,
        ),
        CameraMode::Isometric => Mat4::look_at_rh(
            Vec3::new(rx + 13.0, 20.0, rz + 20.0),
            Vec3::new(rx, 0.0, rz),
            Vec3::Y,
        ),
    };
    proj * view
}

#[inline]
fn cell_pos(x: i32, z: i32) -> Vec3 {
    Vec3::new(x as f32 * LANE_STEP, 0.0, z as f32 * LANE_STEP)
}
