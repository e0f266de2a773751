//! Day/night sky clock
//!
//! The sky is a single angular phase that the sun orbits: phase 0 is
//! sunrise, π/2 noon, π sunset. Time freeze pauses the clock along with
//! every other moving hazard.

use glam::Vec3;

use crate::consts::SKY_PHASE_RATE;
use crate::sim::state::GameState;

/// Discrete lighting band derived from the sun's height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyBand {
    DawnDusk,
    Midday,
    Night,
}

/// Lighting parameters handed to the renderer each frame
#[derive(Debug, Clone, Copy)]
pub struct SkyLighting {
    /// Sun direction; the moon sits exactly opposite
    pub sun_dir: Vec3,
    pub sky_color: Vec3,
    pub sun_color: Vec3,
    pub moon_color: Vec3,
    pub ambient_color: Vec3,
}

/// Advance the sky phase by one tick unless time is frozen
pub fn advance(state: &mut GameState, dt: f32) {
    if state.effects.time_frozen() {
        return;
    }
    state.sky_phase += SKY_PHASE_RATE * dt;
    if state.sky_phase > std::f32::consts::TAU {
        state.sky_phase -= std::f32::consts::TAU;
    }
}

pub fn band(phase: f32) -> SkyBand {
    let sun_y = phase.sin();
    if sun_y > 0.0 {
        if sun_y < 0.2 {
            SkyBand::DawnDusk
        } else {
            SkyBand::Midday
        }
    } else {
        SkyBand::Night
    }
}

/// Resolve the lighting band and sun-height intensity for a given phase
pub fn lighting(phase: f32) -> SkyLighting {
    let sun_y = phase.sin();
    let sun_dir = Vec3::new(phase.cos(), sun_y, 0.2);

    match band(phase) {
        SkyBand::DawnDusk => SkyLighting {
            sun_dir,
            sky_color: Vec3::new(0.8, 0.5, 0.4),
            sun_color: Vec3::new(1.0, 0.6, 0.2) * sun_y,
            moon_color: Vec3::ZERO,
            ambient_color: Vec3::splat(0.3),
        },
        SkyBand::Midday => SkyLighting {
            sun_dir,
            sky_color: Vec3::new(0.53, 0.81, 0.98),
            sun_color: Vec3::new(1.0, 0.95, 0.9) * sun_y,
            moon_color: Vec3::ZERO,
            ambient_color: Vec3::splat(0.5),
        },
        SkyBand::Night => SkyLighting {
            sun_dir,
            sky_color: Vec3::new(0.05, 0.05, 0.2),
            sun_color: Vec3::ZERO,
            moon_color: Vec3::new(0.2, 0.3, 0.6),
            ambient_color: Vec3::new(0.1, 0.1, 0.2),
        },
    }
}
