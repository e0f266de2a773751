//! Voxel model builders
//!
//! Every model is a handful of axis-aligned cubes pushed straight into the
//! frame's vertex list, already transformed to world space. No meshes are
//! cached; the whole scene is rebuilt each frame.

use glam::{Quat, Vec3};

use super::vertex::{colors, Vertex};
use crate::consts::LANE_STEP;

/// Push one cube as 36 lit vertices. `center` is local to the model;
/// `rot`/`pos` place the model in the world.
pub fn add_cube(
    out: &mut Vec<Vertex>,
    rot: Quat,
    pos: Vec3,
    center: Vec3,
    size: Vec3,
    color: [f32; 4],
) {
    let h = size * 0.5;
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::Z,
            [
                Vec3::new(-h.x, -h.y, h.z),
                Vec3::new(h.x, -h.y, h.z),
                Vec3::new(h.x, h.y, h.z),
                Vec3::new(-h.x, h.y, h.z),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(-h.x, -h.y, -h.z),
                Vec3::new(-h.x, h.y, -h.z),
                Vec3::new(h.x, h.y, -h.z),
                Vec3::new(h.x, -h.y, -h.z),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-h.x, h.y, -h.z),
                Vec3::new(-h.x, h.y, h.z),
                Vec3::new(h.x, h.y, h.z),
                Vec3::new(h.x, h.y, -h.z),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-h.x, -h.y, -h.z),
                Vec3::new(h.x, -h.y, -h.z),
                Vec3::new(h.x, -h.y, h.z),
                Vec3::new(-h.x, -h.y, h.z),
            ],
        ),
        (
            Vec3::X,
            [
                Vec3::new(h.x, -h.y, -h.z),
                Vec3::new(h.x, h.y, -h.z),
                Vec3::new(h.x, h.y, h.z),
                Vec3::new(h.x, -h.y, h.z),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-h.x, -h.y, -h.z),
                Vec3::new(-h.x, -h.y, h.z),
                Vec3::new(-h.x, h.y, h.z),
                Vec3::new(-h.x, h.y, -h.z),
            ],
        ),
    ];

    for (normal, corners) in faces {
        let n = (rot * normal).to_array();
        let quad = corners.map(|c| (rot * (c + center) + pos).to_array());
        for i in [0, 1, 2, 0, 2, 3] {
            out.push(Vertex::new(quad[i], n, color));
        }
    }
}

/// Flat slab covering one lane across the whole playable width
pub fn lane_tile(out: &mut Vec<Vertex>, z: i32, color: [f32; 4]) {
    add_cube(
        out,
        Quat::IDENTITY,
        Vec3::new(0.0, -0.1, z as f32 * LANE_STEP),
        Vec3::ZERO,
        Vec3::new(42.0, 0.2, LANE_STEP),
        color,
    );
}

/// The frog: squat body, two bulging eyes, four feet
pub fn frog(out: &mut Vec<Vertex>, pos: Vec3, yaw: f32, body: [f32; 4]) {
    let rot = Quat::from_rotation_y(yaw);
    add_cube(out, rot, pos, Vec3::new(0.0, 0.5, 0.0), Vec3::new(1.3, 0.8, 1.0), body);
    // Eyes sit forward, which for yaw 0 is +x
    for side in [-0.35, 0.35] {
        add_cube(out, rot, pos, Vec3::new(0.5, 1.0, side), Vec3::new(0.35, 0.35, 0.35), colors::EYE_WHITE);
        add_cube(out, rot, pos, Vec3::new(0.68, 1.0, side), Vec3::new(0.12, 0.18, 0.18), colors::EYE_PUPIL);
    }
    for (fx, fz) in [(0.45, -0.55), (0.45, 0.55), (-0.45, -0.55), (-0.45, 0.55)] {
        add_cube(out, rot, pos, Vec3::new(fx, 0.12, fz), Vec3::new(0.4, 0.25, 0.3), body);
    }
}

/// The alternate character: an upright figure with a white crest
pub fn hero(out: &mut Vec<Vertex>, pos: Vec3, yaw: f32, body: [f32; 4]) {
    let rot = Quat::from_rotation_y(yaw);
    add_cube(out, rot, pos, Vec3::new(0.0, 0.7, 0.0), Vec3::new(0.9, 1.4, 0.9), body);
    add_cube(out, rot, pos, Vec3::new(0.0, 1.55, 0.0), Vec3::new(0.7, 0.3, 0.7), body);
    add_cube(out, rot, pos, Vec3::new(0.3, 1.55, 0.0), Vec3::new(0.15, 0.2, 0.5), colors::EYE_WHITE);
}

/// A vehicle. The model faces +z locally; lane direction picks the yaw.
pub fn car(out: &mut Vec<Vertex>, pos: Vec3, facing_right: bool, body: [f32; 4]) {
    let yaw = if facing_right {
        std::f32::consts::FRAC_PI_2
    } else {
        -std::f32::consts::FRAC_PI_2
    };
    let rot = Quat::from_rotation_y(yaw);
    let s = 0.8;
    let cube = |out: &mut Vec<Vertex>, c: [f32; 3], size: [f32; 3], color: [f32; 4]| {
        add_cube(
            out,
            rot,
            pos,
            Vec3::from(c) * s,
            Vec3::from(size) * s,
            color,
        );
    };
    cube(out, [0.0, 0.4, 0.0], [1.8, 0.5, 3.0], body);
    cube(out, [0.0, 1.0, -0.2], [1.6, 0.7, 1.5], body);
    cube(out, [0.0, 1.0, 0.6], [1.4, 0.5, 0.1], colors::WINDOW);
    cube(out, [0.0, 1.0, -1.0], [1.4, 0.5, 0.1], colors::BRAKE_LIGHT);
    for (wx, wz) in [(-0.9, 1.0), (0.9, 1.0), (-0.9, -1.0), (0.9, -1.0)] {
        cube(out, [wx, 0.25, wz], [0.4, 0.5, 0.6], colors::WHEEL);
    }
    cube(out, [-0.6, 0.45, 1.51], [0.3, 0.2, 0.1], colors::HEADLIGHT);
    cube(out, [0.6, 0.45, 1.51], [0.3, 0.2, 0.1], colors::HEADLIGHT);
}

/// Lilypad with a small flower in the middle
pub fn lilypad(out: &mut Vec<Vertex>, pos: Vec3) {
    let rot = Quat::IDENTITY;
    let s = 1.2;
    let pad = |out: &mut Vec<Vertex>, c: [f32; 3], size: [f32; 3], color: [f32; 4]| {
        add_cube(out, rot, pos, Vec3::from(c) * s, Vec3::from(size) * s, color);
    };
    pad(out, [0.0, 0.05, 0.0], [1.2, 0.1, 1.2], colors::LILYPAD);
    pad(out, [0.7, 0.05, 0.0], [0.4, 0.1, 0.8], colors::LILYPAD);
    pad(out, [-0.7, 0.05, 0.0], [0.4, 0.1, 0.8], colors::LILYPAD);
    pad(out, [0.0, 0.05, 0.7], [0.8, 0.1, 0.4], colors::LILYPAD);
    pad(out, [0.0, 0.05, -0.7], [0.8, 0.1, 0.4], colors::LILYPAD);
    pad(out, [0.0, 0.2, 0.0], [0.4, 0.2, 0.4], colors::FLOWER_PINK);
    pad(out, [0.0, 0.3, 0.0], [0.2, 0.2, 0.2], colors::FLOWER_WHITE);
}

pub fn tree(out: &mut Vec<Vertex>, pos: Vec3) {
    let rot = Quat::IDENTITY;
    add_cube(out, rot, pos, Vec3::new(0.0, 0.8, 0.0), Vec3::new(0.8, 1.6, 0.8), colors::TREE_TRUNK);
    add_cube(out, rot, pos, Vec3::new(0.0, 2.2, 0.0), Vec3::new(2.0, 1.6, 2.0), colors::TREE_LEAVES);
}

pub fn rock(out: &mut Vec<Vertex>, pos: Vec3) {
    add_cube(
        out,
        Quat::IDENTITY,
        pos,
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(1.5, 1.0, 1.5),
        colors::ROCK,
    );
}

/// Spinning coin; `spin` comes from wall-clock time
pub fn coin(out: &mut Vec<Vertex>, pos: Vec3, spin: f32) {
    add_cube(
        out,
        Quat::from_rotation_y(spin),
        pos + Vec3::new(0.0, 0.5, 0.0),
        Vec3::ZERO,
        Vec3::new(0.8, 0.8, 0.15),
        colors::COIN,
    );
}

/// Tumbling power-up box
pub fn power_up(out: &mut Vec<Vertex>, pos: Vec3, tumble: f32) {
    let rot = Quat::from_rotation_y(tumble) * Quat::from_rotation_x(tumble);
    add_cube(
        out,
        rot,
        pos + Vec3::new(0.0, 0.8, 0.0),
        Vec3::ZERO,
        Vec3::splat(0.8),
        colors::POWER_UP,
    );
}

/// The crushing log spans the whole lane width; `roll` is a cosmetic spin
pub fn crush_log(out: &mut Vec<Vertex>, z: f32, roll: f32) {
    add_cube(
        out,
        Quat::from_rotation_x(roll),
        Vec3::new(0.0, 1.0, z),
        Vec3::ZERO,
        Vec3::new(60.0, 2.0, 2.0),
        colors::CRUSH_LOG,
    );
}
