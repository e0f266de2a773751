//! Vertex types for lit 3D rendering

use bytemuck::{Pod, Zeroable};

/// Vertex with position, normal and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const LANE_GRASS: [f32; 4] = [0.35, 0.65, 0.25, 1.0];
    pub const LANE_ROAD: [f32; 4] = [0.25, 0.25, 0.28, 1.0];
    pub const LANE_RIVER: [f32; 4] = [0.15, 0.4, 0.75, 1.0];
    pub const FROG_BODY: [f32; 4] = [0.2, 0.8, 0.2, 1.0];
    pub const HERO_BODY: [f32; 4] = [0.13, 0.75, 0.13, 1.0];
    /// Player tint while a shield is held
    pub const SHIELD_TINT: [f32; 4] = [0.8, 0.8, 1.0, 1.0];
    pub const EYE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const EYE_PUPIL: [f32; 4] = [0.05, 0.05, 0.05, 1.0];
    pub const TREE_TRUNK: [f32; 4] = [0.55, 0.27, 0.07, 1.0];
    pub const TREE_LEAVES: [f32; 4] = [0.13, 0.55, 0.13, 1.0];
    pub const ROCK: [f32; 4] = [0.5, 0.5, 0.55, 1.0];
    pub const COIN: [f32; 4] = [1.0, 0.84, 0.0, 1.0];
    pub const POWER_UP: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const CRUSH_LOG: [f32; 4] = [0.4, 0.2, 0.1, 1.0];
    pub const LILYPAD: [f32; 4] = [0.0, 0.5, 0.1, 1.0];
    pub const FLOWER_PINK: [f32; 4] = [1.0, 0.75, 0.8, 1.0];
    pub const FLOWER_WHITE: [f32; 4] = [1.0, 0.9, 0.9, 1.0];
    pub const WHEEL: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    pub const WINDOW: [f32; 4] = [0.2, 0.2, 0.3, 1.0];
    pub const BRAKE_LIGHT: [f32; 4] = [0.8, 0.2, 0.2, 1.0];
    pub const HEADLIGHT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

    /// Vehicle body palette indexed by `color_index`
    pub const CAR_BODIES: [[f32; 4]; 6] = [
        [0.8, 0.2, 0.2, 1.0], // red
        [0.2, 0.4, 0.8, 1.0], // blue
        [0.9, 0.9, 0.1, 1.0], // yellow
        [0.1, 0.8, 0.2, 1.0], // green
        [0.8, 0.2, 0.8, 1.0], // purple
        [0.9, 0.5, 0.1, 1.0], // orange
    ];
}
