//! WebGPU rendering module
//!
//! The scene is rebuilt as one flat vertex list every frame and drawn with
//! a single lit pipeline; voxel models live in `models`.

pub mod models;
pub mod pipeline;
pub mod scene;
pub mod vertex;

pub use pipeline::{RenderState, Uniforms};
pub use vertex::Vertex;
