//! 2D debug rendering for the bouncy balls demo
//!
//! This crate provides the wgpu-based rendering half of the program:
//!
//! - [`vertex::Vertex`] - colored 2D vertex uploaded to the GPU
//! - [`tessellate`] - triangle generation for circles and thick lines
//! - [`debug`] - default visuals for every shape in a physics world
//! - [`pipeline::RenderState`] - surface, device and the single render pipeline

pub mod debug;
pub mod pipeline;
pub mod tessellate;
pub mod vertex;

pub use debug::world_vertices;
pub use pipeline::RenderState;
pub use vertex::{colors, Vertex};
