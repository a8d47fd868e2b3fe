//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
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
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Default debug palette for shape rendering
pub mod colors {
    /// Dynamic circle fill
    pub const BODY_FILL: [f32; 4] = [0.20, 0.60, 0.86, 1.0];
    /// Circle outline and angle indicator
    pub const BODY_OUTLINE: [f32; 4] = [0.17, 0.24, 0.31, 1.0];
    /// Static segment shapes
    pub const STATIC_SHAPE: [f32; 4] = [0.36, 0.42, 0.47, 1.0];
    /// Surface clear color
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
