//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, laid out for direct upload
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
}

/// Raw bytes of a vertex slice, ready for a GPU buffer or a canvas bridge
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    pub const PLAYER: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const PLAYER_DEAD: [f32; 4] = [0.4, 0.4, 0.4, 1.0];
    pub const ENEMY: [f32; 4] = [1.0, 0.4, 0.2, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.6];
}
