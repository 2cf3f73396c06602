//! Rendering collaborator
//!
//! Drawing is a pure read of the session: each tick produces a `DrawList`
//! (triangles for every live body plus HUD text) that a host rasterizes.

pub mod hud;
pub mod shapes;
pub mod vertex;

pub use hud::Hud;
pub use vertex::{Vertex, colors};

use serde::Serialize;

use crate::sim::GameState;

/// Receives the session once per tick, after the update
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, Serialize)]
pub struct DrawList {
    pub canvas: [f32; 2],
    #[serde(skip)]
    pub vertices: Vec<Vertex>,
    pub hud: Hud,
}

impl DrawList {
    pub fn build(state: &GameState) -> Self {
        let canvas = [state.config.canvas_width, state.config.canvas_height];
        let mut vertices: Vec<Vertex> = shapes::rect(
            glam::Vec2::ZERO,
            glam::Vec2::from(canvas),
            colors::BACKGROUND,
        )
        .to_vec();
        for body in state.registry.all() {
            vertices.extend(shapes::body(body));
        }

        let hud = Hud::from_state(state);
        if hud.game_over {
            vertices.extend(shapes::rect(
                glam::Vec2::ZERO,
                glam::Vec2::from(canvas),
                colors::OVERLAY,
            ));
        }

        Self {
            canvas,
            vertices,
            hud,
        }
    }

    /// Vertex data as raw bytes, for upload to a GPU buffer or a canvas bridge
    pub fn vertex_bytes(&self) -> &[u8] {
        vertex::as_bytes(&self.vertices)
    }
}

/// Keeps the latest frame for a host to pick up
#[derive(Debug, Default)]
pub struct DrawListRenderer {
    pub frame: Option<DrawList>,
    pub frames_drawn: u64,
}

impl DrawListRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for DrawListRenderer {
    fn draw(&mut self, state: &GameState) {
        self.frame = Some(DrawList::build(state));
        self.frames_drawn += 1;
    }
}
