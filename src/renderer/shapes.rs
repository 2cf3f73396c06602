//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{Body, BodyKind};

/// Two triangles covering the rectangle `min..min + size`
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// A triangle pointing up (player) or down (enemy) inside the body's box
pub fn ship(min: Vec2, size: Vec2, pointing_up: bool, color: [f32; 4]) -> [Vertex; 3] {
    let max = min + size;
    let mid_x = min.x + size.x / 2.0;
    if pointing_up {
        [
            Vertex::new(mid_x, min.y, color),
            Vertex::new(min.x, max.y, color),
            Vertex::new(max.x, max.y, color),
        ]
    } else {
        [
            Vertex::new(min.x, min.y, color),
            Vertex::new(max.x, min.y, color),
            Vertex::new(mid_x, max.y, color),
        ]
    }
}

/// Vertices for one body, shaped by kind
pub fn body(body: &Body) -> Vec<Vertex> {
    match body.kind {
        BodyKind::Player { .. } => {
            let color = if body.is_dead() {
                colors::PLAYER_DEAD
            } else {
                colors::PLAYER
            };
            ship(body.pos, body.size, true, color).to_vec()
        }
        BodyKind::Enemy => ship(body.pos, body.size, false, colors::ENEMY).to_vec(),
        BodyKind::Projectile => rect(body.pos, body.size, colors::PROJECTILE).to_vec(),
    }
}
