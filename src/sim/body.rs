//! Physical bodies shared by every entity kind
//!
//! A body's position is the top-left corner of its bounding box. Half-size is
//! always derived from `size`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Unique entity identifier (monotonic, never reused within a registry)
pub type EntityId = u32;

/// Entity variants and their kind-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    /// The controller-driven ship
    Player { speed: f32 },
    /// Falls from the top edge
    Enemy,
    /// Fired upward by the player
    Projectile,
}

/// A simulated body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Assigned by the registry on insert (0 until then)
    pub id: EntityId,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub health: i32,
    /// Health at construction; nothing restores health above it
    pub max_health: i32,
}

impl Body {
    pub fn new(kind: BodyKind, pos: Vec2, vel: Vec2, size: Vec2, max_health: i32) -> Self {
        Self {
            id: 0,
            kind,
            pos,
            vel,
            size,
            health: max_health,
            max_health,
        }
    }

    pub fn player(pos: Vec2, size: Vec2, speed: f32, max_health: i32) -> Self {
        Self::new(BodyKind::Player { speed }, pos, Vec2::ZERO, size, max_health)
    }

    pub fn enemy(pos: Vec2, vel: Vec2, size: Vec2, max_health: i32) -> Self {
        Self::new(BodyKind::Enemy, pos, vel, size, max_health)
    }

    pub fn projectile(pos: Vec2, vel: Vec2, size: Vec2, max_health: i32) -> Self {
        Self::new(BodyKind::Projectile, pos, vel, size, max_health)
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Explicit Euler step, no sub-stepping
    #[inline]
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Subtract health, flooring at zero
    pub fn damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Box corners (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.pos, self.pos + self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.half_size()
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, BodyKind::Player { .. })
    }

    pub fn is_enemy(&self) -> bool {
        self.kind == BodyKind::Enemy
    }

    pub fn is_projectile(&self) -> bool {
        self.kind == BodyKind::Projectile
    }
}

/// Velocity for a controller's axes at the given per-axis speed.
///
/// Diagonal input is scaled by 1/√2 per axis so the ship is no faster on a
/// diagonal than along a single axis.
pub fn controller_velocity(move_x: i8, move_y: i8, speed: f32) -> Vec2 {
    let axes = Vec2::new(move_x as f32, move_y as f32);
    if move_x != 0 && move_y != 0 {
        axes * speed * std::f32::consts::FRAC_1_SQRT_2
    } else {
        axes * speed
    }
}
