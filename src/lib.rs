//! Sky Dodger - A fixed-timestep arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, spawning, game state)
//! - `game_loop`: Fixed-timestep driver between the host clock and the sim
//! - `input`: Controller collaborators (keyboard mapping, autopilot)
//! - `renderer`: Draw-list generation (entity quads, HUD readouts)
//! - `config`: Data-driven game tuning

pub mod config;
pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game_loop::GameLoop;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TICK_RATE_HZ: f32 = 60.0;
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 300.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Starting (and maximum) health for every body
    pub const MAX_HEALTH: i32 = 100;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 200.0; // pixels/s along one axis

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 20.0;
    pub const ENEMY_SPEED: f32 = 120.0; // pixels/s, downward
    pub const SPAWN_INTERVAL: f32 = 0.5;

    /// Projectile defaults (size is half the player's)
    pub const PROJECTILE_SPEED: f32 = 300.0; // pixels/s, upward
    pub const FIRE_INTERVAL: f32 = 0.3;

    /// Health lost when the player touches something
    pub const CONTACT_DAMAGE: i32 = 20;
    /// Health lost when an enemy slips past the bottom edge
    pub const ESCAPE_DAMAGE: i32 = 10;
    /// Score per enemy hit
    pub const HIT_SCORE: u64 = 30;
}

/// Clamp a top-left position into the canvas rectangle
#[inline]
pub fn clamp_to_canvas(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(pos.x.clamp(0.0, width), pos.y.clamp(0.0, height))
}
