//! Enemy spawning and bottom-edge despawn

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::cooldown::Cooldown;
use super::state::GameState;

/// Time-gated enemy factory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub cooldown: Cooldown,
}

impl Spawner {
    pub fn new(interval: f32) -> Self {
        Self {
            cooldown: Cooldown::new(interval),
        }
    }

    pub fn reset(&mut self) {
        self.cooldown.reset();
    }
}

/// Spawn an enemy when the timer allows, then despawn enemies below the canvas.
///
/// Each escaped enemy costs the player `escape_damage` while they are alive.
pub fn update(state: &mut GameState, dt: f32) {
    if state.spawner.cooldown.tick(dt, true) {
        spawn_enemy(state);
    }

    let limit_y = state.config.canvas_height;
    let escaped: Vec<_> = state
        .registry
        .all()
        .filter(|b| b.is_enemy() && b.pos.y > limit_y + b.half_size().y)
        .map(|b| b.id)
        .collect();

    for id in escaped {
        state.registry.mark_for_removal(id);
        let damage = state.config.escape_damage;
        if let Some(player) = state.player_mut() {
            if player.health > 0 {
                player.damage(damage);
            }
        }
        log::debug!("Enemy {} escaped, player health {}", id, state.player_health());
    }
}

fn spawn_enemy(state: &mut GameState) {
    let size = state.config.enemy_size;
    let x = state.rng.random_range(0.0..state.config.canvas_width);
    let enemy = Body::enemy(
        Vec2::new(x, -size.y / 2.0),
        Vec2::new(0.0, state.config.enemy_speed),
        size,
        state.config.max_health,
    );
    let id = state.registry.insert(enemy);
    if state.player_alive() {
        state.stats.enemies_spawned += 1;
    }
    log::debug!("Spawned enemy {} at x={:.1}", id, x);
}
