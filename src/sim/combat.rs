//! Player fire and top-edge projectile despawn

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::cooldown::Cooldown;
use super::state::GameState;

/// Time-gated projectile factory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatSystem {
    pub cooldown: Cooldown,
}

impl CombatSystem {
    pub fn new(interval: f32) -> Self {
        Self {
            cooldown: Cooldown::new(interval),
        }
    }

    pub fn reset(&mut self) {
        self.cooldown.reset();
    }
}

/// Fire while `fire` is held and the timer allows, then drop missed shots.
pub fn update(state: &mut GameState, fire: bool, dt: f32) {
    if state.combat.cooldown.tick(dt, fire) {
        fire_projectile(state);
    }

    // Missed shots leave through the top edge with no penalty
    let missed: Vec<_> = state
        .registry
        .all()
        .filter(|b| b.is_projectile() && b.pos.y < -b.half_size().y)
        .map(|b| b.id)
        .collect();
    for id in missed {
        state.registry.mark_for_removal(id);
    }
}

fn fire_projectile(state: &mut GameState) {
    let Some(player) = state.player() else {
        return;
    };
    // Launched one ship-height above the ship, half its size
    let pos = player.pos - Vec2::new(0.0, player.size.y);
    let size = player.half_size();
    let projectile = Body::projectile(
        pos,
        Vec2::new(0.0, -state.config.projectile_speed),
        size,
        state.config.max_health,
    );
    let id = state.registry.insert(projectile);
    log::debug!("Fired projectile {} from ({:.1}, {:.1})", id, pos.x, pos.y);
}
