//! Fixed timestep simulation tick
//!
//! Advances the session by one step. Phases run strictly in order:
//! integrate -> collide -> flush removals -> spawn -> fire -> restart check.

use serde::{Deserialize, Serialize};

use super::body::{BodyKind, controller_velocity};
use super::state::GameState;
use super::{collision, combat, spawner};
use crate::clamp_to_canvas;

/// Abstract controller snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerState {
    /// -1 (left), 0, or 1 (right)
    pub move_x: i8,
    /// -1 (up), 0, or 1 (down)
    pub move_y: i8,
    /// Fire, and restart when the game is over
    pub action_1: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &ControllerState, dt: f32) {
    state.time_ticks += 1;
    let was_alive = state.player_alive();

    // Integrate every body; the player steers first, then stays on the canvas
    let (width, height) = (state.config.canvas_width, state.config.canvas_height);
    for body in state.registry.all_mut() {
        if let BodyKind::Player { speed } = body.kind {
            body.vel = controller_velocity(input.move_x, input.move_y, speed);
            body.update(dt);
            body.pos = clamp_to_canvas(body.pos, width, height);
        } else {
            body.update(dt);
        }
    }

    if state.player_alive() {
        state.stats.seconds_alive += dt;
    }

    collision::resolve_collisions(state);
    state.registry.flush_removals();

    spawner::update(state, dt);
    combat::update(state, input.action_1, dt);

    if was_alive && !state.player_alive() {
        log::info!(
            "Game over after {} ticks: score {} ({} hit / {} spawned)",
            state.time_ticks,
            state.score(),
            state.stats.enemies_hit,
            state.stats.enemies_spawned
        );
    }

    if !state.player_alive() && input.action_1 {
        state.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::Body;
    use glam::Vec2;

    fn held_still() -> ControllerState {
        ControllerState::default()
    }

    #[test]
    fn test_player_moves_with_controller() {
        let mut state = GameState::new(1);
        let start = state.player().unwrap().pos;
        let input = ControllerState {
            move_x: 1,
            ..Default::default()
        };
        tick(&mut state, &input, 0.5);
        let player = state.player().unwrap();
        assert_eq!(player.pos, start + Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_player_clamped_to_canvas() {
        let mut state = GameState::new(1);
        let input = ControllerState {
            move_x: -1,
            move_y: -1,
            action_1: false,
        };
        for _ in 0..600 {
            tick(&mut state, &input, SIM_DT);
        }
        let player = state.player().unwrap();
        assert_eq!(player.pos, Vec2::ZERO);

        let input = ControllerState {
            move_x: 1,
            move_y: 1,
            action_1: false,
        };
        for _ in 0..600 {
            tick(&mut state, &input, SIM_DT);
        }
        let player = state.player().unwrap();
        assert!(player.pos.x <= state.config.canvas_width);
        assert!(player.pos.y <= state.config.canvas_height);
    }

    #[test]
    fn test_enemy_contact_costs_twenty() {
        let mut state = GameState::new(1);
        state.spawner.cooldown.remaining = 10.0;
        let pos = state.player().unwrap().pos;
        let enemy = state.registry.insert(Body::enemy(
            pos + Vec2::new(5.0, 5.0),
            Vec2::ZERO,
            Vec2::splat(20.0),
            100,
        ));

        tick(&mut state, &held_still(), SIM_DT);

        assert_eq!(state.player_health(), 80);
        // Gone via the enemy-side rule, flushed in the same tick
        assert!(state.registry.get(enemy).is_none());
    }

    #[test]
    fn test_escaped_enemy_removed_next_flush() {
        let mut state = GameState::new(1);
        state.spawner.cooldown.remaining = 10.0;
        let enemy = state.registry.insert(Body::enemy(
            Vec2::new(20.0, state.config.canvas_height + 11.0),
            Vec2::ZERO,
            Vec2::splat(20.0),
            100,
        ));

        tick(&mut state, &held_still(), SIM_DT);
        assert_eq!(state.player_health(), 90);
        assert!(state.registry.is_marked(enemy));

        tick(&mut state, &held_still(), SIM_DT);
        assert!(state.registry.get(enemy).is_none());
        // Damage is applied only once
        assert_eq!(state.player_health(), 90);
    }

    #[test]
    fn test_seconds_alive_stops_when_dead() {
        let mut state = GameState::new(1);
        state.spawner.cooldown.remaining = 100.0;
        for _ in 0..90 {
            tick(&mut state, &held_still(), SIM_DT);
        }
        assert!((state.stats.seconds_alive - 1.5).abs() < 0.001);
        assert_eq!(state.score(), 1);

        state.player_mut().unwrap().damage(100);
        for _ in 0..60 {
            tick(&mut state, &held_still(), SIM_DT);
        }
        assert!((state.stats.seconds_alive - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_restart_on_action_when_dead() {
        let mut state = GameState::new(1);
        for _ in 0..120 {
            tick(&mut state, &held_still(), SIM_DT);
        }
        assert!(state.registry.len() > 1);
        state.player_mut().unwrap().damage(100);

        // Dead but not pressing: stays over
        tick(&mut state, &held_still(), SIM_DT);
        assert!(!state.player_alive());

        let press = ControllerState {
            action_1: true,
            ..Default::default()
        };
        tick(&mut state, &press, SIM_DT);
        assert!(state.player_alive());
        assert_eq!(state.registry.len(), 1);
        assert_eq!(state.stats.enemies_spawned, 0);
        assert_eq!(state.stats.enemies_hit, 0);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_fire_while_alive_does_not_restart() {
        let mut state = GameState::new(1);
        let player_id = state.player_id;
        let press = ControllerState {
            action_1: true,
            ..Default::default()
        };
        tick(&mut state, &press, SIM_DT);
        assert_eq!(state.player_id, player_id);
        assert!(state.registry.all().any(|b| b.is_projectile()));
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            ControllerState { move_x: 1, move_y: 0, action_1: true },
            ControllerState { move_x: -1, move_y: -1, action_1: false },
            ControllerState { move_x: 0, move_y: 1, action_1: true },
            ControllerState::default(),
        ];
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.stats, state2.stats);
        let bodies1: Vec<_> = state1.registry.all().cloned().collect();
        let bodies2: Vec<_> = state2.registry.all().cloned().collect();
        assert_eq!(bodies1, bodies2);
    }
}
