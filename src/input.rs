//! Input collaborators
//!
//! `KeyboardInput` turns raw key-down/up events into a controller snapshot.
//! `Autopilot` plays the game on its own (demo/headless mode).

use crate::game_loop::InputSource;
use crate::sim::{ControllerState, GameState};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

impl Key {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            " " | "z" | "Z" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Held-key state
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    fire: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Fire => self.fire = held,
        }
    }

    /// Opposite keys held together cancel out
    pub fn controller(&self) -> ControllerState {
        ControllerState {
            move_x: self.right as i8 - self.left as i8,
            move_y: self.down as i8 - self.up as i8,
            action_1: self.fire,
        }
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self, _state: &GameState) -> ControllerState {
        self.controller()
    }
}

/// Ticks the autopilot waits on the game-over screen before restarting
const RESTART_DELAY_TICKS: u32 = 120;

/// Horizontal margin (pixels) around the ship that counts as "in the way"
const THREAT_MARGIN: f32 = 12.0;

/// Scripted player: sidesteps the closest enemy above it and keeps firing
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    dead_ticks: u32,
    /// Stop restarting after this many sessions (None = forever)
    pub max_sessions: Option<u32>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop pressing restart once `max` sessions have been played
    pub fn with_session_limit(max: u32) -> Self {
        Self {
            max_sessions: Some(max),
            ..Self::default()
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> ControllerState {
        let Some(player) = state.player() else {
            return ControllerState::default();
        };

        if player.is_dead() {
            self.dead_ticks += 1;
            let may_restart = self.max_sessions.is_none_or(|max| state.sessions < max);
            let restart = may_restart && self.dead_ticks >= RESTART_DELAY_TICKS;
            if restart {
                self.dead_ticks = 0;
            }
            return ControllerState {
                action_1: restart,
                ..Default::default()
            };
        }
        self.dead_ticks = 0;

        let (p_min, p_max) = player.bounds();
        let center_x = player.center().x;

        // Closest enemy above the ship whose column overlaps ours
        let threat = state
            .registry
            .all()
            .filter(|b| b.is_enemy() && b.pos.y < p_min.y)
            .filter(|b| {
                let (e_min, e_max) = b.bounds();
                e_max.x + THREAT_MARGIN > p_min.x && e_min.x - THREAT_MARGIN < p_max.x
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        let move_x = match threat {
            Some(enemy) => {
                // Sidestep away from the enemy unless pinned to a wall
                let dodge_right = enemy.center().x < center_x;
                let blocked = if dodge_right {
                    p_max.x >= state.config.canvas_width
                } else {
                    p_min.x <= 0.0
                };
                match (dodge_right, blocked) {
                    (true, false) | (false, true) => 1,
                    _ => -1,
                }
            }
            None => {
                // Drift back toward the middle
                let mid = state.config.canvas_width / 2.0;
                if center_x < mid - 20.0 {
                    1
                } else if center_x > mid + 20.0 {
                    -1
                } else {
                    0
                }
            }
        };

        ControllerState {
            move_x,
            move_y: 0,
            action_1: true,
        }
    }
}
