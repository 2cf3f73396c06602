//! Per-session score counters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub enemies_spawned: u32,
    pub enemies_hit: u32,
    /// Only accumulates while the player is alive
    pub seconds_alive: f32,
}

impl SessionStats {
    /// `hit_score` per enemy hit plus one point per whole second survived
    pub fn score(&self, hit_score: u64) -> u64 {
        hit_score * self.enemies_hit as u64 + self.seconds_alive.floor() as u64
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
