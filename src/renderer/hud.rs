//! Stat readouts and game-over overlay

use serde::Serialize;

use crate::sim::{GamePhase, GameState};

/// Text the host overlays on the canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub health: i32,
    pub enemies_hit: u32,
    /// Whole seconds survived
    pub seconds: u64,
    pub score: u64,
    pub enemies_spawned: u32,
    pub game_over: bool,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            health: state.player_health(),
            enemies_hit: state.stats.enemies_hit,
            seconds: state.stats.seconds_alive.floor() as u64,
            score: state.score(),
            enemies_spawned: state.stats.enemies_spawned,
            game_over: state.phase() == GamePhase::GameOver,
        }
    }

    /// One readout per line, top-left corner
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Health: {}", self.health),
            format!("Enemies hit: {}", self.enemies_hit),
            format!("Time: {}s", self.seconds),
            format!("Score: {}", self.score),
            format!("Enemies spawned: {}", self.enemies_spawned),
        ]
    }

    /// Centered title and prompt, only while the player is dead
    pub fn overlay(&self) -> Option<(String, String)> {
        self.game_over.then(|| {
            (
                "GAME OVER".to_string(),
                format!("Score {} - press fire to restart", self.score),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readouts_follow_state() {
        let mut state = GameState::new(1);
        state.stats.enemies_hit = 2;
        state.stats.enemies_spawned = 5;
        state.stats.seconds_alive = 7.8;
        let hud = Hud::from_state(&state);
        assert_eq!(hud.score, 67);
        assert_eq!(
            hud.lines(),
            vec![
                "Health: 100",
                "Enemies hit: 2",
                "Time: 7s",
                "Score: 67",
                "Enemies spawned: 5",
            ]
        );
        assert!(hud.overlay().is_none());
    }

    #[test]
    fn test_overlay_when_dead() {
        let mut state = GameState::new(1);
        state.player_mut().unwrap().damage(100);
        let hud = Hud::from_state(&state);
        let (title, prompt) = hud.overlay().unwrap();
        assert_eq!(title, "GAME OVER");
        assert!(prompt.contains("restart"));
    }
}
