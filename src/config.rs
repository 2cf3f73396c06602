//! Game configuration
//!
//! Read once at startup. Every field has a default matching `crate::consts`,
//! so a partial JSON document only overrides what it names.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game tuning, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Simulation ticks per second
    pub tick_rate_hz: f32,
    /// Cap on ticks consumed by one frame callback (None = unbounded)
    pub max_ticks_per_frame: Option<u32>,

    // === Bodies ===
    pub max_health: i32,
    pub player_size: Vec2,
    pub player_speed: f32,
    pub enemy_size: Vec2,
    pub enemy_speed: f32,
    pub projectile_speed: f32,

    // === Timers (seconds) ===
    pub spawn_interval: f32,
    pub fire_interval: f32,

    // === Rules ===
    pub contact_damage: i32,
    pub escape_damage: i32,
    pub hit_score: u64,

    /// Seed for enemy placement
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tick_rate_hz: TICK_RATE_HZ,
            max_ticks_per_frame: None,

            max_health: MAX_HEALTH,
            player_size: Vec2::splat(PLAYER_SIZE),
            player_speed: PLAYER_SPEED,
            enemy_size: Vec2::splat(ENEMY_SIZE),
            enemy_speed: ENEMY_SPEED,
            projectile_speed: PROJECTILE_SPEED,

            spawn_interval: SPAWN_INTERVAL,
            fire_interval: FIRE_INTERVAL,

            contact_damage: CONTACT_DAMAGE,
            escape_damage: ESCAPE_DAMAGE,
            hit_score: HIT_SCORE,

            seed: 0x5eed,
        }
    }
}

impl GameConfig {
    /// Duration of one tick in seconds
    #[inline]
    pub fn tick_duration(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_size.x", self.player_size.x),
            ("player_size.y", self.player_size.y),
            ("enemy_size.x", self.enemy_size.x),
            ("enemy_size.y", self.enemy_size.y),
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("projectile_speed", self.projectile_speed),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tick rate must be positive, got {}",
                self.tick_rate_hz
            )));
        }
        if self.max_health <= 0 {
            return Err(ConfigError::Invalid(format!(
                "max health must be positive, got {}",
                self.max_health
            )));
        }
        if !(self.spawn_interval.is_finite() && self.spawn_interval >= 0.0)
            || !(self.fire_interval.is_finite() && self.fire_interval >= 0.0)
        {
            return Err(ConfigError::Invalid("cooldown intervals cannot be negative".into()));
        }
        if self.contact_damage < 0 || self.escape_damage < 0 {
            return Err(ConfigError::Invalid("damage cannot be negative".into()));
        }
        if self.max_ticks_per_frame == Some(0) {
            return Err(ConfigError::Invalid("max_ticks_per_frame must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let config = GameConfig::default();
        assert_eq!(config.canvas_width, 300.0);
        assert_eq!(config.canvas_height, 500.0);
        assert!((config.tick_duration() - 1.0 / 60.0).abs() < 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "seed": 42, "spawn_interval": 1.0 }"#).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.spawn_interval, 1.0);
        assert_eq!(config.fire_interval, FIRE_INTERVAL);
        assert_eq!(config.player_size, Vec2::splat(PLAYER_SIZE));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "tick_rate_hz": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "canvas_width": -1.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_and_negative_geometry() {
        // 1e39 overflows f32 to infinity
        assert!(matches!(
            GameConfig::from_json(r#"{ "canvas_width": 1e39 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "enemy_size": [-1.0, 20.0] }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "projectile_speed": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        let config = GameConfig {
            player_speed: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        assert!(matches!(
            GameConfig::load("/nonexistent/sky-dodger.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let config = GameConfig {
            seed: 7,
            max_ticks_per_frame: Some(8),
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
