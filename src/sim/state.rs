//! Game state and session lifecycle
//!
//! Everything one play session owns lives in `GameState`: the entity
//! registry, the spawn/fire timers, the score counters and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::body::{Body, EntityId};
use super::combat::CombatSystem;
use super::registry::EntityRegistry;
use super::spawner::Spawner;
use super::stats::SessionStats;
use crate::config::{ConfigError, GameConfig};

/// Current phase of gameplay, derived from player health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Playing,
    /// Player health reached zero; waiting for a restart press
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub config: GameConfig,
    pub registry: EntityRegistry,
    /// The one player body (never queued for removal)
    pub player_id: EntityId,
    pub spawner: Spawner,
    pub combat: CombatSystem,
    pub stats: SessionStats,
    /// Ticks since the last `start()`
    pub time_ticks: u64,
    /// Sessions started so far (1 after construction)
    pub sessions: u32,
    /// Enemy placement RNG (not reset by restart)
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    /// Validate `config`, then start a session with it
    pub fn try_with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Start a session with `config` as given.
    ///
    /// The config must already have passed `GameConfig::validate`; a
    /// non-finite canvas or size makes enemy placement panic.
    pub fn with_config(config: GameConfig) -> Self {
        let mut state = Self {
            rng: Pcg32::seed_from_u64(config.seed),
            registry: EntityRegistry::new(),
            player_id: 0,
            spawner: Spawner::new(config.spawn_interval),
            combat: CombatSystem::new(config.fire_interval),
            stats: SessionStats::default(),
            time_ticks: 0,
            sessions: 0,
            config,
        };
        state.start();
        state
    }

    /// Full reset: counters, registry, a fresh player, ready timers.
    ///
    /// Safe to call at any point, including mid-tick from the restart check.
    pub fn start(&mut self) {
        self.stats.reset();
        self.registry.clear();
        self.spawner.reset();
        self.combat.reset();
        self.time_ticks = 0;

        let size = self.config.player_size;
        let spawn_pos = Vec2::new(
            (self.config.canvas_width - size.x) / 2.0,
            self.config.canvas_height - size.y * 2.0,
        );
        self.player_id = self.registry.insert(Body::player(
            spawn_pos,
            size,
            self.config.player_speed,
            self.config.max_health,
        ));
        self.sessions += 1;

        log::info!(
            "Session {} started (player id {})",
            self.sessions,
            self.player_id
        );
    }

    pub fn player(&self) -> Option<&Body> {
        self.registry.get(self.player_id)
    }

    pub fn player_mut(&mut self) -> Option<&mut Body> {
        self.registry.get_mut(self.player_id)
    }

    pub fn player_health(&self) -> i32 {
        self.player().map(|p| p.health).unwrap_or(0)
    }

    pub fn player_alive(&self) -> bool {
        self.player().is_some_and(|p| !p.is_dead())
    }

    pub fn phase(&self) -> GamePhase {
        if self.player_alive() {
            GamePhase::Playing
        } else {
            GamePhase::GameOver
        }
    }

    pub fn score(&self) -> u64 {
        self.stats.score(self.config.hit_score)
    }

    /// Serialize the session (minus RNG) for debugging and golden tests
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
