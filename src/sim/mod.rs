//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod combat;
pub mod cooldown;
pub mod registry;
pub mod spawner;
pub mod state;
pub mod stats;
pub mod tick;

pub use body::{Body, BodyKind, EntityId, controller_velocity};
pub use collision::{Contact, Resolution, aabb_overlap, resolve_collisions, resolve_pair};
pub use combat::CombatSystem;
pub use cooldown::Cooldown;
pub use registry::EntityRegistry;
pub use spawner::Spawner;
pub use state::{GamePhase, GameState};
pub use stats::SessionStats;
pub use tick::{ControllerState, tick};
