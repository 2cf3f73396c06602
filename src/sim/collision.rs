//! Pairwise collision detection and resolution
//!
//! Every ordered pair (A, B) of distinct live bodies is tested, so one
//! overlapping pair resolves twice: once from each body's side. The rule
//! applied depends on A's kind:
//!
//! - Player: A takes contact damage, nothing is removed
//! - Projectile on an Enemy while the player lives: score a hit, remove A
//! - Anything else: remove A
//!
//! That last rule is how enemies die (Enemy vs Projectile) and why an enemy
//! that rams the player disappears after dealing its damage.

use super::body::{Body, BodyKind, EntityId};
use super::state::GameState;

/// What to do with body A after it overlaps body B
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    DamagePlayer,
    ScoreHit,
    Destroy,
}

/// Axis-aligned overlap with `pos` as the top-left corner. Touching edges do not overlap.
#[inline]
pub fn aabb_overlap(a: &Body, b: &Body) -> bool {
    let (a_min, a_max) = a.bounds();
    let (b_min, b_max) = b.bounds();
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Pick the rule for the ordered pair (a, b)
pub fn resolve_pair(a: BodyKind, b: BodyKind, player_alive: bool) -> Resolution {
    match (a, b) {
        (BodyKind::Player { .. }, _) => Resolution::DamagePlayer,
        (BodyKind::Projectile, BodyKind::Enemy) if player_alive => Resolution::ScoreHit,
        _ => Resolution::Destroy,
    }
}

/// One resolved contact, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: EntityId,
    pub b: EntityId,
    pub resolution: Resolution,
}

/// Test all ordered pairs and apply each resolution immediately.
///
/// Removals are only queued; bodies marked here still take part in the rest
/// of the pass and are flushed afterwards by the tick.
pub fn resolve_collisions(state: &mut GameState) -> Vec<Contact> {
    let ids = state.registry.ids();
    let mut contacts = Vec::new();

    for &a_id in &ids {
        for &b_id in &ids {
            if a_id == b_id {
                continue;
            }
            let (a_kind, b_kind) = match (state.registry.get(a_id), state.registry.get(b_id)) {
                (Some(a), Some(b)) if aabb_overlap(a, b) => (a.kind, b.kind),
                _ => continue,
            };

            let resolution = resolve_pair(a_kind, b_kind, state.player_alive());
            match resolution {
                Resolution::DamagePlayer => {
                    let damage = state.config.contact_damage;
                    if let Some(player) = state.registry.get_mut(a_id) {
                        player.damage(damage);
                    }
                }
                Resolution::ScoreHit => {
                    state.stats.enemies_hit += 1;
                    state.registry.mark_for_removal(a_id);
                }
                Resolution::Destroy => state.registry.mark_for_removal(a_id),
            }
            contacts.push(Contact {
                a: a_id,
                b: b_id,
                resolution,
            });
        }
    }

    if !contacts.is_empty() {
        log::trace!("{} contacts resolved", contacts.len());
    }
    contacts
}
