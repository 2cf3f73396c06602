//! Entity registry with deferred removal
//!
//! Bodies are keyed by id and always enumerated in ascending id order, so a
//! tick's iteration order is reproducible. Removal goes through a queue that
//! is flushed once per tick; nothing disappears mid-pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::body::{Body, EntityId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRegistry {
    bodies: BTreeMap<EntityId, Body>,
    /// Ids pending removal, in mark order, no duplicates
    removal_queue: Vec<EntityId>,
    /// Next id to hand out (survives `clear`)
    next_id: EntityId,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            bodies: BTreeMap::new(),
            removal_queue: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign the next id to `body` and register it
    pub fn insert(&mut self, mut body: Body) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        body.id = id;
        self.bodies.insert(id, body);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.bodies.get_mut(&id)
    }

    /// Live bodies in ascending id order
    pub fn all(&self) -> impl Iterator<Item = &Body> {
        self.bodies.values()
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.values_mut()
    }

    /// Snapshot of live ids, for passes that mutate while walking
    pub fn ids(&self) -> Vec<EntityId> {
        self.bodies.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Queue `id` for removal at the next flush. Marking twice is a no-op.
    pub fn mark_for_removal(&mut self, id: EntityId) {
        if !self.removal_queue.contains(&id) {
            self.removal_queue.push(id);
        }
    }

    pub fn is_marked(&self, id: EntityId) -> bool {
        self.removal_queue.contains(&id)
    }

    pub fn pending_removals(&self) -> &[EntityId] {
        &self.removal_queue
    }

    /// Remove every marked body, then empty the queue. Returns how many were removed.
    pub fn flush_removals(&mut self) -> usize {
        let mut removed = 0;
        for id in self.removal_queue.drain(..) {
            if self.bodies.remove(&id).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Drop all bodies and pending removals. Ids keep counting up.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.removal_queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn enemy() -> Body {
        Body::enemy(Vec2::ZERO, Vec2::new(0.0, 120.0), Vec2::splat(20.0), 100)
    }

    #[test]
    fn test_insert_assigns_monotonic_ids() {
        let mut registry = EntityRegistry::new();
        let a = registry.insert(enemy());
        let b = registry.insert(enemy());
        assert!(b > a);
        assert_eq!(registry.get(a).map(|body| body.id), Some(a));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_removal_is_deferred_until_flush() {
        let mut registry = EntityRegistry::new();
        let a = registry.insert(enemy());
        registry.mark_for_removal(a);
        assert!(registry.get(a).is_some());
        assert!(registry.is_marked(a));

        assert_eq!(registry.flush_removals(), 1);
        assert!(registry.get(a).is_none());
        assert!(registry.pending_removals().is_empty());
    }

    #[test]
    fn test_double_mark_removes_once() {
        let mut registry = EntityRegistry::new();
        let a = registry.insert(enemy());
        let b = registry.insert(enemy());
        registry.mark_for_removal(a);
        registry.mark_for_removal(a);
        assert_eq!(registry.pending_removals(), &[a]);
        assert_eq!(registry.flush_removals(), 1);
        assert_eq!(registry.ids(), vec![b]);
    }

    #[test]
    fn test_clear_never_reuses_ids() {
        let mut registry = EntityRegistry::new();
        let a = registry.insert(enemy());
        registry.mark_for_removal(a);
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.pending_removals().is_empty());
        let b = registry.insert(enemy());
        assert!(b > a);
    }

    #[test]
    fn test_enumeration_is_id_ordered() {
        let mut registry = EntityRegistry::new();
        let ids: Vec<_> = (0..5).map(|_| registry.insert(enemy())).collect();
        registry.mark_for_removal(ids[2]);
        registry.flush_removals();
        let seen: Vec<_> = registry.all().map(|b| b.id).collect();
        assert_eq!(seen, vec![ids[0], ids[1], ids[3], ids[4]]);
    }

    proptest! {
        #[test]
        fn prop_flush_removes_exactly_marked(marks in proptest::collection::vec(0usize..8, 0..24)) {
            let mut registry = EntityRegistry::new();
            let ids: Vec<_> = (0..8).map(|_| registry.insert(enemy())).collect();
            for &m in &marks {
                registry.mark_for_removal(ids[m]);
            }
            let mut unique = marks.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(registry.flush_removals(), unique.len());
            prop_assert_eq!(registry.len(), 8 - unique.len());
        }
    }
}
