//! Minimal physics world: gravity integration, ground resting, and
//! contact-begin detection between AABB entities.
//!
//! Only pairs with at least one dynamic participant are considered for
//! contacts, and each newly-formed overlap is reported exactly once;
//! the pair must separate before it can be reported again.

use crate::constants::GRAVITY;
use crate::entity::{Entities, EntityId, EntityTag};
use std::collections::HashSet;

/// A contact-begin event. Participant order is arbitrary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: EntityId,
    pub b: EntityId,
}

/// Gravity + collision world for one session.
#[derive(Debug)]
pub struct PhysicsWorld {
    gravity: f64,
    /// Pairs currently overlapping, keyed with the smaller id first.
    touching: HashSet<(EntityId, EntityId)>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            gravity: GRAVITY,
            touching: HashSet::new(),
        }
    }

    /// Advance dynamic bodies by `dt` seconds and return the contacts
    /// that began this step.
    pub fn step(&mut self, entities: &mut Entities, dt: f64) -> Vec<Contact> {
        // Integrate dynamics
        for e in entities.iter_mut() {
            if e.dynamic {
                e.vel.y += self.gravity * dt;
                e.pos.x += e.vel.x * dt;
                e.pos.y += e.vel.y * dt;
            }
        }

        self.rest_on_ground(entities);
        self.detect_contacts(entities)
    }

    /// Clamp falling dynamic bodies onto the ground line so they rest
    /// there instead of sinking through.
    fn rest_on_ground(&self, entities: &mut Entities) {
        let ground_top = match entities.find_by_tag(EntityTag::Ground) {
            Some(ground) => ground.aabb().0.y,
            None => return,
        };

        for e in entities.iter_mut() {
            if !e.dynamic || e.tag == EntityTag::Ground {
                continue;
            }
            let bottom = e.pos.y + e.size.y / 2.0;
            if bottom > ground_top && e.vel.y > 0.0 {
                e.pos.y = ground_top - e.size.y / 2.0;
                e.vel.y = 0.0;
            }
        }
    }

    fn detect_contacts(&mut self, entities: &Entities) -> Vec<Contact> {
        let all: Vec<_> = entities.iter().collect();
        let mut begun = Vec::new();
        let mut still_touching = HashSet::new();

        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                if !a.dynamic && !b.dynamic {
                    continue;
                }
                if !a.overlaps(b) {
                    continue;
                }
                let key = pair_key(a.id, b.id);
                still_touching.insert(key);
                if !self.touching.contains(&key) {
                    begun.push(Contact { a: a.id, b: b.id });
                }
            }
        }

        // Separated or removed pairs become eligible again.
        self.touching = still_touching;
        begun
    }
}

fn pair_key(a: EntityId, b: EntityId) -> (EntityId, EntityId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
