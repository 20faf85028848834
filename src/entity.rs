//! Entity store for the game scene.
//!
//! Entities are plain records: a tag, a center position, a size, a
//! velocity, and a `dynamic` flag that decides whether the physics
//! world integrates gravity for them. Obstacles additionally carry a
//! `Motion`, a timed horizontal traversal that stands in for an
//! engine-scheduled move action.

/// Opaque entity identifier, unique within one session.
pub type EntityId = u32;

/// Role tags. Collision handling keys off `Obstacle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityTag {
    Player,
    Ground,
    Obstacle,
}

/// 2D vector (y grows downward, matching terminal rows).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A timed horizontal traversal from `from_x` to `to_x` over
/// `duration` seconds. `elapsed` is advanced by the session tick.
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    pub from_x: f64,
    pub to_x: f64,
    pub duration: f64,
    pub elapsed: f64,
}

impl Motion {
    pub fn new(from_x: f64, to_x: f64, duration: f64) -> Self {
        Self {
            from_x,
            to_x,
            duration,
            elapsed: 0.0,
        }
    }

    /// Current x position, linearly interpolated and clamped to the
    /// end point once the duration has elapsed.
    pub fn current_x(&self) -> f64 {
        if self.duration <= 0.0 {
            return self.to_x;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from_x + (self.to_x - self.from_x) * t
    }
}

/// One scene entity. Position is the center of its AABB.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub tag: EntityTag,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Gravity-driven when true. The player starts with this off and
    /// gains dynamics when the round begins.
    pub dynamic: bool,
    pub motion: Option<Motion>,
}

impl Entity {
    /// AABB as (min, max) corners.
    pub fn aabb(&self) -> (Vec2, Vec2) {
        let half_w = self.size.x / 2.0;
        let half_h = self.size.y / 2.0;
        (
            Vec2::new(self.pos.x - half_w, self.pos.y - half_h),
            Vec2::new(self.pos.x + half_w, self.pos.y + half_h),
        )
    }

    /// Strict AABB overlap. Exact edge touching does not count, so an
    /// obstacle resting on the ground line is not in contact with it.
    pub fn overlaps(&self, other: &Entity) -> bool {
        let (a_min, a_max) = self.aabb();
        let (b_min, b_max) = other.aabb();
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Add an instantaneous velocity change.
    pub fn apply_impulse(&mut self, dx: f64, dy: f64) {
        self.vel.x += dx;
        self.vel.y += dy;
    }
}

/// Id-allocating entity collection owned by one session.
#[derive(Debug, Default)]
pub struct Entities {
    next_id: EntityId,
    items: Vec<Entity>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entity and return its id.
    pub fn spawn(&mut self, tag: EntityTag, pos: Vec2, size: Vec2, dynamic: bool) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Entity {
            id,
            tag,
            pos,
            size,
            vel: Vec2::default(),
            dynamic,
            motion: None,
        });
        id
    }

    /// Remove an entity. Removing an id that is already gone is a
    /// no-op, so death cleanup and traversal completion stay
    /// idempotent against each other.
    pub fn remove(&mut self, id: EntityId) {
        self.items.retain(|e| e.id != id);
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.items.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.items.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.items.iter_mut()
    }

    /// First entity with the given tag, if any.
    pub fn find_by_tag(&self, tag: EntityTag) -> Option<&Entity> {
        self.items.iter().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(entities: &mut Entities, x: f64, y: f64, side: f64) -> EntityId {
        entities.spawn(
            EntityTag::Obstacle,
            Vec2::new(x, y),
            Vec2::new(side, side),
            false,
        )
    }

    #[test]
    fn test_spawn_assigns_unique_ids() {
        let mut entities = Entities::new();
        let a = square(&mut entities, 0.0, 0.0, 1.0);
        let b = square(&mut entities, 5.0, 0.0, 1.0);
        assert_ne!(a, b);
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut entities = Entities::new();
        let a = square(&mut entities, 0.0, 0.0, 1.0);
        entities.remove(a);
        assert!(entities.get(a).is_none());
        entities.remove(a); // second remove is a no-op
        assert!(entities.is_empty());
    }

    #[test]
    fn test_overlap_detection() {
        let mut entities = Entities::new();
        let a = square(&mut entities, 0.0, 0.0, 2.0);
        let b = square(&mut entities, 1.5, 0.0, 2.0);
        let c = square(&mut entities, 10.0, 0.0, 2.0);
        let a = entities.get(a).unwrap().clone();
        assert!(a.overlaps(entities.get(b).unwrap()));
        assert!(!a.overlaps(entities.get(c).unwrap()));
    }

    #[test]
    fn test_exact_touching_is_not_overlap() {
        let mut entities = Entities::new();
        let a = square(&mut entities, 0.0, 0.0, 2.0);
        let b = square(&mut entities, 2.0, 0.0, 2.0); // edges meet at x = 1.0
        let a = entities.get(a).unwrap().clone();
        assert!(!a.overlaps(entities.get(b).unwrap()));
    }

    #[test]
    fn test_motion_interpolates_and_clamps() {
        let mut m = Motion::new(100.0, 0.0, 2.0);
        assert!((m.current_x() - 100.0).abs() < f64::EPSILON);
        m.elapsed = 1.0;
        assert!((m.current_x() - 50.0).abs() < 1e-9);
        m.elapsed = 5.0; // past the end
        assert!((m.current_x() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_find_by_tag() {
        let mut entities = Entities::new();
        entities.spawn(
            EntityTag::Player,
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 3.0),
            false,
        );
        square(&mut entities, 0.0, 0.0, 1.0);
        let player = entities.find_by_tag(EntityTag::Player).unwrap();
        assert_eq!(player.tag, EntityTag::Player);
        assert!(entities.find_by_tag(EntityTag::Ground).is_none());
    }
}
