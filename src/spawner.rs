//! Obstacle spawner: a repeating spawn cycle plus one traversal timer
//! per live obstacle.
//!
//! Every scheduled effect is held as an [`ActionId`] token — the
//! repeat cycle and each in-flight traversal — so the death transition
//! can cancel all of them reliably instead of only the most recent.

use crate::constants::*;
use crate::entity::{Entities, EntityId, EntityTag, Motion, Vec2};
use crate::scheduler::{Action, ActionId, Scheduler};
use rand::Rng;

/// Spawner state for one session.
#[derive(Debug, Default)]
pub struct ObstacleSpawner {
    repeat: Option<ActionId>,
    /// Traversal token per in-flight obstacle.
    in_flight: Vec<(EntityId, ActionId)>,
}

impl ObstacleSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the repeating spawn cycle: one obstacle on the next
    /// scheduler advance, then one every [`SPAWN_INTERVAL`] seconds.
    ///
    /// Precondition: call once per playing session. A second call is
    /// checked in debug builds and keeps the first cycle in release.
    pub fn start(&mut self, scheduler: &mut Scheduler) {
        debug_assert!(self.repeat.is_none(), "spawner started twice");
        if self.repeat.is_none() {
            self.repeat = Some(scheduler.every(SPAWN_INTERVAL, Action::SpawnObstacle));
        }
    }

    /// Cancel the repeating cycle. Obstacles already in motion keep
    /// their traversal timers; only the death transition clears those.
    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        if let Some(id) = self.repeat.take() {
            scheduler.cancel(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.repeat.is_some()
    }

    /// Create one obstacle just past the right edge, bottom on the
    /// ground line, with an independent uniformly-random traversal
    /// duration. Schedules its removal-and-score timer and records the
    /// token.
    pub fn spawn_one<R: Rng>(
        &mut self,
        entities: &mut Entities,
        scheduler: &mut Scheduler,
        rng: &mut R,
    ) -> EntityId {
        let duration = rng.gen_range(TRAVERSAL_MIN_SECS..TRAVERSAL_MAX_SECS);

        let id = entities.spawn(
            EntityTag::Obstacle,
            Vec2::new(OBSTACLE_SPAWN_X, OBSTACLE_Y),
            Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            false,
        );
        if let Some(obstacle) = entities.get_mut(id) {
            obstacle.motion = Some(Motion::new(OBSTACLE_SPAWN_X, OBSTACLE_END_X, duration));
        }

        let token = scheduler.after(duration, Action::FinishObstacle(id));
        self.in_flight.push((id, token));
        id
    }

    /// Forget one obstacle's traversal token (it completed or was
    /// destroyed). Unknown ids are a no-op.
    pub fn retire(&mut self, id: EntityId) {
        self.in_flight.retain(|(e, _)| *e != id);
    }

    /// Drop all bookkeeping without touching the scheduler. Used after
    /// `Scheduler::cancel_all` on death.
    pub fn abandon(&mut self) {
        self.repeat = None;
        self.in_flight.clear();
    }

    /// Traversal tokens currently outstanding.
    pub fn in_flight(&self) -> &[(EntityId, ActionId)] {
        &self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_one_creates_obstacle_at_right_edge() {
        let mut spawner = ObstacleSpawner::new();
        let mut entities = Entities::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let id = spawner.spawn_one(&mut entities, &mut scheduler, &mut rng);
        let obstacle = entities.get(id).unwrap();

        assert_eq!(obstacle.tag, EntityTag::Obstacle);
        assert!(obstacle.pos.x >= WORLD_WIDTH);
        // Bottom rests on the ground line
        let bottom = obstacle.pos.y + obstacle.size.y / 2.0;
        assert!((bottom - GROUND_Y).abs() < 1e-9);
        assert!(!obstacle.dynamic);
        assert!(obstacle.motion.is_some());
        assert_eq!(spawner.in_flight().len(), 1);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_traversal_durations_within_bounds() {
        let mut spawner = ObstacleSpawner::new();
        let mut entities = Entities::new();
        let mut scheduler = Scheduler::new();
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let id = spawner.spawn_one(&mut entities, &mut scheduler, &mut rng);
            let duration = entities.get(id).unwrap().motion.unwrap().duration;
            assert!(
                (TRAVERSAL_MIN_SECS..TRAVERSAL_MAX_SECS).contains(&duration),
                "duration {duration} out of bounds"
            );
        }
    }

    #[test]
    fn test_durations_drawn_independently() {
        let mut spawner = ObstacleSpawner::new();
        let mut entities = Entities::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let durations: Vec<f64> = (0..20)
            .map(|_| {
                let id = spawner.spawn_one(&mut entities, &mut scheduler, &mut rng);
                entities.get(id).unwrap().motion.unwrap().duration
            })
            .collect();
        let first = durations[0];
        assert!(durations.iter().any(|d| (d - first).abs() > 1e-6));
    }

    #[test]
    fn test_start_registers_repeat_and_stop_cancels_it() {
        let mut spawner = ObstacleSpawner::new();
        let mut scheduler = Scheduler::new();

        assert!(!spawner.is_running());
        spawner.start(&mut scheduler);
        assert!(spawner.is_running());
        assert_eq!(scheduler.pending(), 1);

        spawner.stop(&mut scheduler);
        assert!(!spawner.is_running());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_stop_leaves_in_flight_traversals() {
        let mut spawner = ObstacleSpawner::new();
        let mut entities = Entities::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        spawner.start(&mut scheduler);
        spawner.spawn_one(&mut entities, &mut scheduler, &mut rng);
        spawner.stop(&mut scheduler);

        // The traversal timer survives; only the repeat is gone
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(spawner.in_flight().len(), 1);
    }

    #[test]
    fn test_retire_forgets_token() {
        let mut spawner = ObstacleSpawner::new();
        let mut entities = Entities::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let id = spawner.spawn_one(&mut entities, &mut scheduler, &mut rng);
        spawner.retire(id);
        assert!(spawner.in_flight().is_empty());
        spawner.retire(id); // no-op
    }

    #[test]
    fn test_abandon_clears_bookkeeping() {
        let mut spawner = ObstacleSpawner::new();
        let mut entities = Entities::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        spawner.start(&mut scheduler);
        spawner.spawn_one(&mut entities, &mut scheduler, &mut rng);
        spawner.spawn_one(&mut entities, &mut scheduler, &mut rng);

        spawner.abandon();
        assert!(!spawner.is_running());
        assert!(spawner.in_flight().is_empty());
    }
}
