//! Timed-action scheduler for the game session.
//!
//! Replaces engine-style action objects (run/wait/sequence/repeat)
//! with plain data: one-shot actions with a due time and repeating
//! actions with an interval. Nothing here blocks; the session advances
//! the scheduler with the frame delta, and tests advance it with a
//! synthetic clock. Every scheduled action returns an [`ActionId`]
//! token so it can be cancelled individually, and `cancel_all` clears
//! the whole session's pending work on death.

use crate::entity::EntityId;

/// Cancellation token for a scheduled action.
pub type ActionId = u64;

/// Payloads delivered when an action comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Intro chain finished: enable player dynamics, start the spawner.
    BeginRound,
    /// Repeating spawn-cycle fire: create one obstacle.
    SpawnObstacle,
    /// An obstacle finished its traversal: remove it and score.
    FinishObstacle(EntityId),
}

#[derive(Debug)]
struct OneShot {
    id: ActionId,
    due: f64,
    action: Action,
}

#[derive(Debug)]
struct Repeat {
    id: ActionId,
    interval: f64,
    next_due: f64,
    action: Action,
}

/// Single-threaded scheduler advanced explicitly by the session tick.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: f64,
    next_id: ActionId,
    one_shots: Vec<OneShot>,
    repeats: Vec<Repeat>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` once, `delay` seconds from now.
    pub fn after(&mut self, delay: f64, action: Action) -> ActionId {
        let id = self.alloc_id();
        self.one_shots.push(OneShot {
            id,
            due: self.now + delay,
            action,
        });
        id
    }

    /// Schedule `action` repeatedly. The first fire happens on the
    /// next `advance`, then every `interval` seconds — matching a
    /// run-then-wait repeat cycle.
    pub fn every(&mut self, interval: f64, action: Action) -> ActionId {
        let id = self.alloc_id();
        self.repeats.push(Repeat {
            id,
            interval,
            next_due: self.now,
            action,
        });
        id
    }

    /// Cancel a single scheduled action. Unknown ids (already fired or
    /// already cancelled) are a no-op.
    pub fn cancel(&mut self, id: ActionId) {
        self.one_shots.retain(|s| s.id != id);
        self.repeats.retain(|r| r.id != id);
    }

    /// Cancel everything pending for this session.
    pub fn cancel_all(&mut self) {
        self.one_shots.clear();
        self.repeats.clear();
    }

    /// Number of pending entries (repeats count once).
    pub fn pending(&self) -> usize {
        self.one_shots.len() + self.repeats.len()
    }

    /// Advance the clock by `dt` seconds and return every action that
    /// came due, ordered by due time (ties by creation order). A
    /// repeat whose interval was spanned more than once fires once per
    /// missed interval.
    pub fn advance(&mut self, dt: f64) -> Vec<Action> {
        self.now += dt;
        let now = self.now;

        // (due, id, action) so sorting gives due-time order with
        // creation order as the tie-break.
        let mut fired: Vec<(f64, ActionId, Action)> = Vec::new();

        for shot in &self.one_shots {
            if shot.due <= now {
                fired.push((shot.due, shot.id, shot.action));
            }
        }
        self.one_shots.retain(|s| s.due > now);

        for rep in &mut self.repeats {
            while rep.next_due <= now {
                fired.push((rep.next_due, rep.id, rep.action));
                rep.next_due += rep.interval;
            }
        }

        fired.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });
        fired.into_iter().map(|(_, _, action)| action).collect()
    }

    fn alloc_id(&mut self) -> ActionId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
