//! Game state machine, per-tick orchestration, and collision
//! resolution.
//!
//! Everything here runs on the single frame thread: the binary feeds
//! in key events and the frame delta, tests feed in synthetic deltas.
//! "Waiting" is always a scheduled future action, never a sleep.

use crate::constants::*;
use crate::entity::EntityTag;
use crate::game_state::{GameMode, GameSession, LogoState};
use crate::physics::Contact;
use crate::scheduler::Action;
use rand::Rng;

/// Result of delivering a primary-action event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Event consumed by the current session.
    Handled,
    /// Session is dead; the caller should construct a fresh
    /// [`GameSession`] and present it.
    Restart,
}

/// Deliver one primary-action event (the tap / Space press).
///
/// - `IntroLogo`: flips to `Playing` immediately and schedules the
///   rest of the intro chain (logo fade, wait, round start).
/// - `Playing`: zeroes vertical momentum, then flaps upward.
/// - `Dead`: asks the caller for a full restart.
pub fn primary_action(session: &mut GameSession) -> InputOutcome {
    match session.mode {
        GameMode::IntroLogo => {
            session.mode = GameMode::Playing;
            session.logo = LogoState::Fading { elapsed: 0.0 };
            session
                .scheduler
                .after(LOGO_FADE_SECS + ROUND_START_DELAY, Action::BeginRound);
            InputOutcome::Handled
        }
        GameMode::Playing => {
            if let Some(player) = session.entities.get_mut(session.player) {
                // Zero first so leftover downward momentum never eats
                // into jump height
                player.vel.y = 0.0;
                player.apply_impulse(0.0, FLAP_IMPULSE);
            }
            InputOutcome::Handled
        }
        GameMode::Dead => InputOutcome::Restart,
    }
}

/// Advance the session by `dt` seconds. A dead session is frozen: all
/// pending actions were cancelled at the death transition and nothing
/// moves afterwards.
pub fn tick<R: Rng>(session: &mut GameSession, dt: f64, rng: &mut R) {
    if session.mode == GameMode::Dead {
        return;
    }

    if let LogoState::Fading { elapsed } = &mut session.logo {
        *elapsed += dt;
    }

    for action in session.scheduler.advance(dt) {
        apply_action(session, action, rng);
    }

    advance_motions(session, dt);

    let contacts = session.physics.step(&mut session.entities, dt);
    for contact in contacts {
        handle_contact(session, contact);
        if session.mode == GameMode::Dead {
            break;
        }
    }
}

fn apply_action<R: Rng>(session: &mut GameSession, action: Action, rng: &mut R) {
    match action {
        Action::BeginRound => {
            if let Some(player) = session.entities.get_mut(session.player) {
                player.dynamic = true;
            }
            session.logo = LogoState::Removed;
            session.spawner.start(&mut session.scheduler);
        }
        Action::SpawnObstacle => {
            session
                .spawner
                .spawn_one(&mut session.entities, &mut session.scheduler, rng);
        }
        Action::FinishObstacle(id) => {
            // Traversal complete: the obstacle survived, score it
            session.entities.remove(id);
            session.spawner.retire(id);
            session.score += 1;
        }
    }
}

/// Interpolate in-flight obstacle positions along their traversals.
fn advance_motions(session: &mut GameSession, dt: f64) {
    for entity in session.entities.iter_mut() {
        if let Some(motion) = &mut entity.motion {
            motion.elapsed += dt;
            entity.pos.x = motion.current_x();
        }
    }
}

/// Resolve one contact-begin event. A contact involving an obstacle is
/// a death contact regardless of the current mode: reveal the game
/// over indicator, remove both participants, and cancel every pending
/// scheduled action so nothing spawns, moves, or scores afterwards.
/// Other contacts (player vs ground) have no gameplay effect.
pub fn handle_contact(session: &mut GameSession, contact: Contact) {
    if session.mode == GameMode::Dead {
        // Scene already cleaned up; late contacts are no-ops
        return;
    }

    let tag_of = |id| session.entities.get(id).map(|e| e.tag);
    let hit_obstacle = tag_of(contact.a) == Some(EntityTag::Obstacle)
        || tag_of(contact.b) == Some(EntityTag::Obstacle);
    if !hit_obstacle {
        return;
    }

    session.game_over_visible = true;
    session.mode = GameMode::Dead;

    session.entities.remove(contact.a);
    session.entities.remove(contact.b);

    session.scheduler.cancel_all();
    session.spawner.abandon();
}
