//! Session state for one run of the game.

use crate::constants::*;
use crate::entity::{Entities, EntityId, EntityTag, Vec2};
use crate::physics::PhysicsWorld;
use crate::scheduler::Scheduler;
use crate::spawner::ObstacleSpawner;

/// Current mode of the session. `Dead` is terminal; a fresh session
/// starts over at `IntroLogo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    IntroLogo,
    Playing,
    Dead,
}

/// Intro logo lifecycle: visible, fading out, gone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogoState {
    Visible,
    Fading { elapsed: f64 },
    Removed,
}

impl LogoState {
    /// Opacity in [0, 1] for the renderer.
    pub fn alpha(&self) -> f64 {
        match self {
            LogoState::Visible => 1.0,
            LogoState::Fading { elapsed } => (1.0 - elapsed / LOGO_FADE_SECS).max(0.0),
            LogoState::Removed => 0.0,
        }
    }
}

/// All state for one game session. Constructing a new session is the
/// only way to reset score and mode; restart after death swaps the
/// whole value.
#[derive(Debug)]
pub struct GameSession {
    pub mode: GameMode,
    /// Obstacles survived this session. Monotonically non-decreasing
    /// while playing.
    pub score: u32,
    pub entities: Entities,
    pub physics: PhysicsWorld,
    pub scheduler: Scheduler,
    pub spawner: ObstacleSpawner,
    /// The player entity. May be gone from `entities` after a death
    /// collision removed it.
    pub player: EntityId,
    pub logo: LogoState,
    pub game_over_visible: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Fresh session: score 0, mode `IntroLogo`, player (dynamics off
    /// until the round begins) and ground in place.
    pub fn new() -> Self {
        let mut entities = Entities::new();

        let player = entities.spawn(
            EntityTag::Player,
            Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            Vec2::new(PLAYER_SIZE, PLAYER_SIZE),
            false,
        );

        entities.spawn(
            EntityTag::Ground,
            Vec2::new(WORLD_WIDTH / 2.0, GROUND_Y + GROUND_THICKNESS / 2.0),
            Vec2::new(WORLD_WIDTH * 2.0, GROUND_THICKNESS),
            false,
        );

        Self {
            mode: GameMode::IntroLogo,
            score: 0,
            entities,
            physics: PhysicsWorld::new(),
            scheduler: Scheduler::new(),
            spawner: ObstacleSpawner::new(),
            player,
            logo: LogoState::Visible,
            game_over_visible: false,
        }
    }

    /// Count of live obstacle entities.
    pub fn obstacle_count(&self) -> usize {
        self.entities
            .iter()
            .filter(|e| e.tag == EntityTag::Obstacle)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new();
        assert_eq!(session.mode, GameMode::IntroLogo);
        assert_eq!(session.score, 0);
        assert_eq!(session.logo, LogoState::Visible);
        assert!(!session.game_over_visible);
        assert_eq!(session.obstacle_count(), 0);

        let player = session.entities.get(session.player).unwrap();
        assert_eq!(player.tag, EntityTag::Player);
        assert!(!player.dynamic, "player dynamics start disabled");
        assert!(session.entities.find_by_tag(EntityTag::Ground).is_some());
    }

    #[test]
    fn test_player_starts_above_ground() {
        let session = GameSession::new();
        let player = session.entities.get(session.player).unwrap();
        let bottom = player.pos.y + player.size.y / 2.0;
        assert!(bottom <= GROUND_Y);
    }

    #[test]
    fn test_logo_alpha_fades() {
        assert_eq!(LogoState::Visible.alpha(), 1.0);
        let mid = LogoState::Fading {
            elapsed: LOGO_FADE_SECS / 2.0,
        };
        assert!((mid.alpha() - 0.5).abs() < 1e-9);
        let done = LogoState::Fading {
            elapsed: LOGO_FADE_SECS * 2.0,
        };
        assert_eq!(done.alpha(), 0.0);
        assert_eq!(LogoState::Removed.alpha(), 0.0);
    }
}
