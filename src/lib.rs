//! Jumper - a one-button endless runner for the terminal.
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod constants;
pub mod entity;
pub mod game_logic;
pub mod game_state;
pub mod physics;
pub mod scheduler;
pub mod spawner;

// UI module is tightly coupled to the terminal; exposed for the binary
pub mod ui;

pub use constants::*;
pub use game_logic::{handle_contact, primary_action, tick, InputOutcome};
pub use game_state::{GameMode, GameSession, LogoState};
