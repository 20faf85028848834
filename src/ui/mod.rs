//! Terminal rendering for the game scene.

pub mod scene;

pub use scene::render;
