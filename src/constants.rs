// World dimensions in logical units. The renderer scales these to
// whatever terminal area it is given.
pub const WORLD_WIDTH: f64 = 100.0;
pub const WORLD_HEIGHT: f64 = 60.0;

// Top edge of the ground line (y grows downward).
pub const GROUND_Y: f64 = 38.0;
pub const GROUND_THICKNESS: f64 = 2.0;

// Player geometry and start position.
pub const PLAYER_SIZE: f64 = 3.0;
pub const PLAYER_START_X: f64 = 10.0;
pub const PLAYER_START_Y: f64 = 36.0;

// Obstacle geometry. Obstacles spawn just past the right edge with
// their bottom resting on the ground line, and traverse to just past
// the left edge.
pub const OBSTACLE_WIDTH: f64 = 2.0;
pub const OBSTACLE_HEIGHT: f64 = 6.0;
pub const OBSTACLE_SPAWN_X: f64 = WORLD_WIDTH + OBSTACLE_WIDTH / 2.0;
pub const OBSTACLE_END_X: f64 = -(OBSTACLE_WIDTH / 2.0) - 1.0;
pub const OBSTACLE_Y: f64 = GROUND_Y - OBSTACLE_HEIGHT / 2.0;

// Physics tuning (units per second).
pub const GRAVITY: f64 = 70.0;
pub const FLAP_IMPULSE: f64 = -35.0;

// Spawner timing (seconds).
pub const SPAWN_INTERVAL: f64 = 1.5;
pub const TRAVERSAL_MIN_SECS: f64 = 1.0;
pub const TRAVERSAL_MAX_SECS: f64 = 1.5;

// Intro sequence: logo fades for LOGO_FADE_SECS, then the round begins
// ROUND_START_DELAY later (player dynamics on, spawner started).
pub const LOGO_FADE_SECS: f64 = 0.3;
pub const ROUND_START_DELAY: f64 = 0.5;

// Frame timing for the interactive loop.
pub const FRAME_INTERVAL_MS: u64 = 33;
