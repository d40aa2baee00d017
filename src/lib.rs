//! Tri Jump - a one-button endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level progression)
//! - `renderer`: Render sink trait and the terminal canvas
//! - `platform`: Input events and the bounded input queue
//! - `settings`: Host configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// All values are per tick. The tuning assumes one tick per ~50ms frame.
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Y of the ground line; obstacles stand on it, the player rests on it
    pub const GROUND_LEVEL: i32 = 55;

    /// Player box (fixed X, square)
    pub const PLAYER_SIZE: i32 = 5;
    pub const PLAYER_X: i32 = 15;

    /// Downward acceleration per tick (scaled by game speed)
    pub const GRAVITY: f32 = 0.6;
    /// Upward velocity applied by a jump
    pub const JUMP_FORCE: f32 = -8.0;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: i32 = 8;
    /// Distance between the left edges of neighbouring obstacles in a group
    pub const OBSTACLE_SPACING: i32 = 10;
    /// Horizontal scroll per tick (scaled by game speed)
    pub const OBSTACLE_SPEED: f32 = 2.0;
    /// Obstacle widths a group must travel past the left edge before it is cleared
    pub const CLEARANCE: i32 = 3;

    /// Score interval between speed-ups
    pub const SPEEDUP_EVERY: u32 = 10;
    pub const SPEEDUP_STEP: f32 = 0.2;

    /// Credit banner
    pub const CREDIT_SCORE: u32 = 10;
    pub const CREDIT_SCROLL_SPEED: i32 = 2;
    /// Banner hides once its X drops below this
    pub const CREDIT_HIDE_X: i32 = -100;

    /// Default input wait per frame (ms)
    pub const FRAME_POLL_MS: u64 = 50;
}

/// Y the player box rests at when grounded
#[inline]
pub fn ground_rest_y() -> f32 {
    (consts::GROUND_LEVEL - consts::PLAYER_SIZE) as f32
}
