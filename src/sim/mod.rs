//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, constants tuned per tick
//! - No randomness (levels come from a fixed table)
//! - No rendering or platform dependencies

pub mod collision;
pub mod levels;
pub mod state;
pub mod tick;

pub use collision::{Rect, is_on_screen, obstacle_rect, player_hits_obstacle, player_rect};
pub use levels::{
    LEVEL_COUNT, LEVELS, MAX_OBSTACLES_PER_GROUP, ObstacleGroupLayout, layout_at, next_level_index,
};
pub use state::{CreditBanner, GamePhase, GameState, Snapshot};
pub use tick::{TickEvents, TickInput, step_frame, tick};
