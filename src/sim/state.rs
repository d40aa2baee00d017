//! Game state and core simulation types
//!
//! `GameState` is the only mutable gameplay data. It is owned by whoever
//! drives the game and changed only by [`super::tick`] and [`GameState::reset`].

use serde::Serialize;

use super::collision::{Rect, is_on_screen, obstacle_rect, player_rect};
use super::levels::{LEVELS, MAX_OBSTACLES_PER_GROUP, ObstacleGroupLayout, layout_at};
use crate::consts::*;
use crate::ground_rest_y;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player hit an obstacle; only a reset leaves this phase
    GameOver,
}

/// Decorative scrolling credit text.
///
/// Has no effect on gameplay. It appears once, the first time the score
/// reaches [`CREDIT_SCORE`], and never again in the same game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreditBanner {
    pub visible: bool,
    pub x: i32,
    /// Latched once the banner has appeared
    pub shown: bool,
}

impl Default for CreditBanner {
    fn default() -> Self {
        Self {
            visible: false,
            x: SCREEN_WIDTH,
            shown: false,
        }
    }
}

impl CreditBanner {
    /// Start scrolling from the right edge if it hasn't appeared yet.
    /// Returns true when the banner was started by this call.
    pub fn trigger(&mut self) -> bool {
        if self.shown {
            return false;
        }
        self.visible = true;
        self.shown = true;
        self.x = SCREEN_WIDTH;
        true
    }

    /// Scroll left one step, hiding once past the far-left threshold
    pub fn advance(&mut self) {
        if !self.visible {
            return;
        }
        self.x -= CREDIT_SCROLL_SPEED;
        if self.x < CREDIT_HIDE_X {
            self.visible = false;
        }
    }
}

/// Complete game state (deterministic).
///
/// Serializes for state dumps only; there is no way back in, so every
/// `level_index` comes from [`GameState::new`] or [`next_level_index`].
///
/// [`next_level_index`]: super::levels::next_level_index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    /// Top edge of the player box
    pub player_y: f32,
    /// Vertical velocity (negative is up)
    pub player_vy: f32,
    /// X of the active group's first obstacle
    pub group_x: i32,
    /// Index into the level table
    pub level_index: usize,
    /// Groups cleared this game
    pub score: u32,
    pub phase: GamePhase,
    /// Pending jump edge, consumed by the next tick
    pub jump_requested: bool,
    /// Speed multiplier for gravity, vertical motion and scrolling
    pub speed: f32,
    pub credit: CreditBanner,
    /// Simulated ticks this game (not advanced after game over)
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh game: player resting on the ground, first level queued
    pub fn new() -> Self {
        Self {
            player_y: ground_rest_y(),
            player_vy: 0.0,
            group_x: LEVELS[0].spawn_x,
            level_index: 0,
            score: 0,
            phase: GamePhase::Running,
            jump_requested: false,
            speed: 1.0,
            credit: CreditBanner::default(),
            time_ticks: 0,
        }
    }

    /// Restart in place
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Player is on (or clamped to) the ground
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.player_y >= ground_rest_y()
    }

    /// Latch a jump edge for the next tick
    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    pub fn current_layout(&self) -> &'static ObstacleGroupLayout {
        layout_at(self.level_index)
    }

    /// Bounding boxes of the active group, visible or not
    pub fn obstacle_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.current_layout()
            .heights()
            .iter()
            .enumerate()
            .map(|(slot, &height)| obstacle_rect(self.group_x, slot, height))
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        let mut obstacles = [Rect::default(); MAX_OBSTACLES_PER_GROUP];
        let mut obstacle_count = 0;
        for rect in self.obstacle_rects().filter(is_on_screen) {
            obstacles[obstacle_count] = rect;
            obstacle_count += 1;
        }

        Snapshot {
            player: player_rect(self.player_y),
            score: self.score,
            game_over: self.is_game_over(),
            credit_visible: self.credit.visible,
            credit_x: self.credit.x,
            obstacles,
            obstacle_count,
        }
    }
}

/// Self-consistent copy of everything a frame needs to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Player box, truncated to whole pixels
    pub player: Rect,
    pub score: u32,
    pub game_over: bool,
    pub credit_visible: bool,
    pub credit_x: i32,
    obstacles: [Rect; MAX_OBSTACLES_PER_GROUP],
    obstacle_count: usize,
}

impl Snapshot {
    /// Obstacles of the active group that are on screen
    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles[..self.obstacle_count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.player_y, 50.0);
        assert_eq!(state.player_vy, 0.0);
        assert_eq!(state.group_x, 200);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.speed, 1.0);
        assert!(!state.jump_requested);
        assert!(state.is_grounded());
        assert_eq!(
            state.credit,
            CreditBanner {
                visible: false,
                x: SCREEN_WIDTH,
                shown: false
            }
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = GameState::new();
        state.score = 17;
        state.phase = GamePhase::GameOver;
        state.speed = 1.2;
        state.level_index = 5;
        state.group_x = -3;
        state.credit.trigger();
        state.jump_requested = true;

        state.reset();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_credit_banner_latch() {
        let mut credit = CreditBanner::default();
        assert!(credit.trigger());
        assert!(!credit.trigger());

        // Scroll from 128 down past -100: 115 steps of 2 reach -102
        for _ in 0..115 {
            credit.advance();
        }
        assert!(!credit.visible);
        assert!(credit.shown);
        assert!(!credit.trigger());
        assert!(!credit.visible);
    }

    #[test]
    fn test_snapshot_only_visible_obstacles() {
        let mut state = GameState::new();
        // Level 2 has three obstacles; put the first one off the left edge
        state.level_index = 2;
        state.group_x = -OBSTACLE_WIDTH;
        let snap = state.snapshot();
        assert_eq!(snap.obstacles().len(), 2);
        assert_eq!(snap.obstacles()[0].left(), 2);

        // Fresh game: group at x=200 is entirely off screen
        let snap = GameState::new().snapshot();
        assert!(snap.obstacles().is_empty());
        assert_eq!(snap.player.top(), 50);
    }

    #[test]
    fn test_state_dump_json() {
        let mut state = GameState::new();
        state.score = 3;
        state.player_y = 12.5;
        state.phase = GamePhase::GameOver;
        let json: serde_json::Value = serde_json::to_value(&state).unwrap();
        assert_eq!(json["score"], 3);
        assert_eq!(json["player_y"], 12.5);
        assert_eq!(json["phase"], "GameOver");
        assert_eq!(json["level_index"], 0);
        assert_eq!(json["credit"]["shown"], false);
    }
}
