//! Collision detection between the player box and obstacles
//!
//! Obstacles are drawn as triangles but collide as their bounding boxes,
//! so the hit region is a little larger than what the player sees.

use glam::IVec2;

use crate::consts::*;

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Open-interval overlap on the x axis (touching edges don't count)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }
}

/// Bounding box of obstacle `slot` in a group whose first obstacle is at `group_x`
pub fn obstacle_rect(group_x: i32, slot: usize, height: i32) -> Rect {
    Rect::new(
        group_x + slot as i32 * OBSTACLE_SPACING,
        GROUND_LEVEL - height,
        OBSTACLE_WIDTH,
        height,
    )
}

/// Player box with its y truncated to whole pixels (used for drawing)
pub fn player_rect(player_y: f32) -> Rect {
    Rect::new(PLAYER_X, player_y as i32, PLAYER_SIZE, PLAYER_SIZE)
}

/// Whether any part of the obstacle is inside the screen horizontally
#[inline]
pub fn is_on_screen(obstacle: &Rect) -> bool {
    obstacle.left() + OBSTACLE_WIDTH > 0 && obstacle.left() < SCREEN_WIDTH
}

/// Test the player box against an obstacle's bounding box.
///
/// The vertical test uses the unrounded player y. Obstacles reach down to the
/// ground and the player never goes below it, so only the obstacle's top
/// edge matters vertically.
pub fn player_hits_obstacle(player_y: f32, obstacle: &Rect) -> bool {
    let player = Rect::new(PLAYER_X, 0, PLAYER_SIZE, PLAYER_SIZE);
    player.overlaps_x(obstacle) && player_y + PLAYER_SIZE as f32 > obstacle.top() as f32
}
