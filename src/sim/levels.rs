//! Level table
//!
//! A fixed, cyclic catalogue of obstacle groups. After the last entry the
//! game wraps back to the first.

use crate::consts::{CLEARANCE, OBSTACLE_SPACING, OBSTACLE_WIDTH};

/// Maximum obstacles in a single group
pub const MAX_OBSTACLES_PER_GROUP: usize = 3;

/// Layout of one obstacle group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleGroupLayout {
    /// X at which the group's first obstacle is placed when the level starts
    pub spawn_x: i32,
    /// Obstacles in use (1..=3)
    pub obstacle_count: usize,
    /// Height of each obstacle above the ground; slots past `obstacle_count` are 0
    pub heights: [i32; MAX_OBSTACLES_PER_GROUP],
}

impl ObstacleGroupLayout {
    const fn new(
        spawn_x: i32,
        obstacle_count: usize,
        heights: [i32; MAX_OBSTACLES_PER_GROUP],
    ) -> Self {
        Self {
            spawn_x,
            obstacle_count,
            heights,
        }
    }

    /// Heights of the obstacles actually in use
    pub fn heights(&self) -> &[i32] {
        &self.heights[..self.obstacle_count]
    }

    /// How far the group (plus clearance margin) extends right of its first obstacle.
    ///
    /// The group counts as cleared once `group_x + group_span() < 0`.
    pub fn group_span(&self) -> i32 {
        OBSTACLE_WIDTH * CLEARANCE + OBSTACLE_SPACING * (self.obstacle_count as i32 - 1)
    }
}

/// The level table, in play order
#[rustfmt::skip]
pub const LEVELS: [ObstacleGroupLayout; 42] = [
    ObstacleGroupLayout::new(200, 1, [20, 0, 0]),
    ObstacleGroupLayout::new(300, 2, [20, 40, 0]),
    ObstacleGroupLayout::new(400, 3, [20, 40, 20]),
    ObstacleGroupLayout::new(500, 1, [60, 0, 0]),
    ObstacleGroupLayout::new(600, 2, [60, 20, 0]),
    ObstacleGroupLayout::new(700, 3, [20, 20, 40]),
    ObstacleGroupLayout::new(800, 1, [20, 0, 0]),
    ObstacleGroupLayout::new(900, 2, [40, 60, 0]),
    ObstacleGroupLayout::new(1000, 3, [60, 40, 20]),
    ObstacleGroupLayout::new(1100, 1, [50, 0, 0]),
    ObstacleGroupLayout::new(1200, 2, [20, 20, 0]),
    ObstacleGroupLayout::new(1300, 3, [30, 30, 30]),
    ObstacleGroupLayout::new(1400, 1, [60, 0, 0]),
    ObstacleGroupLayout::new(1500, 2, [20, 60, 0]),
    ObstacleGroupLayout::new(1600, 3, [60, 40, 20]),
    ObstacleGroupLayout::new(1700, 1, [20, 0, 0]),
    ObstacleGroupLayout::new(1800, 2, [40, 60, 0]),
    ObstacleGroupLayout::new(1900, 3, [60, 40, 20]),
    ObstacleGroupLayout::new(2000, 1, [30, 0, 0]),
    ObstacleGroupLayout::new(2100, 2, [30, 30, 0]),
    ObstacleGroupLayout::new(2200, 3, [60, 40, 30]),
    ObstacleGroupLayout::new(2300, 1, [20, 0, 0]),
    ObstacleGroupLayout::new(2400, 2, [20, 40, 0]),
    ObstacleGroupLayout::new(2500, 3, [20, 40, 20]),
    ObstacleGroupLayout::new(2600, 1, [60, 0, 0]),
    ObstacleGroupLayout::new(2700, 2, [60, 20, 0]),
    ObstacleGroupLayout::new(2800, 3, [20, 20, 40]),
    ObstacleGroupLayout::new(2900, 1, [20, 0, 0]),
    ObstacleGroupLayout::new(3000, 2, [40, 60, 0]),
    ObstacleGroupLayout::new(3100, 3, [60, 40, 20]),
    ObstacleGroupLayout::new(3200, 1, [50, 0, 0]),
    ObstacleGroupLayout::new(3300, 2, [20, 20, 0]),
    ObstacleGroupLayout::new(3400, 3, [30, 30, 30]),
    ObstacleGroupLayout::new(3500, 1, [60, 0, 0]),
    ObstacleGroupLayout::new(3600, 2, [20, 60, 0]),
    ObstacleGroupLayout::new(3700, 3, [60, 40, 20]),
    ObstacleGroupLayout::new(3800, 1, [20, 0, 0]),
    ObstacleGroupLayout::new(3900, 2, [40, 60, 0]),
    ObstacleGroupLayout::new(4000, 3, [60, 40, 20]),
    ObstacleGroupLayout::new(4100, 1, [30, 0, 0]),
    ObstacleGroupLayout::new(4200, 2, [30, 30, 0]),
    ObstacleGroupLayout::new(4300, 3, [60, 40, 30]),
];

/// Number of entries in the level table
pub const LEVEL_COUNT: usize = LEVELS.len();

/// Layout at `index`. Callers keep the index in range via [`next_level_index`].
#[inline]
pub fn layout_at(index: usize) -> &'static ObstacleGroupLayout {
    &LEVELS[index]
}

/// Index of the level after `index`, wrapping to 0 after the last one
#[inline]
pub fn next_level_index(index: usize) -> usize {
    (index + 1) % LEVEL_COUNT
}
