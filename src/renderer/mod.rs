//! Rendering module
//!
//! The game draws through the [`Canvas`] trait, a small set of monochrome
//! primitives on a 128x64 screen. [`draw_frame`] maps a [`Snapshot`] onto those
//! primitives; [`terminal::TerminalCanvas`] is the canvas the binary uses.

pub mod shapes;
pub mod terminal;

pub use terminal::TerminalCanvas;

use glam::IVec2;

use crate::consts::*;
use crate::sim::Snapshot;

/// Drawing surface. Coordinates are screen pixels, y grows downward.
pub trait Canvas {
    fn clear(&mut self);
    fn draw_line(&mut self, from: IVec2, to: IVec2);
    /// Filled box with its top-left corner at `pos`
    fn draw_box(&mut self, pos: IVec2, size: IVec2);
    fn draw_triangle(&mut self, points: [IVec2; 3]);
    /// Text whose baseline starts at `pos`
    fn draw_str(&mut self, pos: IVec2, text: &str);
}

/// Text positions (baseline)
const SCORE_POS: IVec2 = IVec2::new(5, 10);
const CREDIT_Y: i32 = 20;
const GAME_OVER_POS: IVec2 = IVec2::new(40, 30);
const FINAL_SCORE_POS: IVec2 = IVec2::new(40, 40);

/// Score label shown in the HUD and on the game-over overlay
pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// Draw one complete frame. `credit` is the banner text, if enabled.
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, snap: &Snapshot, credit: Option<&str>) {
    canvas.clear();

    // Ground
    canvas.draw_line(
        IVec2::new(0, GROUND_LEVEL),
        IVec2::new(SCREEN_WIDTH, GROUND_LEVEL),
    );

    // Player
    canvas.draw_box(snap.player.pos, snap.player.size);

    // Obstacles: base on the ground, apex centred
    for rect in snap.obstacles() {
        canvas.draw_triangle([
            IVec2::new(rect.left(), rect.bottom()),
            IVec2::new(rect.left() + OBSTACLE_WIDTH / 2, rect.top()),
            IVec2::new(rect.right(), rect.bottom()),
        ]);
    }

    canvas.draw_str(SCORE_POS, &score_label(snap.score));

    if let Some(text) = credit {
        if snap.credit_visible {
            canvas.draw_str(IVec2::new(snap.credit_x, CREDIT_Y), text);
        }
    }

    if snap.game_over {
        canvas.draw_str(GAME_OVER_POS, "Game Over!");
        canvas.draw_str(FINAL_SCORE_POS, &score_label(snap.score));
    }
}
