//! Fixed step simulation tick
//!
//! Advances the game by exactly one frame. Step order matters: the jump
//! impulse lands before gravity, and collisions use the post-move position.

use super::collision::{is_on_screen, player_hits_obstacle};
use super::levels::{layout_at, next_level_index};
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::ground_rest_y;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key was pressed since the last tick
    pub jump: bool,
}

/// What happened during a tick. Informational only; the state already
/// reflects all of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub jumped: bool,
    pub collided: bool,
    pub level_advanced: bool,
    pub sped_up: bool,
    pub credit_started: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    // Terminal phase: nothing moves until a reset
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    // Jump (grounded only; requests made mid-air are dropped)
    if input.jump {
        state.jump_requested = true;
    }
    if state.jump_requested {
        if state.is_grounded() {
            state.player_vy = JUMP_FORCE;
            events.jumped = true;
        }
        state.jump_requested = false;
    }

    // Gravity: velocity first, then position with the new velocity
    state.player_vy += GRAVITY * state.speed;
    state.player_y += state.player_vy * state.speed;

    // Ground clamp
    if state.player_y + PLAYER_SIZE as f32 > GROUND_LEVEL as f32 {
        state.player_y = ground_rest_y();
        state.player_vy = 0.0;
    }

    // Scroll; truncates toward zero like an integer position should
    state.group_x = (state.group_x as f32 - OBSTACLE_SPEED * state.speed) as i32;

    // Collisions against the on-screen part of the active group
    let hit = state
        .obstacle_rects()
        .filter(is_on_screen)
        .any(|rect| player_hits_obstacle(state.player_y, &rect));
    if hit {
        state.phase = GamePhase::GameOver;
        events.collided = true;
        log::info!(
            "Game over after {} ticks: score {}, level {}, speed {:.1}",
            state.time_ticks,
            state.score,
            state.level_index,
            state.speed
        );
    }

    // Level advance once the whole group plus clearance is past the left edge
    let layout = state.current_layout();
    if state.group_x + layout.group_span() < 0 {
        state.level_index = next_level_index(state.level_index);
        state.group_x = layout_at(state.level_index).spawn_x;
        state.score += 1;
        events.level_advanced = true;

        if state.score % SPEEDUP_EVERY == 0 {
            state.speed += SPEEDUP_STEP;
            events.sped_up = true;
        }
    }

    // Credit banner
    if state.score >= CREDIT_SCORE {
        events.credit_started = state.credit.trigger();
    }
    state.credit.advance();

    events
}

/// One host frame: restart a finished game if asked, then exactly one tick.
///
/// A jump that restarts the game is spent on the restart, so the first tick
/// of the new game runs without it.
pub fn step_frame(state: &mut GameState, jump: bool, restart_on_jump: bool) -> TickEvents {
    let mut input = TickInput { jump };
    if jump && restart_on_jump && state.is_game_over() {
        log::info!("Restarting after game over (score {})", state.score);
        state.reset();
        input.jump = false;
    }
    tick(state, &input)
}
