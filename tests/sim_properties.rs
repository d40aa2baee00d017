//! Property tests for the simulation step

use proptest::prelude::*;

use tri_jump::consts::*;
use tri_jump::sim::{GamePhase, GameState, LEVEL_COUNT, TickInput, layout_at, tick};

/// Put the active group where the next tick clears it
fn park_group_for_clear(state: &mut GameState) {
    state.group_x = -state.current_layout().group_span();
}

/// Play a sequence of jump/no-jump frames from a fresh game
fn play(jumps: &[bool]) -> GameState {
    let mut state = GameState::new();
    for &jump in jumps {
        tick(&mut state, &TickInput { jump });
    }
    state
}

fn inputs(max: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..max)
}

proptest! {
    #[test]
    fn game_over_tick_is_noop(jumps in inputs(300), more in inputs(20)) {
        let mut state = play(&jumps);
        state.phase = GamePhase::GameOver;
        let before = state.clone();
        for jump in more {
            let events = tick(&mut state, &TickInput { jump });
            prop_assert!(!events.jumped && !events.level_advanced);
        }
        prop_assert_eq!(state, before);
    }

    #[test]
    fn player_never_below_ground(jumps in inputs(400)) {
        let mut state = GameState::new();
        for jump in jumps {
            tick(&mut state, &TickInput { jump });
            prop_assert!(state.player_y + PLAYER_SIZE as f32 <= GROUND_LEVEL as f32);
            if state.is_grounded() {
                prop_assert_eq!(state.player_vy, 0.0);
            }
        }
    }

    #[test]
    fn airborne_jump_has_no_effect(jumps in inputs(300)) {
        let state = play(&jumps);
        prop_assume!(!state.is_grounded() && !state.is_game_over());

        let mut with_jump = state.clone();
        let mut without = state.clone();
        tick(&mut with_jump, &TickInput { jump: true });
        tick(&mut without, &TickInput { jump: false });
        prop_assert_eq!(with_jump, without);
    }

    #[test]
    fn score_moves_only_on_level_advance(jumps in inputs(400)) {
        let mut state = GameState::new();
        for jump in jumps {
            let score = state.score;
            let events = tick(&mut state, &TickInput { jump });
            prop_assert_eq!(state.score, score + events.level_advanced as u32);
            if events.collided {
                prop_assert!(!events.level_advanced);
            }
        }
    }

    #[test]
    fn advances_drive_level_and_speed(n in 0usize..130) {
        let mut state = GameState::new();
        for i in 1..=n {
            let speed = state.speed;
            park_group_for_clear(&mut state);
            let events = tick(&mut state, &TickInput::default());
            prop_assert!(events.level_advanced);
            if i % 10 == 0 {
                prop_assert!(events.sped_up);
                prop_assert!((state.speed - (speed + SPEEDUP_STEP)).abs() < 1e-6);
            } else {
                prop_assert!(!events.sped_up);
                prop_assert_eq!(state.speed, speed);
            }
        }
        prop_assert_eq!(state.score as usize, n);
        prop_assert_eq!(state.level_index, n % LEVEL_COUNT);
        prop_assert_eq!(state.group_x, layout_at(n % LEVEL_COUNT).spawn_x);
        let expected_speed = 1.0 + SPEEDUP_STEP * (n / 10) as f32;
        prop_assert!((state.speed - expected_speed).abs() < 1e-4);
    }

    #[test]
    fn credit_latch_is_permanent(extra in 0usize..400) {
        let mut state = GameState::new();
        for _ in 0..CREDIT_SCORE {
            park_group_for_clear(&mut state);
            tick(&mut state, &TickInput::default());
        }
        prop_assert!(state.credit.shown);

        let mut starts = 0;
        for _ in 0..extra {
            // Keep obstacles away so the game keeps running
            state.group_x = 10_000;
            let events = tick(&mut state, &TickInput::default());
            starts += events.credit_started as u32;
            prop_assert!(state.credit.shown);
        }
        prop_assert_eq!(starts, 0);
        if extra >= 115 {
            prop_assert!(!state.credit.visible);
        }
    }
}

#[test]
fn thousand_idle_ticks_far_from_obstacles() {
    let mut state = GameState::new();
    state.group_x = 100_000;
    for _ in 0..1000 {
        tick(&mut state, &TickInput::default());
    }
    assert_eq!(state.player_y, (GROUND_LEVEL - PLAYER_SIZE) as f32);
    assert_eq!(state.player_vy, 0.0);
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.group_x, 98_000);
}

#[test]
fn single_jump_from_reset() {
    let mut state = GameState::new();
    state.reset();
    let events = tick(&mut state, &TickInput { jump: true });
    assert!(events.jumped);
    assert!(!state.jump_requested);
    // The impulse replaced the resting velocity before gravity was applied
    assert_eq!(state.player_vy, JUMP_FORCE + GRAVITY);
}

#[test]
fn reset_after_game_over_runs_again() {
    let mut state = play(&[false; 200]);
    assert!(state.is_game_over());
    state.reset();
    assert_eq!(state.phase, GamePhase::Running);
    tick(&mut state, &TickInput::default());
    assert_eq!(state.time_ticks, 1);
}
