//! Tri Jump entry point
//!
//! Sets up the terminal, starts the input reader and runs the frame loop:
//! drain input, tick once, draw.

use std::io::{self, BufWriter, Write, stdout};

use crossterm::{ExecutableCommand, cursor, terminal};

use tri_jump::Settings;
use tri_jump::platform::{FrameInput, InputQueue, spawn_terminal_reader};
use tri_jump::renderer::{TerminalCanvas, draw_frame};
use tri_jump::sim::{GameState, TickEvents, step_frame};

fn init_logging(level: Option<&str>) {
    let default_filter = level.unwrap_or("warn");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> io::Result<()> {
    // The log level comes from the settings file, so read it before logging starts
    let path = Settings::default_path();
    let loaded = Settings::load_from(&path);
    init_logging(loaded.as_ref().ok().and_then(|s| s.log_level.as_deref()));
    log::info!("Tri Jump starting...");
    let settings = Settings::or_default(&path, loaded);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let (tx, queue) = InputQueue::channel();
    let _reader = spawn_terminal_reader(tx);

    let result = run(&mut out, &queue, &settings);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(state) => log::info!(
            "Tri Jump exiting (last score {} after {} ticks)",
            state.score,
            state.time_ticks
        ),
        Err(e) => log::error!("Tri Jump stopped: {}", e),
    }
    result.map(|_| ())
}

/// Frame loop; returns the game in progress when the player quits
fn run<W: Write>(out: &mut W, queue: &InputQueue, settings: &Settings) -> io::Result<GameState> {
    let mut state = GameState::new();
    let mut canvas = TerminalCanvas::new(out);
    clear_screen(&mut canvas)?;

    loop {
        let input = FrameInput::drain(queue, settings.frame_duration());
        if input.quit {
            break;
        }

        let events = step_frame(&mut state, input.jump, settings.restart_on_jump);
        log_events(&state, &events);

        let snap = state.snapshot();
        draw_frame(&mut canvas, &snap, settings.credit());
        canvas.present()?;
    }

    Ok(state)
}

/// Report what the last tick changed
fn log_events(state: &GameState, events: &TickEvents) {
    if events.jumped {
        log::trace!("Jump on tick {}", state.time_ticks);
    }
    if events.level_advanced {
        log::debug!("Level {} (score {})", state.level_index, state.score);
    }
    if events.sped_up {
        log::debug!("Score {}: speed now {:.1}", state.score, state.speed);
    }
    if events.credit_started {
        log::debug!("Credit banner started on tick {}", state.time_ticks);
    }
    if events.collided && log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(state) {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Cannot dump final state: {}", e),
        }
    }
}

fn clear_screen<W: Write>(canvas: &mut TerminalCanvas<W>) -> io::Result<()> {
    canvas
        .writer()
        .execute(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}
