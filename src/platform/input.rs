//! Keyboard input
//!
//! A producer thread pushes [`InputEvent`]s into a bounded queue; the frame
//! loop drains it once per frame with a bounded wait. Only presses matter:
//! the jump key is edge-triggered and the back key ends the game loop.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Queue slots between the reader thread and the frame loop
pub const QUEUE_CAPACITY: usize = 8;

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Jump,
    Back,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub kind: InputKind,
}

impl InputEvent {
    pub fn press(key: Key) -> Self {
        Self {
            key,
            kind: InputKind::Press,
        }
    }
}

/// Receiving end of the bounded input queue
pub struct InputQueue {
    rx: Receiver<InputEvent>,
}

impl InputQueue {
    /// Create the queue and the sender its producer uses
    pub fn channel() -> (SyncSender<InputEvent>, Self) {
        let (tx, rx) = mpsc::sync_channel(QUEUE_CAPACITY);
        (tx, Self { rx })
    }
}

/// Everything the frame loop needs from one frame's worth of input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Jump pressed at least once during the frame
    pub jump: bool,
    /// Back pressed, or the producer went away
    pub quit: bool,
}

impl FrameInput {
    /// Collect events until `frame` has elapsed.
    ///
    /// Several presses in one frame still make a single jump edge. Returns
    /// early on quit so the loop can exit without waiting out the frame.
    pub fn drain(queue: &InputQueue, frame: Duration) -> Self {
        let deadline = Instant::now() + frame;
        let mut input = Self::default();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match queue.rx.recv_timeout(remaining) {
                Ok(event) => {
                    input.apply(event);
                    if input.quit {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    log::warn!("Input source closed");
                    input.quit = true;
                    break;
                }
            }
        }

        input
    }

    fn apply(&mut self, event: InputEvent) {
        if event.kind != InputKind::Press {
            return;
        }
        match event.key {
            Key::Jump => self.jump = true,
            Key::Back => self.quit = true,
            Key::Other => {}
        }
    }
}

/// Map a terminal key event onto the game's keys
pub fn translate_key(key: &KeyEvent) -> InputEvent {
    let mapped = match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Key::Back
        }
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Enter
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Key::Jump,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') | KeyCode::Char('Q') => Key::Back,
        _ => Key::Other,
    };
    let kind = match key.kind {
        KeyEventKind::Press => InputKind::Press,
        KeyEventKind::Repeat => InputKind::Repeat,
        KeyEventKind::Release => InputKind::Release,
    };
    InputEvent { key: mapped, kind }
}

/// Spawn the thread that reads terminal events and feeds the queue.
///
/// It blocks when the queue is full and stops once the receiver is dropped.
pub fn spawn_terminal_reader(tx: SyncSender<InputEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(translate_key(&key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Terminal input error: {}", e);
                    break;
                }
            }
        }
    })
}
