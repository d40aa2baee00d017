//! Platform abstraction layer
//!
//! Handles the host side of the game:
//! - Key events and the bounded queue they travel through
//! - Per-frame input draining with a bounded wait
//! - The terminal key reader thread

pub mod input;

pub use input::{
    FrameInput, InputEvent, InputKind, InputQueue, Key, spawn_terminal_reader, translate_key,
};
