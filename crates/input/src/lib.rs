//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. The engine
//! consumes one command per key press; terminal auto-repeat simply produces
//! more presses, so no repeat handling lives here.

pub mod map;

pub use tui_tetris_basic_types as types;

pub use map::{command_for_key, handle_key_event, should_quit};
