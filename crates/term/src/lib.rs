//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. The engine draws through
//! [`StageCanvas`], which implements the core `Surface` trait on top of a
//! framebuffer; [`TerminalRenderer`] then flushes that framebuffer.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Redraw only what changed between frames
//! - Square-ish blocks (2 chars wide per stage cell)

pub mod fb;
pub mod palette;
pub mod renderer;
pub mod stage_canvas;

pub use tui_tetris_basic_core as core;
pub use tui_tetris_basic_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use palette::Palette;
pub use renderer::{dirty_rows, encode_frame_into, TerminalRenderer};
pub use stage_canvas::{StageCanvas, Viewport};
