//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the frame-driven state machine.
//! It has **no dependencies** on terminals, input devices or wall clocks:
//!
//! - **Deterministic**: Same seed and timestamps produce identical games
//! - **Testable**: Every rule can be driven with synthetic timestamps
//! - **Portable**: Renders through the small [`Surface`] trait, so any backend works
//!
//! # Module Structure
//!
//! - [`stage`]: 23x12 grid with wall border, collision, locking, line marking and removal
//! - [`pieces`]: Shape catalog and 4x4 pattern rotation
//! - [`engine`]: Opening / Playing / GameOver state machine and command dispatch
//! - [`clock`]: Elapsed-time bookkeeping, interval tickers and blinkers
//! - [`rng`]: Uniform, seedable shape selection
//! - [`surface`]: Drawing collaborator trait plus a recording implementation
//!
//! # Game Rules
//!
//! - **Gravity**: One row per second, no acceleration
//! - **Locking**: A piece locks as soon as a downward step collides
//! - **Rotation**: 90° clockwise in place, no wall kicks
//! - **Line clear**: Full rows blink for one second, then are removed
//! - **Game over**: A locked cell in the top row
//!
//! # Example
//!
//! ```
//! use tui_tetris_basic_core::{Engine, RecordingSurface};
//! use tui_tetris_basic_types::{Command, GameMode};
//!
//! let mut engine = Engine::default();
//! engine.init(RecordingSurface::new());
//!
//! // The first frame only records the timestamp.
//! engine.draw_scene(0).unwrap();
//! engine.apply_command(Command::Confirm);
//! engine.draw_scene(16).unwrap();
//!
//! assert_eq!(engine.mode(), GameMode::Playing);
//! assert!(engine.active().is_some());
//! ```

pub mod clock;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod stage;
pub mod surface;

pub use tui_tetris_basic_types as types;

// Re-export commonly used types for convenience
pub use clock::{Blinker, PhaseClock, Ticker};
pub use engine::{Engine, EngineConfig, EngineError};
pub use pieces::{occupied_count, rotate_pattern, ActivePiece, Pattern, Shape, SHAPES};
pub use rng::SimpleRng;
pub use stage::{MarkedRows, Stage, INTERIOR_COLS, PLAYABLE_ROWS};
pub use surface::{DrawOp, RecordingSurface, Surface};
