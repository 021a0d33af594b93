//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Stage Dimensions
//!
//! The stage is a fixed 23x12 grid addressed `[row][col]`:
//!
//! - **Row 0**: top-bound row; a locked cell here ends the game
//! - **Rows 1..=20**: playable rows scanned for full lines
//! - **Rows 21..=22**: floor (wall)
//! - **Columns 0 and 11**: side walls
//! - **Spawn position**: column `STAGE_COLS / 3`, row 0
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 1000 | One forced row of descent per interval |
//! | `CLEAR_BLINK_INTERVAL_MS` | 250 | Blink period of rows pending removal |
//! | `CLEAR_BLINK_COUNT` | 4 | Toggles before cleared rows are removed |
//! | `TITLE_BLINK_INTERVAL_MS` | 1000 | Opening / game-over text flicker |
//! | `FRAME_MS` | 16 | Default host frame period (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_tetris_basic_types::{BlockState, STAGE_COLS, STAGE_ROWS};
//!
//! // Locked and wall cells rank above the transient piece paint.
//! assert!(BlockState::Locked > BlockState::Movable);
//! assert!(BlockState::Wall > BlockState::Movable);
//!
//! assert_eq!(STAGE_ROWS, 23);
//! assert_eq!(STAGE_COLS, 12);
//! ```

/// Stage height in cells, including the top-bound row and the two floor rows
pub const STAGE_ROWS: usize = 23;

/// Stage width in cells, including both side walls
pub const STAGE_COLS: usize = 12;

/// Number of rows making up the floor at the bottom of the stage
pub const FLOOR_ROWS: usize = 2;

/// Side of the square window every piece pattern lives in
pub const PATTERN_SIZE: usize = 4;

/// Column where new pieces appear (top-left of the pattern window)
pub const SPAWN_COL: i32 = (STAGE_COLS / 3) as i32;

/// Row where new pieces appear (top-left of the pattern window)
pub const SPAWN_ROW: i32 = 0;

/// Gravity interval (1000ms = 1 row per second)
pub const GRAVITY_INTERVAL_MS: u64 = 1000;

/// Blink period for rows marked for removal
pub const CLEAR_BLINK_INTERVAL_MS: u64 = 250;

/// Number of blink toggles before marked rows are deleted (two full cycles)
pub const CLEAR_BLINK_COUNT: u32 = 4;

/// Flicker period for the opening and game-over text
pub const TITLE_BLINK_INTERVAL_MS: u64 = 1000;

/// Default host frame period (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Opening scene title
pub const OPENING_TITLE: &str = "Tetris Basic";

/// Opening scene prompt
pub const OPENING_PROMPT: &str = "Press 'Enter' to start";

/// Game-over scene title
pub const GAME_OVER_TITLE: &str = "Game Over";

/// Game-over scene prompt
pub const GAME_OVER_PROMPT: &str = "Press 'Enter' to continue";

/// State of a single stage cell
///
/// The discriminants are ordered on purpose: anything ranked above
/// [`BlockState::Movable`] blocks a falling piece. The piece's own paint and
/// empty space never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum BlockState {
    #[default]
    Empty = 0,
    /// Footprint of the active piece for the current frame only
    Movable = 1,
    Locked = 2,
    /// Part of a full row waiting for removal
    Clear = 3,
    Wall = 9,
}

impl BlockState {
    /// Whether a piece cell landing here is a collision
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tetris_basic_types::BlockState;
    ///
    /// assert!(!BlockState::Empty.blocks_piece());
    /// assert!(!BlockState::Movable.blocks_piece());
    /// assert!(BlockState::Locked.blocks_piece());
    /// assert!(BlockState::Wall.blocks_piece());
    /// ```
    #[inline(always)]
    pub fn blocks_piece(self) -> bool {
        self > BlockState::Movable
    }

    /// Single-character form, handy for debugging and test fixtures
    pub fn as_char(self) -> char {
        match self {
            BlockState::Empty => '.',
            BlockState::Movable => 'o',
            BlockState::Locked => '#',
            BlockState::Clear => '=',
            BlockState::Wall => '|',
        }
    }
}

/// Top-level scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Opening,
    Playing,
    GameOver,
}

/// Sub-mode, only meaningful while [`GameMode::Playing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayingMode {
    /// A piece falls under gravity and accepts input
    #[default]
    Falling,
    /// Full rows blink before removal; input is frozen
    ClearingLines,
}

/// Player commands, already translated from physical keys by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot go further
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Leave the opening or game-over scene
    Confirm,
}

/// Logical colours the engine asks its surface to paint with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    Back,
    Block,
    Lock,
    /// First phase of the clear-row blink
    Effect1,
    /// Second phase of the clear-row blink
    Effect2,
    Wall,
}

impl Paint {
    /// Paint for a stage cell, given the clear-row blink phase
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tetris_basic_types::{BlockState, Paint};
    ///
    /// assert_eq!(Paint::for_cell(BlockState::Clear, true), Paint::Effect1);
    /// assert_eq!(Paint::for_cell(BlockState::Clear, false), Paint::Effect2);
    /// assert_eq!(Paint::for_cell(BlockState::Wall, false), Paint::Wall);
    /// ```
    pub fn for_cell(state: BlockState, blink_on: bool) -> Self {
        match state {
            BlockState::Empty => Paint::Back,
            BlockState::Movable => Paint::Block,
            BlockState::Locked => Paint::Lock,
            BlockState::Clear if blink_on => Paint::Effect1,
            BlockState::Clear => Paint::Effect2,
            BlockState::Wall => Paint::Wall,
        }
    }
}

/// Text slots of the opening and game-over scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextLine {
    /// Large centred heading
    Title,
    /// Smaller line directly beneath the title
    Prompt,
}
