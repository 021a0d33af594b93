//! Engine module - the frame-driven game state machine
//!
//! The host calls [`Engine::draw_scene`] once per frame with a monotonically
//! increasing timestamp, and forwards player commands through
//! [`Engine::apply_command`] between frames. Everything runs on the caller's
//! thread; nothing here blocks or spawns.
//!
//! Scenes:
//!
//! - **Opening**: blinking title until `Confirm`
//! - **Playing / Falling**: gravity, input, locking, line detection
//! - **Playing / ClearingLines**: full rows blink, then get removed
//! - **GameOver**: blinking title until `Confirm`, which restarts play

use log::{debug, info, trace};

use crate::clock::{Blinker, PhaseClock, Ticker};
use crate::pieces::{rotate_pattern, ActivePiece, Shape};
use crate::rng::SimpleRng;
use crate::stage::Stage;
use crate::surface::Surface;
use crate::types::*;

/// Tunables fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Milliseconds between forced one-row descents
    pub gravity_interval_ms: u64,
    /// Seed for shape selection
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            seed: 1,
        }
    }
}

/// Misuse of the engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// `init` has not attached a surface yet
    SurfaceMissing,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::SurfaceMissing => {
                write!(f, "engine used before init attached a surface")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Outcome of a one-cell translation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Moved,
    Blocked,
    NoPiece,
}

/// The game state machine
#[derive(Debug)]
pub struct Engine<S> {
    surface: Option<S>,
    config: EngineConfig,
    mode: GameMode,
    playing_mode: PlayingMode,
    stage: Stage,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    clock: PhaseClock,
    gravity: Ticker,
    opening_blink: Blinker,
    game_over_blink: Blinker,
    clear_blink: Blinker,
}

impl<S: Surface> Engine<S> {
    /// Create an engine with no surface attached.
    ///
    /// Call [`init`](Self::init) before the first frame.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            surface: None,
            config,
            mode: GameMode::Opening,
            playing_mode: PlayingMode::Falling,
            stage: Stage::new(),
            active: None,
            rng: SimpleRng::new(config.seed),
            clock: PhaseClock::new(),
            gravity: Ticker::new(config.gravity_interval_ms),
            opening_blink: Blinker::new(TITLE_BLINK_INTERVAL_MS),
            game_over_blink: Blinker::new(TITLE_BLINK_INTERVAL_MS),
            clear_blink: Blinker::new(CLEAR_BLINK_INTERVAL_MS),
        }
    }

    /// Attach a surface and restart from the opening scene
    pub fn init(&mut self, surface: S) {
        self.surface = Some(surface);
        self.restart();
    }

    /// Restart from the opening scene on the already attached surface
    pub fn reset(&mut self) -> Result<(), EngineError> {
        if self.surface.is_none() {
            return Err(EngineError::SurfaceMissing);
        }
        self.restart();
        Ok(())
    }

    fn restart(&mut self) {
        self.stage.reset();
        self.active = None;
        self.mode = GameMode::Opening;
        self.playing_mode = PlayingMode::Falling;
        self.clock.reset();
        self.gravity = Ticker::new(self.config.gravity_interval_ms);
        self.opening_blink.reset();
        self.game_over_blink.reset();
        self.clear_blink.reset();
        info!("engine initialised, showing opening scene");
    }

    /// Advance to `timestamp_ms` and render the current scene.
    ///
    /// The first frame after `init` only records the timestamp.
    pub fn draw_scene(&mut self, timestamp_ms: u64) -> Result<(), EngineError> {
        if self.surface.is_none() {
            return Err(EngineError::SurfaceMissing);
        }
        if !self.clock.advance(timestamp_ms) {
            return Ok(());
        }

        let now = self.clock.elapsed_ms();
        let scene = self.mode;
        match scene {
            GameMode::Opening => {
                self.opening_blink.update(now);
            }
            GameMode::Playing => match self.playing_mode {
                PlayingMode::Falling => self.update_falling(now),
                PlayingMode::ClearingLines => self.update_clearing(now),
            },
            GameMode::GameOver => {
                self.game_over_blink.update(now);
            }
        }

        self.render(scene);
        Ok(())
    }

    fn update_falling(&mut self, now: u64) {
        if self.active.is_none() {
            self.spawn_piece(now);
        }

        self.stage.erase_movable();

        if let Some(mut piece) = self.active.take() {
            let prev = piece.offset();
            if self.gravity.due(now) {
                piece.y += 1;
                trace!("gravity tick: {} to row {}", piece.name, piece.y);
            }

            if self.stage.collides(&piece) {
                piece.set_offset(prev);
                self.active = Some(piece);
                self.lock_active();
            } else {
                self.active = Some(piece);
            }
        }

        if let Some(piece) = &self.active {
            self.stage.stamp(piece);
        }

        self.settle_stage(now);
    }

    /// Line detection followed by the game-over test, on the same stage.
    ///
    /// Both run after every lock: a piece can complete a row and reach the
    /// top-bound row in one placement, and the row removal must not hide it.
    fn settle_stage(&mut self, now: u64) {
        self.detect_lines(now);

        if self.stage.top_row_locked() {
            info!("stack reached the top row, game over");
            self.mode = GameMode::GameOver;
        }
    }

    fn update_clearing(&mut self, now: u64) {
        self.clear_blink.update(now);

        self.stage.erase_movable();
        if self.clear_blink.toggles() >= CLEAR_BLINK_COUNT {
            self.clear_blink.clear_toggles();
            let removed = self.stage.delete_cleared_lines();
            debug!("removed {} cleared row(s)", removed);
            self.playing_mode = PlayingMode::Falling;
        }
        if let Some(piece) = &self.active {
            self.stage.stamp(piece);
        }
    }

    fn detect_lines(&mut self, now: u64) {
        let marked = self.stage.mark_full_lines();
        if marked.is_empty() {
            return;
        }
        debug!("full rows marked for clearing: {:?}", marked.as_slice());
        if self.playing_mode != PlayingMode::ClearingLines {
            self.playing_mode = PlayingMode::ClearingLines;
            self.clear_blink.reset();
            self.clear_blink.arm(now);
        }
    }

    fn spawn_piece(&mut self, now: u64) {
        let shape = self.rng.pick_shape();
        self.place_new_piece(shape, now);
    }

    fn place_new_piece(&mut self, shape: &Shape, now: u64) {
        self.active = Some(ActivePiece::spawn(shape));
        self.gravity.arm(now);
        debug!("spawned {} at column {}", shape.name, SPAWN_COL);
    }

    /// Replace the falling piece with a fresh copy of `shape` at the spawn position
    pub fn spawn_shape(&mut self, shape: &Shape) {
        let now = self.clock.elapsed_ms();
        self.place_new_piece(shape, now);
    }

    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.stage.lock(&piece);
        debug!("locked {} at ({}, {})", piece.name, piece.x, piece.y);
    }

    fn translate(&mut self, dx: i32, dy: i32) -> Step {
        let Some(piece) = self.active.as_mut() else {
            return Step::NoPiece;
        };
        let prev = piece.offset();
        piece.set_offset((prev.0 + dx, prev.1 + dy));
        if self.stage.collides(piece) {
            piece.set_offset(prev);
            return Step::Blocked;
        }
        Step::Moved
    }

    /// Shift the piece one column left; returns false when blocked
    pub fn move_left(&mut self) -> bool {
        self.translate(-1, 0) == Step::Moved
    }

    /// Shift the piece one column right; returns false when blocked
    pub fn move_right(&mut self) -> bool {
        self.translate(1, 0) == Step::Moved
    }

    /// Step the piece one row down.
    ///
    /// A blocked step locks the piece where it is and returns false. Any rows
    /// it completes are marked right away, so no new piece spawns until they
    /// have been cleared, and a lock into the top-bound row ends the game.
    pub fn move_down(&mut self) -> bool {
        match self.translate(0, 1) {
            Step::Moved => true,
            Step::Blocked => {
                self.lock_active();
                self.settle_stage(self.clock.elapsed_ms());
                false
            }
            Step::NoPiece => false,
        }
    }

    /// Rotate the piece 90° clockwise in place; a blocked rotation is a no-op
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let prev = piece.pattern;
        piece.pattern = rotate_pattern(&prev);
        if self.stage.collides(piece) {
            piece.pattern = prev;
            return false;
        }
        true
    }

    /// Leave the opening scene
    pub fn go_playing(&mut self) {
        info!("entering play");
        self.mode = GameMode::Playing;
        self.playing_mode = PlayingMode::Falling;
    }

    /// Dispatch one player command.
    ///
    /// Everything is dropped while rows are being cleared. `Confirm` only acts
    /// on the opening and game-over scenes; the rest only act while playing.
    /// Returns true when the command changed something.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.is_clearing_lines() {
            return false;
        }

        match (self.mode, command) {
            (GameMode::Opening, Command::Confirm) => {
                self.go_playing();
                true
            }
            (GameMode::GameOver, Command::Confirm) => {
                self.restart();
                self.go_playing();
                true
            }
            (GameMode::Playing, Command::MoveLeft) => self.move_left(),
            (GameMode::Playing, Command::MoveRight) => self.move_right(),
            (GameMode::Playing, Command::SoftDrop) => {
                let had_piece = self.active.is_some();
                self.move_down() || had_piece
            }
            (GameMode::Playing, Command::Rotate) => self.rotate(),
            _ => false,
        }
    }

    fn render(&mut self, scene: GameMode) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        surface.clear();
        match scene {
            GameMode::Opening => {
                if self.opening_blink.is_on() {
                    surface.fill_text(TextLine::Title, OPENING_TITLE);
                    surface.fill_text(TextLine::Prompt, OPENING_PROMPT);
                }
            }
            GameMode::Playing => {
                let blink_on = self.clear_blink.is_on();
                for (row, cells) in self.stage.rows().iter().enumerate() {
                    for (col, &state) in cells.iter().enumerate() {
                        surface.fill_block(row, col, Paint::for_cell(state, blink_on));
                    }
                }
            }
            GameMode::GameOver => {
                if self.game_over_blink.is_on() {
                    surface.fill_text(TextLine::Title, GAME_OVER_TITLE);
                    surface.fill_text(TextLine::Prompt, GAME_OVER_PROMPT);
                }
            }
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn playing_mode(&self) -> PlayingMode {
        self.playing_mode
    }

    pub fn is_opening(&self) -> bool {
        self.mode == GameMode::Opening
    }

    pub fn is_playing(&self) -> bool {
        self.mode == GameMode::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.mode == GameMode::GameOver
    }

    /// Playing with input frozen while full rows blink
    pub fn is_clearing_lines(&self) -> bool {
        self.mode == GameMode::Playing && self.playing_mode == PlayingMode::ClearingLines
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Direct stage access, for seeding positions
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Phase of the clear-row blink
    pub fn clear_blink_on(&self) -> bool {
        self.clear_blink.is_on()
    }

    /// Whether the opening / game-over text is currently shown
    pub fn title_visible(&self) -> bool {
        match self.mode {
            GameMode::Opening => self.opening_blink.is_on(),
            GameMode::GameOver => self.game_over_blink.is_on(),
            GameMode::Playing => false,
        }
    }

    /// Milliseconds accumulated since the first frame after `init`
    pub fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed_ms()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}

impl<S: Surface> Default for Engine<S> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
