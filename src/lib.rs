//! TUI Tetris Basic (workspace facade crate).
//!
//! Re-exports the member crates under short module names so binaries, tests
//! and benches can write `tui_tetris_basic::core::Engine` and friends. Also
//! hosts the runtime configuration read by the terminal runner.

pub mod config;

pub use tui_tetris_basic_core as core;
pub use tui_tetris_basic_input as input;
pub use tui_tetris_basic_term as term;
pub use tui_tetris_basic_types as types;

pub use config::AppConfig;
