//! Terminal Tetris Basic runner (default binary).
//!
//! Drives the engine from a fixed-period frame loop: poll crossterm input
//! until the next frame is due, forward mapped commands, then advance the
//! engine with the elapsed milliseconds and flush the canvas.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, warn};

use tui_tetris_basic::core::Engine;
use tui_tetris_basic::input::{handle_key_event, should_quit};
use tui_tetris_basic::term::{StageCanvas, TerminalRenderer, Viewport};
use tui_tetris_basic::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {e}");
    }
    result
}

fn init_logging(config: &AppConfig) -> Result<()> {
    // The terminal is in raw mode on the alternate screen, so logs only go to a file.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut engine = Engine::new(config.engine_config());
    engine.init(StageCanvas::new(Viewport::new(w, h)));
    info!("starting with seed {} and {}ms frames", config.seed, config.frame_ms);

    let started = Instant::now();
    let mut last_tick = started;
    let tick_duration = Duration::from_millis(config.frame_ms);

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        engine.apply_command(command);
                    }
                }
                Event::Resize(w, h) => {
                    if let Some(canvas) = engine.surface_mut() {
                        canvas.resize(Viewport::new(w, h));
                    }
                    term.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now_ms = started.elapsed().as_millis() as u64;
            engine.draw_scene(now_ms)?;
            if let Some(canvas) = engine.surface() {
                term.present(canvas.framebuffer())?;
            }
        }
    }
}
