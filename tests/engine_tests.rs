//! Engine tests - frame-driven scenes driven with synthetic timestamps

use tui_tetris_basic::core::{occupied_count, Engine, EngineConfig, RecordingSurface, SHAPES};
use tui_tetris_basic::types::{
    BlockState, Command, GameMode, Paint, PlayingMode, TextLine, GAME_OVER_PROMPT,
    GAME_OVER_TITLE, OPENING_PROMPT, OPENING_TITLE, SPAWN_COL, STAGE_COLS,
};

/// Engine in the Playing scene with its first piece spawned at elapsed 16ms.
fn started_engine() -> Engine<RecordingSurface> {
    let mut engine = Engine::default();
    engine.init(RecordingSurface::new());
    engine.draw_scene(0).unwrap();
    assert!(engine.apply_command(Command::Confirm));
    engine.draw_scene(16).unwrap();
    engine
}

fn fill_row(engine: &mut Engine<RecordingSurface>, row: i32) {
    for col in 1..STAGE_COLS as i32 - 1 {
        engine.stage_mut().set(row, col, BlockState::Locked);
    }
}

#[test]
fn test_opening_scene_blinks_text() {
    let mut engine: Engine<RecordingSurface> = Engine::default();
    engine.init(RecordingSurface::new());
    engine.draw_scene(0).unwrap();
    engine.draw_scene(16).unwrap();

    let surface = engine.surface().unwrap();
    assert_eq!(surface.text(TextLine::Title), Some(OPENING_TITLE));
    assert_eq!(surface.text(TextLine::Prompt), Some(OPENING_PROMPT));

    // One interval later the text is hidden.
    engine.draw_scene(1016).unwrap();
    assert!(!engine.title_visible());
    assert_eq!(engine.surface().unwrap().text(TextLine::Title), None);

    engine.draw_scene(2016).unwrap();
    assert_eq!(engine.surface().unwrap().text(TextLine::Title), Some(OPENING_TITLE));
}

#[test]
fn test_gravity_moves_piece_once_per_interval() {
    let mut engine = started_engine();
    assert_eq!(engine.active().unwrap().y, 0);

    engine.draw_scene(1015).unwrap();
    assert_eq!(engine.active().unwrap().y, 0);

    engine.draw_scene(1016).unwrap();
    assert_eq!(engine.active().unwrap().y, 1);

    engine.draw_scene(2016).unwrap();
    assert_eq!(engine.active().unwrap().y, 2);
}

#[test]
fn test_piece_is_painted_once_per_frame() {
    let mut engine = started_engine();
    for ts in [32, 48, 1016, 1032] {
        engine.draw_scene(ts).unwrap();
        let cells = occupied_count(&engine.active().unwrap().pattern);
        assert_eq!(engine.stage().count(BlockState::Movable), cells);
    }

    engine.move_right();
    engine.rotate();
    engine.draw_scene(1048).unwrap();
    let cells = occupied_count(&engine.active().unwrap().pattern);
    assert_eq!(engine.stage().count(BlockState::Movable), cells);
    assert_eq!(engine.surface().unwrap().count_blocks(Paint::Block), cells);
}

#[test]
fn test_commands_move_and_rotate() {
    let mut engine = started_engine();
    engine.spawn_shape(&SHAPES[6]);

    assert!(engine.apply_command(Command::MoveRight));
    assert_eq!(engine.active().unwrap().x, SPAWN_COL + 1);
    assert!(engine.apply_command(Command::MoveLeft));
    assert_eq!(engine.active().unwrap().x, SPAWN_COL);
    assert!(engine.apply_command(Command::SoftDrop));
    assert_eq!(engine.active().unwrap().y, 1);
    assert!(engine.apply_command(Command::Rotate));
    assert_ne!(engine.active().unwrap().pattern, SHAPES[6].pattern);
    assert!(!engine.apply_command(Command::Confirm));
}

#[test]
fn test_soft_drop_locks_on_floor() {
    let mut engine = started_engine();
    engine.spawn_shape(&SHAPES[1]);

    while engine.move_down() {}
    assert!(engine.active().is_none());
    // O occupies window rows 1..=2, so it rests on the floor at rows 19..=20.
    assert_eq!(engine.stage().get(20, SPAWN_COL + 1), Some(BlockState::Locked));
    assert_eq!(engine.stage().get(19, SPAWN_COL + 2), Some(BlockState::Locked));
    assert_eq!(engine.stage().count(BlockState::Locked), 4);

    // Next frame spawns a new piece.
    engine.draw_scene(32).unwrap();
    assert!(engine.active().is_some());
}

#[test]
fn test_full_row_blinks_then_is_removed() {
    let mut engine = started_engine();
    fill_row(&mut engine, 20);
    engine.stage_mut().set(19, 2, BlockState::Locked);

    engine.draw_scene(32).unwrap();
    assert!(engine.is_clearing_lines());
    assert!(engine.stage().is_row_marked(20));

    // Input is frozen while rows blink.
    let before = engine.active().cloned();
    assert!(!engine.apply_command(Command::MoveLeft));
    assert!(!engine.apply_command(Command::Rotate));
    assert_eq!(engine.active().cloned(), before);

    engine.draw_scene(282).unwrap();
    assert!(!engine.clear_blink_on());
    engine.draw_scene(300).unwrap();
    assert_eq!(
        engine.surface().unwrap().block(20, 1),
        Some(Paint::Effect2)
    );

    engine.draw_scene(532).unwrap();
    assert_eq!(
        engine.surface().unwrap().block(20, 1),
        Some(Paint::Effect1)
    );
    engine.draw_scene(782).unwrap();
    assert_eq!(engine.playing_mode(), PlayingMode::ClearingLines);

    engine.draw_scene(1032).unwrap();
    assert_eq!(engine.playing_mode(), PlayingMode::Falling);
    assert_eq!(engine.stage().count(BlockState::Clear), 0);
    // The lone cell above dropped into the cleared row.
    assert_eq!(engine.stage().get(20, 2), Some(BlockState::Locked));
    assert_eq!(engine.stage().count(BlockState::Locked), 1);

    assert!(engine.apply_command(Command::MoveRight));
}

#[test]
fn test_manual_lock_completing_row_waits_for_clear() {
    let mut engine = started_engine();
    // I is a vertical bar in window column 1; leave that column open on row 20.
    fill_row(&mut engine, 20);
    engine.stage_mut().set(20, SPAWN_COL + 1, BlockState::Empty);
    engine.spawn_shape(&SHAPES[0]);

    while engine.move_down() {}
    assert!(engine.is_clearing_lines());
    assert!(engine.stage().is_row_marked(20));

    engine.draw_scene(32).unwrap();
    assert!(engine.active().is_none());
}

/// Vertical bar at the spawn position whose landing both completes row 3 and
/// leaves a locked cell in the top-bound row.
fn top_out_with_line(engine: &mut Engine<RecordingSurface>) {
    let bar_col = SPAWN_COL + 1;
    fill_row(engine, 3);
    engine.stage_mut().set(3, bar_col, BlockState::Empty);
    engine.stage_mut().set(4, bar_col, BlockState::Locked);
    engine.spawn_shape(&SHAPES[0]);
}

#[test]
fn test_manual_lock_into_top_row_with_line_ends_game() {
    let mut engine = started_engine();
    top_out_with_line(&mut engine);

    assert!(!engine.move_down());
    assert!(engine.stage().is_row_marked(3));
    assert_eq!(engine.mode(), GameMode::GameOver);

    // Well past the clear animation, the game is still over.
    for ts in (32..=2_032).step_by(250) {
        engine.draw_scene(ts).unwrap();
    }
    assert_eq!(engine.mode(), GameMode::GameOver);
    assert!(engine.stage().top_row_locked());
    assert_eq!(
        engine.surface().unwrap().text(TextLine::Title),
        Some(GAME_OVER_TITLE)
    );
}

#[test]
fn test_gravity_lock_into_top_row_with_line_ends_game() {
    let mut engine = started_engine();
    top_out_with_line(&mut engine);

    // The gravity step collides and locks the bar in place.
    engine.draw_scene(1016).unwrap();
    assert!(engine.active().is_none());
    assert!(engine.stage().is_row_marked(3));
    assert_eq!(engine.mode(), GameMode::GameOver);

    for ts in (1_032..=3_032).step_by(250) {
        engine.draw_scene(ts).unwrap();
    }
    assert_eq!(engine.mode(), GameMode::GameOver);
    assert!(engine.stage().top_row_locked());
}

#[test]
fn test_game_over_and_restart() {
    let mut engine = started_engine();
    engine.stage_mut().set(0, 1, BlockState::Locked);

    engine.draw_scene(32).unwrap();
    assert_eq!(engine.mode(), GameMode::GameOver);

    engine.draw_scene(48).unwrap();
    let surface = engine.surface().unwrap();
    assert_eq!(surface.text(TextLine::Title), Some(GAME_OVER_TITLE));
    assert_eq!(surface.text(TextLine::Prompt), Some(GAME_OVER_PROMPT));

    assert!(!engine.apply_command(Command::MoveLeft));
    assert!(engine.apply_command(Command::Confirm));
    assert_eq!(engine.mode(), GameMode::Playing);
    assert_eq!(engine.playing_mode(), PlayingMode::Falling);
    assert!(!engine.stage().top_row_locked());
    assert!(engine.active().is_none());

    // Fresh clock: the first frame after restart only records the timestamp.
    engine.draw_scene(5_000).unwrap();
    assert!(engine.active().is_none());
    engine.draw_scene(5_016).unwrap();
    assert_eq!(engine.active().unwrap().offset(), (SPAWN_COL, 0));
}

#[test]
fn test_same_seed_same_shapes() {
    let config = EngineConfig {
        seed: 99,
        ..EngineConfig::default()
    };
    let mut a: Engine<RecordingSurface> = Engine::new(config);
    let mut b: Engine<RecordingSurface> = Engine::new(config);
    for engine in [&mut a, &mut b] {
        engine.init(RecordingSurface::new());
        engine.draw_scene(0).unwrap();
        engine.apply_command(Command::Confirm);
    }

    let mut ts = 16;
    for _ in 0..10 {
        a.draw_scene(ts).unwrap();
        b.draw_scene(ts).unwrap();
        assert_eq!(a.active().map(|p| p.name), b.active().map(|p| p.name));
        while a.move_down() {}
        while b.move_down() {}
        ts += 16;
    }
}

#[test]
fn test_reset_returns_to_opening() {
    let mut engine = started_engine();
    fill_row(&mut engine, 10);
    engine.reset().unwrap();
    assert!(engine.is_opening());
    assert_eq!(engine.stage().count(BlockState::Locked), 0);
    assert_eq!(engine.elapsed_ms(), 0);
}
