use tui_tetris_basic::core::{Engine, Surface};
use tui_tetris_basic::term::{dirty_rows, encode_frame_into, Palette, StageCanvas, Viewport};
use tui_tetris_basic::types::{BlockState, Command, STAGE_COLS, STAGE_ROWS};

fn playing_canvas_engine(vp: Viewport) -> Engine<StageCanvas> {
    let mut engine = Engine::default();
    engine.init(StageCanvas::new(vp));
    engine.draw_scene(0).unwrap();
    engine.apply_command(Command::Confirm);
    engine
}

#[test]
fn term_canvas_draws_walls_and_locked_cells() {
    // 12 blocks * 2 columns = 24 wide, 23 rows: the stage fills the viewport exactly.
    let vp = Viewport::new(24, 23);
    let mut engine = playing_canvas_engine(vp);
    engine.stage_mut().set(20, 1, BlockState::Locked);
    engine.draw_scene(16).unwrap();

    let palette = Palette::default();
    let fb = engine.surface().unwrap().framebuffer();

    // Left wall, bottom-right floor corner.
    assert_eq!(fb.get(0, 5), Some(palette.wall));
    assert_eq!(fb.get(1, 5), Some(palette.wall));
    let last_x = STAGE_COLS as u16 * 2 - 1;
    assert_eq!(fb.get(last_x, STAGE_ROWS as u16 - 1), Some(palette.wall));

    // Locked cell at row 20, column 1 spans screen columns 2..=3.
    assert_eq!(fb.get(2, 20), Some(palette.lock));
    assert_eq!(fb.get(3, 20), Some(palette.lock));
    assert_eq!(fb.get(4, 20), Some(palette.back));
}

#[test]
fn term_canvas_opening_text_is_centred() {
    let vp = Viewport::new(40, 20);
    let mut engine: Engine<StageCanvas> = Engine::default();
    engine.init(StageCanvas::new(vp));
    engine.draw_scene(0).unwrap();
    engine.draw_scene(16).unwrap();

    let fb = engine.surface().unwrap().framebuffer();
    let title = fb.row_text(9);
    assert_eq!(title.trim(), "Tetris Basic");
    let start = title.find('T').unwrap();
    assert_eq!(start, (40 - "Tetris Basic".len()) / 2);
    assert_eq!(fb.row_text(11).trim(), "Press 'Enter' to start");
}

#[test]
fn term_canvas_resize_recentres_stage() {
    let mut canvas = StageCanvas::new(Viewport::new(24, 23));
    assert_eq!(canvas.origin(), (0, 0));
    canvas.resize(Viewport::new(44, 33));
    assert_eq!(canvas.origin(), (10, 5));
    assert_eq!(canvas.framebuffer().width(), 44);
}

#[test]
fn term_only_changed_rows_are_redrawn() {
    let vp = Viewport::new(24, 23);
    let mut engine = playing_canvas_engine(vp);
    engine.draw_scene(16).unwrap();
    let before = engine.surface().unwrap().framebuffer().clone();

    // Nothing moves until gravity fires.
    engine.draw_scene(32).unwrap();
    let same = engine.surface().unwrap().framebuffer();
    assert!(dirty_rows(Some(&before), same).is_empty());

    engine.stage_mut().set(20, 5, BlockState::Locked);
    engine.draw_scene(48).unwrap();
    let after = engine.surface().unwrap().framebuffer();
    assert_eq!(dirty_rows(Some(&before), after), vec![20]);

    let mut out = Vec::new();
    encode_frame_into(Some(&before), after, &mut out).unwrap();
    assert!(!out.is_empty());
}

#[test]
fn term_first_frame_is_fully_redrawn() {
    let mut canvas = StageCanvas::new(Viewport::new(24, 23));
    canvas.clear();
    let rows = dirty_rows(None, canvas.framebuffer());
    assert_eq!(rows.len(), 23);
}
