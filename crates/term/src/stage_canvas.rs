//! StageCanvas: a [`Surface`] backed by a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Surface;
use crate::fb::{FrameBuffer, Glyph};
use crate::palette::Palette;
use crate::types::{Paint, TextLine, STAGE_COLS, STAGE_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Draws engine scenes into a framebuffer sized to the terminal.
#[derive(Debug, Clone)]
pub struct StageCanvas {
    fb: FrameBuffer,
    palette: Palette,
    /// Stage block width in terminal columns.
    cell_w: u16,
    origin_x: u16,
    origin_y: u16,
}

impl StageCanvas {
    /// Canvas with 2-column blocks, which roughly squares typical terminal glyphs.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_cell_width(viewport, 2)
    }

    pub fn with_cell_width(viewport: Viewport, cell_w: u16) -> Self {
        let mut canvas = Self {
            fb: FrameBuffer::new(viewport.width, viewport.height),
            palette: Palette::default(),
            cell_w: cell_w.max(1),
            origin_x: 0,
            origin_y: 0,
        };
        canvas.layout();
        canvas
    }

    /// Follow a terminal resize; the next frame redraws everything.
    pub fn resize(&mut self, viewport: Viewport) {
        self.fb.resize(viewport.width, viewport.height);
        self.layout();
    }

    fn layout(&mut self) {
        let stage_w = STAGE_COLS as u16 * self.cell_w;
        let stage_h = STAGE_ROWS as u16;
        self.origin_x = self.fb.width().saturating_sub(stage_w) / 2;
        self.origin_y = self.fb.height().saturating_sub(stage_h) / 2;
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Terminal position of the stage's top-left block.
    pub fn origin(&self) -> (u16, u16) {
        (self.origin_x, self.origin_y)
    }
}

impl Surface for StageCanvas {
    fn clear(&mut self) {
        self.fb.clear(Glyph::default());
    }

    fn fill_block(&mut self, row: usize, col: usize, paint: Paint) {
        let x = self.origin_x.saturating_add(col as u16 * self.cell_w);
        let y = self.origin_y.saturating_add(row as u16);
        self.fb
            .fill_rect(x, y, self.cell_w, 1, self.palette.glyph(paint));
    }

    fn fill_text(&mut self, line: TextLine, text: &str) {
        let mid = self.fb.height() / 2;
        match line {
            TextLine::Title => {
                let y = mid.saturating_sub(1);
                self.fb.put_str_centered(y, text, self.palette.text.bold());
            }
            TextLine::Prompt => {
                self.fb
                    .put_str_centered(mid.saturating_add(1), text, self.palette.text);
            }
        }
    }
}
