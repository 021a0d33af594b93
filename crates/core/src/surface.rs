//! Surface module - the drawing collaborator the engine renders into
//!
//! The engine only knows stage coordinates and logical paints. Mapping those
//! to pixels, terminal cells or anything else is the surface's business.

use crate::types::{Paint, TextLine};

/// Primitive drawing operations required by the engine
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self);

    /// Fill the block at stage coordinates `(row, col)`
    fn fill_block(&mut self, row: usize, col: usize, paint: Paint);

    /// Draw horizontally centred text in one of the scene text slots
    fn fill_text(&mut self, line: TextLine, text: &str);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn fill_block(&mut self, row: usize, col: usize, paint: Paint) {
        (**self).fill_block(row, col, paint);
    }

    fn fill_text(&mut self, line: TextLine, text: &str) {
        (**self).fill_text(line, text);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn fill_block(&mut self, row: usize, col: usize, paint: Paint) {
        (**self).fill_block(row, col, paint);
    }

    fn fill_text(&mut self, line: TextLine, text: &str) {
        (**self).fill_text(line, text);
    }
}

/// One primitive call captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Block { row: usize, col: usize, paint: Paint },
    Text { line: TextLine, text: String },
}

/// Headless surface that keeps the draw calls of the latest frame.
///
/// `clear` starts a new frame, so after a scene is drawn `ops()` holds
/// exactly what that scene produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls since the last `clear`
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of frames started so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Text drawn into the given slot during the latest frame
    pub fn text(&self, line: TextLine) -> Option<&str> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Text { line: l, text } if *l == line => Some(text.as_str()),
            _ => None,
        })
    }

    /// Paint of the block drawn at `(row, col)` during the latest frame
    pub fn block(&self, row: usize, col: usize) -> Option<Paint> {
        self.ops.iter().rev().find_map(|op| match *op {
            DrawOp::Block { row: r, col: c, paint } if r == row && c == col => Some(paint),
            _ => None,
        })
    }

    /// Number of blocks drawn with the given paint during the latest frame
    pub fn count_blocks(&self, paint: Paint) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Block { paint: p, .. } if *p == paint))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
        self.frames += 1;
    }

    fn fill_block(&mut self, row: usize, col: usize, paint: Paint) {
        self.ops.push(DrawOp::Block { row, col, paint });
    }

    fn fill_text(&mut self, line: TextLine, text: &str) {
        self.ops.push(DrawOp::Text {
            line,
            text: text.to_string(),
        });
    }
}
