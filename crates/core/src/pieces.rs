//! Pieces module - shape catalog and pattern rotation
//!
//! Every shape is described by a 4x4 occupancy pattern. The window is fixed
//! regardless of the true bounding box of the shape; unused cells are zero.
//! The catalog is read-only: spawning and rotating always work on an owned copy.

use crate::types::{PATTERN_SIZE, SPAWN_COL, SPAWN_ROW};

/// 4x4 occupancy matrix, `[row][col]`, 1 = occupied
pub type Pattern = [[u8; PATTERN_SIZE]; PATTERN_SIZE];

/// A named entry of the shape catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub pattern: Pattern,
}

/// The fixed catalog of shapes a new piece is drawn from
pub static SHAPES: [Shape; 7] = [
    Shape {
        name: "I",
        pattern: [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
    },
    Shape {
        name: "O",
        pattern: [[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    },
    Shape {
        name: "S",
        pattern: [[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
    },
    Shape {
        name: "Z",
        pattern: [[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    },
    Shape {
        name: "J",
        pattern: [[0, 0, 1, 0], [0, 0, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    },
    Shape {
        name: "L",
        pattern: [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    },
    Shape {
        name: "T",
        pattern: [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    },
];

/// Rotate a pattern 90° clockwise: `new[i][j] = old[3 - j][i]`
pub fn rotate_pattern(pattern: &Pattern) -> Pattern {
    let mut rotated = [[0u8; PATTERN_SIZE]; PATTERN_SIZE];
    for (i, row) in rotated.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = pattern[PATTERN_SIZE - 1 - j][i];
        }
    }
    rotated
}

/// Number of occupied cells in a pattern
pub fn occupied_count(pattern: &Pattern) -> usize {
    pattern.iter().flatten().filter(|&&v| v != 0).count()
}

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub name: &'static str,
    pub pattern: Pattern,
    /// Column of the pattern window's left edge
    pub x: i32,
    /// Row of the pattern window's top edge
    pub y: i32,
}

impl ActivePiece {
    /// Create a piece from a catalog shape at the spawn position
    pub fn spawn(shape: &Shape) -> Self {
        Self {
            name: shape.name,
            // `Pattern` is `Copy`, so this is already a fresh owned copy.
            pattern: shape.pattern,
            x: SPAWN_COL,
            y: SPAWN_ROW,
        }
    }

    /// Stage coordinates `(row, col)` of every occupied pattern cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.pattern.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &v)| v != 0)
                .map(move |(j, _)| (self.y + i as i32, self.x + j as i32))
        })
    }

    /// Offset as `(x, y)`
    pub fn offset(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_offset(&mut self, (x, y): (i32, i32)) {
        self.x = x;
        self.y = y;
    }
}
