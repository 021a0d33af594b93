//! Stage module - the persistent grid of cell states
//!
//! The stage is a 23x12 grid addressed `[row][col]`. Columns 0 and 11 and the
//! two bottom rows are walls that gameplay never mutates. Row 0 is the
//! top-bound row: it is never scanned for full lines, and a locked cell there
//! ends the game.
//!
//! Pieces are painted into the stage as `Movable` every frame and erased again
//! before the next one, so collision tests only ever see one frame of paint.

use arrayvec::ArrayVec;

use crate::pieces::ActivePiece;
use crate::types::{BlockState, FLOOR_ROWS, STAGE_COLS, STAGE_ROWS};

/// Rows above the floor (top-bound row included)
pub const PLAYABLE_ROWS: usize = STAGE_ROWS - FLOOR_ROWS;

/// Number of columns between the side walls
pub const INTERIOR_COLS: usize = STAGE_COLS - 2;

/// Rows marked for removal in a single detection pass
pub type MarkedRows = ArrayVec<usize, STAGE_ROWS>;

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    cells: [[BlockState; STAGE_COLS]; STAGE_ROWS],
}

impl Stage {
    /// Create a stage from the fixed template (wall border, empty interior)
    pub fn new() -> Self {
        Self {
            cells: template(),
        }
    }

    /// Restore the template in place
    pub fn reset(&mut self) {
        self.cells = template();
    }

    pub fn width(&self) -> usize {
        STAGE_COLS
    }

    pub fn height(&self) -> usize {
        STAGE_ROWS
    }

    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<(usize, usize)> {
        if row < 0 || col < 0 || row >= STAGE_ROWS as i32 || col >= STAGE_COLS as i32 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Get cell at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<BlockState> {
        Self::index(row, col).map(|(r, c)| self.cells[r][c])
    }

    /// Set cell at `(row, col)`
    /// Returns false if out of bounds or if either side of the write is a wall
    pub fn set(&mut self, row: i32, col: i32, state: BlockState) -> bool {
        let Some((r, c)) = Self::index(row, col) else {
            return false;
        };
        if self.cells[r][c] == BlockState::Wall || state == BlockState::Wall {
            return false;
        }
        self.cells[r][c] = state;
        true
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[[BlockState; STAGE_COLS]; STAGE_ROWS] {
        &self.cells
    }

    /// Number of cells in the given state
    pub fn count(&self, state: BlockState) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == state).count()
    }

    /// Test whether the piece overlaps anything that blocks it.
    ///
    /// Only cells ranked above `Movable` block, so the piece's own paint from
    /// the current frame never collides with itself. Occupied cells outside the
    /// grid count as wall.
    pub fn collides(&self, piece: &ActivePiece) -> bool {
        piece.cells().any(|(row, col)| match self.get(row, col) {
            Some(state) => state.blocks_piece(),
            None => true,
        })
    }

    /// Reset every `Movable` cell to `Empty`
    pub fn erase_movable(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if *cell == BlockState::Movable {
                *cell = BlockState::Empty;
            }
        }
    }

    /// Paint the piece's footprint as `Movable`
    pub fn stamp(&mut self, piece: &ActivePiece) {
        for (row, col) in piece.cells() {
            self.set(row, col, BlockState::Movable);
        }
    }

    /// Write the piece's footprint as `Locked`
    pub fn lock(&mut self, piece: &ActivePiece) {
        for (row, col) in piece.cells() {
            self.set(row, col, BlockState::Locked);
        }
    }

    /// Check if every interior cell of a row is locked
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= STAGE_ROWS {
            return false;
        }
        self.cells[row][1..STAGE_COLS - 1]
            .iter()
            .filter(|&&c| c == BlockState::Locked)
            .count()
            == INTERIOR_COLS
    }

    /// Mark every full row as `Clear`.
    ///
    /// Scans rows `1..=STAGE_ROWS - 3`, skipping the top-bound row and the floor.
    /// Returns the marked rows, top to bottom; empty when nothing was found.
    pub fn mark_full_lines(&mut self) -> MarkedRows {
        let mut marked = MarkedRows::new();
        for row in 1..PLAYABLE_ROWS {
            if self.is_row_full(row) {
                for cell in &mut self.cells[row][1..STAGE_COLS - 1] {
                    *cell = BlockState::Clear;
                }
                marked.push(row);
            }
        }
        marked
    }

    /// Whether a row is marked for removal (judged by its first interior column)
    pub fn is_row_marked(&self, row: usize) -> bool {
        row < STAGE_ROWS && self.cells[row][1] == BlockState::Clear
    }

    /// Remove every marked row and let the rows above fall into place.
    ///
    /// Single bottom-up compaction over the playable rows; vacated rows at the
    /// top come back empty. Returns the number of rows removed.
    pub fn delete_cleared_lines(&mut self) -> usize {
        let mut write = PLAYABLE_ROWS;
        for read in (0..PLAYABLE_ROWS).rev() {
            if self.is_row_marked(read) {
                continue;
            }
            write -= 1;
            if write != read {
                self.cells[write] = self.cells[read];
            }
        }

        let removed = write;
        for row in &mut self.cells[..write] {
            for cell in &mut row[1..STAGE_COLS - 1] {
                *cell = BlockState::Empty;
            }
        }
        removed
    }

    /// Game-over condition: a locked cell in the top-bound row
    pub fn top_row_locked(&self) -> bool {
        self.cells[0][1..STAGE_COLS - 1]
            .iter()
            .any(|&c| c == BlockState::Locked)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The fixed initial grid: side walls, a two-row floor, empty interior
fn template() -> [[BlockState; STAGE_COLS]; STAGE_ROWS] {
    let mut cells = [[BlockState::Empty; STAGE_COLS]; STAGE_ROWS];
    for (r, row) in cells.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if c == 0 || c == STAGE_COLS - 1 || r >= PLAYABLE_ROWS {
                *cell = BlockState::Wall;
            }
        }
    }
    cells
}
