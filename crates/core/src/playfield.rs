//! Playfield module - the fixed 40x10 grid of locked cells
//!
//! Each cell is empty (`None`) or holds the type of the piece that locked there.
//! Uses a flat array for cache locality; the grid never resizes.
//! Coordinates are (row, col): row 0..39 top to bottom, col 0..9 left to right.
//! Rows 0..18 are the hidden buffer above the visible area.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceType, Point, PLAYFIELD_COLS, PLAYFIELD_ROWS};

/// Total number of cells on the playfield
const PLAYFIELD_SIZE: usize = PLAYFIELD_COLS * PLAYFIELD_ROWS;

/// Row indices removed by a single [`Playfield::clear_full_rows`] call
pub type ClearedRows = ArrayVec<usize, PLAYFIELD_ROWS>;

/// The playfield grid, row-major flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Playfield {
    cells: [Cell; PLAYFIELD_SIZE],
}

impl Playfield {
    pub const ROWS: usize = PLAYFIELD_ROWS;
    pub const COLS: usize = PLAYFIELD_COLS;

    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            cells: [None; PLAYFIELD_SIZE],
        }
    }

    /// Flat index of a point, `None` when outside the grid
    #[inline(always)]
    fn index(point: Point) -> Option<usize> {
        if Self::contains(point) {
            Some(point.row as usize * PLAYFIELD_COLS + point.col as usize)
        } else {
            None
        }
    }

    /// Whether the point lies inside the grid
    #[inline(always)]
    pub fn contains(point: Point) -> bool {
        point.row >= 0
            && (point.row as usize) < PLAYFIELD_ROWS
            && point.col >= 0
            && (point.col as usize) < PLAYFIELD_COLS
    }

    /// Get the cell at a point, `None` if out of bounds
    pub fn get(&self, point: Point) -> Option<Cell> {
        Self::index(point).map(|idx| self.cells[idx])
    }

    /// Set the cell at a point; returns false if out of bounds
    pub fn set(&mut self, point: Point, cell: Cell) -> bool {
        match Self::index(point) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the point is inside the grid and filled
    pub fn is_occupied(&self, point: Point) -> bool {
        matches!(self.get(point), Some(Some(_)))
    }

    /// One row of cells, `None` if the row index is out of range
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= PLAYFIELD_ROWS {
            return None;
        }
        let start = row * PLAYFIELD_COLS;
        Some(&self.cells[start..start + PLAYFIELD_COLS])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(PLAYFIELD_COLS)
    }

    /// Lowest free row in a column: the row directly above the highest filled cell,
    /// or the bottom row when the column is empty.
    ///
    /// Returns `None` for an out-of-range column or a column filled up to row 0.
    pub fn column_base(&self, col: i16) -> Option<i16> {
        if col < 0 || col as usize >= PLAYFIELD_COLS {
            return None;
        }
        let top_filled =
            (0..PLAYFIELD_ROWS as i16).find(|&row| self.is_occupied(Point::new(row, col)));
        match top_filled {
            Some(0) => None,
            Some(row) => Some(row - 1),
            None => Some(PLAYFIELD_ROWS as i16 - 1),
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Check if a row is completely empty
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_none()))
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Returns the removed row indices in bottom-to-top scan order (indices refer to the
    /// grid before any shifting). Two-pointer pass, no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_row = PLAYFIELD_ROWS;

        for read_row in (0..PLAYFIELD_ROWS).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * PLAYFIELD_COLS;
                    let dst = write_row * PLAYFIELD_COLS;
                    self.cells.copy_within(src..src + PLAYFIELD_COLS, dst);
                }
            }
        }

        // Rows that shifted away from the top are now empty
        for cell in &mut self.cells[..write_row * PLAYFIELD_COLS] {
            *cell = None;
        }

        cleared_rows
    }

    /// Write four cells tagged with a piece type.
    ///
    /// Points outside the grid are skipped; returns false if any was.
    pub fn lock_cells(&mut self, points: &[Point; 4], piece_type: PieceType) -> bool {
        let mut all_inside = true;
        for &point in points {
            all_inside &= self.set(point, Some(piece_type));
        }
        all_inside
    }

    /// Flat view of all cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire playfield
    pub fn clear(&mut self) {
        self.cells = [None; PLAYFIELD_SIZE];
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
