//! Point module - integer (row, col) vector on the playfield
//!
//! Rows grow downward (row 0 is the top of the hidden buffer), columns grow to the right.

use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A cell position or an offset between two cell positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i16,
    pub col: i16,
}

impl Point {
    /// The zero offset.
    pub const ZERO: Point = Point::new(0, 0);

    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.row -= rhs.row;
        self.col -= rhs.col;
    }
}

impl From<(i16, i16)> for Point {
    fn from((row, col): (i16, i16)) -> Self {
        Self::new(row, col)
    }
}
