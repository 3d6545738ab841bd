//! Collision module - classify a point (or a piece) against the playfield
//!
//! A result is a set of flags: an empty set means the position is free.

use bitflags::bitflags;

use crate::playfield::Playfield;
use crate::types::{Point, PLAYFIELD_COLS, PLAYFIELD_ROWS};

bitflags! {
    /// Why a position is not free
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionResult: u8 {
        /// Column outside 0..=9
        const WALL = 0b0001;
        /// Row below the bottom of the playfield
        const FLOOR = 0b0010;
        /// Target cell already holds a locked mino
        const MINO = 0b0100;
        /// Row above the top of the hidden buffer
        const CEILING = 0b1000;
    }
}

impl CollisionResult {
    /// Shorthand for `is_empty()`
    #[inline]
    pub fn is_free(self) -> bool {
        self.is_empty()
    }
}

/// Classify a single point against the playfield
pub fn check_collision(point: Point, playfield: &Playfield) -> CollisionResult {
    let mut result = CollisionResult::empty();

    if point.col < 0 || point.col as usize >= PLAYFIELD_COLS {
        result |= CollisionResult::WALL;
    }
    if point.row as isize >= PLAYFIELD_ROWS as isize {
        result |= CollisionResult::FLOOR;
    }
    if point.row < 0 {
        result |= CollisionResult::CEILING;
    }
    if result.is_empty() && playfield.is_occupied(point) {
        result |= CollisionResult::MINO;
    }

    result
}

/// Union of the collision results of four points
pub fn check_collision_points(points: &[Point; 4], playfield: &Playfield) -> CollisionResult {
    points
        .iter()
        .fold(CollisionResult::empty(), |acc, &point| {
            acc | check_collision(point, playfield)
        })
}
