//! Tetrimino module - the active piece and its movement
//!
//! A piece is four absolute playfield points plus a pivot. Every move is
//! all-or-nothing: the new point set is built first, checked against the
//! playfield, and committed only when it is free.

use crate::collision::check_collision_points;
use crate::pieces::{resolve_kick, spawn_points, SPAWN_PIVOT};
use crate::playfield::Playfield;
use crate::types::{Facing, PieceType, Point, PLAYFIELD_ROWS};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetrimino {
    pub piece_type: PieceType,
    pub pivot: Point,
    pub points: [Point; 4],
    pub facing: Facing,
}

impl Tetrimino {
    /// Create a new tetrimino at its spawn position, facing North
    pub fn new(piece_type: PieceType) -> Self {
        Self {
            piece_type,
            pivot: SPAWN_PIVOT,
            points: spawn_points(piece_type),
            facing: Facing::North,
        }
    }

    /// Move by `delta` if the destination is free; returns whether it moved
    pub fn translate(&mut self, delta: Point, playfield: &Playfield) -> bool {
        let moved = self.points.map(|point| point + delta);
        if !check_collision_points(&moved, playfield).is_free() {
            return false;
        }
        self.points = moved;
        self.pivot += delta;
        true
    }

    /// Move one row down
    pub fn fall(&mut self, playfield: &Playfield) -> bool {
        self.translate(Point::new(1, 0), playfield)
    }

    pub fn shift_left(&mut self, playfield: &Playfield) -> bool {
        self.translate(Point::new(0, -1), playfield)
    }

    pub fn shift_right(&mut self, playfield: &Playfield) -> bool {
        self.translate(Point::new(0, 1), playfield)
    }

    /// Rotate 90° clockwise with wall kicks
    pub fn rotate_cw(&mut self, playfield: &Playfield) -> bool {
        self.rotate(true, playfield)
    }

    /// Rotate 90° counter-clockwise with wall kicks
    pub fn rotate_ccw(&mut self, playfield: &Playfield) -> bool {
        self.rotate(false, playfield)
    }

    fn rotate(&mut self, clockwise: bool, playfield: &Playfield) -> bool {
        if self.piece_type == PieceType::O {
            return true;
        }

        let before = self.facing;
        let after = if clockwise {
            before.rotate_cw()
        } else {
            before.rotate_ccw()
        };

        let pivot = self.pivot;
        let mut candidate = self.points.map(|point| {
            let rel = point - pivot;
            let turned = if clockwise {
                Point::new(rel.col, -rel.row)
            } else {
                Point::new(-rel.col, rel.row)
            };
            pivot + turned
        });

        // The I piece turns about a point between cells; shift back onto the grid
        if self.piece_type == PieceType::I {
            let correction = if clockwise {
                Point::new(0, 1)
            } else {
                Point::new(1, 0)
            };
            candidate = candidate.map(|point| point + correction);
        }

        let Some(offset) = resolve_kick(self.piece_type, &candidate, playfield, before, after)
        else {
            return false;
        };

        self.points = candidate.map(|point| point + offset);
        self.pivot += offset;
        self.facing = after;
        true
    }

    /// Rows the piece can fall before it rests on a mino or the floor
    pub fn landing_distance(&self, playfield: &Playfield) -> i16 {
        self.points
            .iter()
            .map(|point| {
                let stop = ((point.row + 1)..PLAYFIELD_ROWS as i16)
                    .find(|&row| playfield.is_occupied(Point::new(row, point.col)))
                    .unwrap_or(PLAYFIELD_ROWS as i16);
                stop - point.row - 1
            })
            .min()
            .unwrap_or(0)
            .max(0)
    }

    /// Copy of this piece moved to where a hard drop would put it
    pub fn get_landing(&self, playfield: &Playfield) -> Tetrimino {
        let delta = Point::new(self.landing_distance(playfield), 0);
        Tetrimino {
            pivot: self.pivot + delta,
            points: self.points.map(|point| point + delta),
            ..*self
        }
    }

    /// Move straight down to the landing position in one step
    pub fn hard_drop(&mut self, playfield: &Playfield) -> bool {
        let distance = self.landing_distance(playfield);
        self.translate(Point::new(distance, 0), playfield)
    }

    /// Whether moving one row down would collide
    pub fn is_landed(&self, playfield: &Playfield) -> bool {
        let below = self.points.map(|point| point + Point::new(1, 0));
        !check_collision_points(&below, playfield).is_free()
    }
}
