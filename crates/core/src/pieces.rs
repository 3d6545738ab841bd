//! Pieces module - spawn layouts and SRS rotation offsets
//!
//! Pieces are not stored as fixed shapes per facing. A rotation turns the four
//! points about the pivot, then the offset tables below compensate for the
//! difference between that raw rotation and the Super Rotation System.
//! Reference: https://tetris.wiki/SRS (the "how guideline SRS really works" tables)
//!
//! Offsets are (row, col) with rows growing downward, normalized so that the
//! first test is always the unkicked rotation.

use log::trace;

use crate::collision::check_collision_points;
use crate::playfield::Playfield;
use crate::types::{Facing, PieceType, Point};

/// Number of kick offsets tried after the unkicked rotation fails
pub const KICK_TESTS: usize = 4;

/// Offsets per facing, indexed `[facing.index()][k]`
pub type OffsetTable = [[Point; KICK_TESTS]; 4];

/// Pivot of every freshly spawned piece
pub const SPAWN_PIVOT: Point = Point::new(19, 4);

const fn p(row: i16, col: i16) -> Point {
    Point::new(row, col)
}

/// I piece offsets
const I_OFFSETS: OffsetTable = [
    // North
    [p(0, -1), p(0, 2), p(0, -1), p(0, 2)],
    // East
    [p(0, 1), p(0, 1), p(-1, 1), p(2, 1)],
    // South
    [p(0, 2), p(0, -1), p(1, 2), p(1, -1)],
    // West
    [p(0, 0), p(0, 0), p(2, 0), p(-1, 0)],
];

/// Offsets shared by T, L, J, S and Z
const JLSTZ_OFFSETS: OffsetTable = [
    // North
    [p(0, 0), p(0, 0), p(0, 0), p(0, 0)],
    // East
    [p(0, 1), p(1, 1), p(-2, 0), p(-2, 1)],
    // South
    [p(0, 0), p(0, 0), p(0, 0), p(0, 0)],
    // West
    [p(0, -1), p(1, -1), p(-2, 0), p(-2, -1)],
];

/// Points of a piece at spawn, facing North
pub fn spawn_points(piece_type: PieceType) -> [Point; 4] {
    match piece_type {
        PieceType::O => [p(18, 4), p(18, 5), p(19, 4), p(19, 5)],
        PieceType::I => [p(19, 3), p(19, 4), p(19, 5), p(19, 6)],
        PieceType::T => [p(18, 4), p(19, 3), p(19, 4), p(19, 5)],
        PieceType::L => [p(18, 5), p(19, 3), p(19, 4), p(19, 5)],
        PieceType::J => [p(18, 3), p(19, 3), p(19, 4), p(19, 5)],
        PieceType::S => [p(18, 4), p(18, 5), p(19, 3), p(19, 4)],
        PieceType::Z => [p(18, 3), p(18, 4), p(19, 4), p(19, 5)],
    }
}

/// Look up one SRS offset.
///
/// # Panics
///
/// The O piece never rotates, so it has no offset table. Asking for one is a bug
/// in the caller and panics.
pub fn srs_offset_value(piece_type: PieceType, facing: Facing, k: usize) -> Point {
    let table = match piece_type {
        PieceType::I => &I_OFFSETS,
        PieceType::T | PieceType::L | PieceType::J | PieceType::S | PieceType::Z => {
            &JLSTZ_OFFSETS
        }
        PieceType::O => panic!("O piece has no SRS offsets"),
    };
    table[facing.index()][k]
}

/// Kick translation for test `k` of a rotation from `before` to `after`
pub fn calculate_srs_offset(piece_type: PieceType, before: Facing, after: Facing, k: usize) -> Point {
    srs_offset_value(piece_type, before, k) - srs_offset_value(piece_type, after, k)
}

/// Find the translation that makes a rotated point set fit.
///
/// `candidate` is the raw rotation (including the I axis correction). Returns
/// `Some(Point::ZERO)` when it already fits, the first kick offset that fits
/// otherwise, or `None` when every test collides.
pub fn resolve_kick(
    piece_type: PieceType,
    candidate: &[Point; 4],
    playfield: &Playfield,
    before: Facing,
    after: Facing,
) -> Option<Point> {
    if check_collision_points(candidate, playfield).is_free() {
        trace!("{:?} {:?}->{:?}: fits unkicked", piece_type, before, after);
        return Some(Point::ZERO);
    }

    for k in 0..KICK_TESTS {
        let offset = calculate_srs_offset(piece_type, before, after, k);
        let kicked = candidate.map(|point| point + offset);
        let result = check_collision_points(&kicked, playfield);
        trace!(
            "{:?} {:?}->{:?}: kick {} {:?} -> {:?}",
            piece_type,
            before,
            after,
            k,
            offset,
            result
        );
        if result.is_free() {
            return Some(offset);
        }
    }

    trace!("{:?} {:?}->{:?}: no kick fits", piece_type, before, after);
    None
}
