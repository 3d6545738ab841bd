//! Snapshot module - read-only view of a game handed to frontends each tick
//!
//! Frontends render from a snapshot and never touch live game state. The
//! buffers are fixed-size, so `snapshot_into` can refill one snapshot every
//! tick without allocating.

use arrayvec::ArrayVec;

use crate::placement::PlacementController;
use crate::tetrimino::Tetrimino;
use crate::types::{
    Cell, Facing, PieceType, Point, MAX_PREVIEW_SIZE, PLAYFIELD_COLS, PLAYFIELD_ROWS,
    VISIBLE_ROW_START,
};

/// Upcoming piece types, next first
pub type Preview = ArrayVec<PieceType, { MAX_PREVIEW_SIZE as usize }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub piece_type: PieceType,
    pub facing: Facing,
    pub pivot: Point,
    pub points: [Point; 4],
}

impl From<Tetrimino> for ActiveSnapshot {
    fn from(value: Tetrimino) -> Self {
        Self {
            piece_type: value.piece_type,
            facing: value.facing,
            pivot: value.pivot,
            points: value.points,
        }
    }
}

/// Lock-delay view of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlacementSnapshot {
    pub resting: bool,
    pub moves_used: u8,
}

impl From<&PlacementController> for PlacementSnapshot {
    fn from(value: &PlacementController) -> Self {
        Self {
            resting: value.is_resting(),
            moves_used: value.moves_used(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub playfield: [[Cell; PLAYFIELD_COLS]; PLAYFIELD_ROWS],
    pub active: Option<ActiveSnapshot>,
    /// Where the active piece would land
    pub ghost: Option<[Point; 4]>,
    pub preview: Preview,
    pub score: u64,
    pub level: u32,
    pub rows_cleared: u32,
    pub paused: bool,
    pub game_over: bool,
    pub placement: PlacementSnapshot,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.playfield = [[None; PLAYFIELD_COLS]; PLAYFIELD_ROWS];
        self.active = None;
        self.ghost = None;
        self.preview.clear();
        self.score = 0;
        self.level = 1;
        self.rows_cleared = 0;
        self.paused = false;
        self.game_over = false;
        self.placement = PlacementSnapshot::default();
    }

    /// Rows a frontend normally draws (the hidden buffer is skipped)
    pub fn visible_rows(&self) -> &[[Cell; PLAYFIELD_COLS]] {
        &self.playfield[VISIBLE_ROW_START..]
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            playfield: [[None; PLAYFIELD_COLS]; PLAYFIELD_ROWS],
            active: None,
            ghost: None,
            preview: Preview::new(),
            score: 0,
            level: 1,
            rows_cleared: 0,
            paused: false,
            game_over: false,
            placement: PlacementSnapshot::default(),
        };
        s.clear();
        s
    }
}
