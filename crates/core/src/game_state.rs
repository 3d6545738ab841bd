//! Game state module - one game's playfield, pieces, score and level
//!
//! Ties together the playfield, the bag, the active piece and leveling. It
//! knows nothing about time: gravity, lock delay and pause live in the layer
//! that drives it tick by tick.

use std::time::Duration;

use log::debug;

use crate::collision::check_collision_points;
use crate::playfield::Playfield;
use crate::rng::Bag;
use crate::scoring::{calculate_line_score, drop_interval, LevelProgress};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetrimino::Tetrimino;
use crate::types::{Command, PieceType, MAX_PREVIEW_SIZE};

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct Game {
    playfield: Playfield,
    bag: Bag,
    active: Tetrimino,
    progress: LevelProgress,
    score: u64,
}

impl Game {
    /// Start a game with an entropy-seeded bag
    pub fn new() -> Self {
        Self::from_bag(Bag::new())
    }

    /// Start a game whose piece sequence is fixed by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::from_bag(Bag::with_seed(seed))
    }

    fn from_bag(mut bag: Bag) -> Self {
        let active = bag.pop();
        Self {
            playfield: Playfield::new(),
            bag,
            active,
            progress: LevelProgress::new(),
            score: 0,
        }
    }

    /// Replace the active piece with the next one from the bag
    pub fn draw_new_tetrimino(&mut self) {
        self.active = self.bag.pop();
    }

    /// Write the active piece's cells into the playfield
    pub fn lock_active_tetrimino(&mut self) {
        let piece = self.active;
        debug!(
            "lock {:?} {:?} at {:?}",
            piece.piece_type, piece.facing, piece.points
        );
        self.playfield.lock_cells(&piece.points, piece.piece_type);
    }

    /// Remove full rows, then update score and level.
    ///
    /// Returns the number of rows removed.
    pub fn clear_rows(&mut self) -> usize {
        let cleared = self.playfield.clear_full_rows().len();
        if cleared == 0 {
            return 0;
        }

        let points = calculate_line_score(cleared, self.progress.level());
        self.score = self.score.saturating_add(points);
        debug!(
            "cleared {} rows at level {}: +{} (score {})",
            cleared,
            self.progress.level(),
            points,
            self.score
        );

        if self.progress.record_rows(cleared) {
            debug!(
                "level up to {} (next at {} rows)",
                self.progress.level(),
                self.progress.threshold()
            );
        }

        cleared
    }

    /// Whether the active piece overlaps locked cells or leaves the grid (block out)
    pub fn is_game_over(&self) -> bool {
        !check_collision_points(&self.active.points, &self.playfield).is_free()
    }

    /// Gravity interval at the current level
    pub fn drop_interval(&self) -> Duration {
        drop_interval(self.progress.level())
    }

    /// Apply a movement command to the active piece.
    ///
    /// Returns whether the piece moved. Non-movement commands return false.
    pub fn apply_command(&mut self, command: Command) -> bool {
        let playfield = &self.playfield;
        let active = &mut self.active;
        match command {
            Command::ShiftLeft => active.shift_left(playfield),
            Command::ShiftRight => active.shift_right(playfield),
            Command::RotateCcw => active.rotate_ccw(playfield),
            Command::RotateCw => active.rotate_cw(playfield),
            Command::SoftDrop => active.fall(playfield),
            Command::HardDrop => active.hard_drop(playfield),
            Command::DoNothing | Command::Pause | Command::Quit | Command::Restart => false,
        }
    }

    /// Move the active piece down one row (gravity)
    pub fn fall(&mut self) -> bool {
        self.active.fall(&self.playfield)
    }

    /// Whether the active piece rests on something
    pub fn is_landed(&self) -> bool {
        self.active.is_landed(&self.playfield)
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Direct playfield access for setting up positions
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn active(&self) -> &Tetrimino {
        &self.active
    }

    /// Replace the active piece (setting up positions)
    pub fn set_active(&mut self, piece: Tetrimino) {
        self.active = piece;
    }

    /// Ghost piece: the active piece at its landing position
    pub fn landing(&self) -> Tetrimino {
        self.active.get_landing(&self.playfield)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn rows_cleared(&self) -> u32 {
        self.progress.rows_cleared()
    }

    /// The next `n` piece types, next first
    pub fn preview(&self, n: usize) -> impl Iterator<Item = PieceType> + '_ {
        self.bag.peek(n).map(|piece| piece.piece_type)
    }

    /// Fill `out` with this game's state. Session-level fields (pause,
    /// placement) are left untouched.
    pub fn snapshot_into(&self, out: &mut GameSnapshot, preview_size: u8) {
        for (row, cells) in out.playfield.iter_mut().zip(self.playfield.rows()) {
            row.copy_from_slice(cells);
        }

        out.active = Some(ActiveSnapshot::from(self.active));
        out.ghost = Some(self.landing().points);
        out.preview.clear();
        out.preview
            .extend(self.preview(usize::from(preview_size.min(MAX_PREVIEW_SIZE))));
        out.score = self.score;
        out.level = self.level();
        out.rows_cleared = self.rows_cleared();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self, preview_size: u8) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s, preview_size);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
