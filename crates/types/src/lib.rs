//! Core types module - shared data structures and constants
//!
//! This crate defines the value types exchanged between the simulation core and
//! whatever frontend drives it (input polling, rendering). Everything here is plain
//! data: no game rules, no I/O.
//!
//! # Playfield Dimensions
//!
//! - **Columns**: 10 (indexed 0-9)
//! - **Rows**: 40 (indexed 0-39, row 0 at the top)
//! - **Hidden buffer**: rows 0-18; the visible area starts at row 19
//! - **Spawn rows**: 18-19, columns 3-6
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_DURATION` | 1/60 s | Fixed simulation frame |
//! | `LOCK_DELAY` | 0.5 s | Extended placement window of a resting piece |
//! | `EXTENDED_PLACEMENT_MAX_MOVES` | 15 | Successful moves allowed while resting |
//!
//! # Gravity by Level
//!
//! Seconds per row: `(0.8 - (level - 1) * 0.007) ^ (level - 1)`
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1.000s |
//! | 2 | 0.793s |
//! | 5 | 0.355s |
//! | 10 | 0.064s |
//! | 15 | 0.007s |
//!
//! # Examples
//!
//! ```
//! use tetrimino_types::{Command, Facing, PieceType, PLAYFIELD_COLS, PLAYFIELD_ROWS};
//!
//! assert_eq!(PieceType::from_str("t"), Some(PieceType::T));
//! assert_eq!(Facing::North.rotate_cw(), Facing::East);
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(PLAYFIELD_COLS, 10);
//! assert_eq!(PLAYFIELD_ROWS, 40);
//! ```

use std::time::Duration;

use thiserror::Error;

pub mod point;

pub use point::Point;

/// Playfield width in cells
pub const PLAYFIELD_COLS: usize = 10;

/// Playfield height in cells, hidden buffer included
pub const PLAYFIELD_ROWS: usize = 40;

/// First row of the visible area (rows above it form the hidden buffer)
pub const VISIBLE_ROW_START: usize = 19;

/// Length of one simulation frame (1/60 s)
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// How long a resting piece may stay unlocked after its last successful move
pub const LOCK_DELAY: Duration = Duration::from_millis(500);

/// Maximum number of successful moves/rotations while resting
pub const EXTENDED_PLACEMENT_MAX_MOVES: u8 = 15;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 15;

/// Rows per level added to the level-up threshold (`threshold += level * 5`)
pub const LEVEL_UP_ROWS_FACTOR: u32 = 5;

/// Base of the gravity curve, seconds per row at level 1 is `BASE_DROP_FACTOR ^ 0`
pub const BASE_DROP_FACTOR: f64 = 0.8;

/// Per-level speed-up subtracted from `BASE_DROP_FACTOR`
pub const LEVEL_SPEED_UP: f64 = 0.007;

/// Score multipliers indexed by rows cleared in a single call (times the level)
pub const ROW_CLEAR_MULTIPLIERS: [u64; 5] = [0, 100, 300, 500, 800];

/// Number of pieces in one randomizer bag
pub const BAG_SIZE: usize = 7;

/// Largest preview a frontend may request
pub const MAX_PREVIEW_SIZE: u8 = 6;

/// The seven tetrimino types
///
/// An empty playfield cell is `None` in a [`Cell`], so there is no "none" piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    O,
    I,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceType {
    /// All piece types, in canonical bag order
    pub const ALL: [PieceType; BAG_SIZE] = [
        PieceType::O,
        PieceType::I,
        PieceType::T,
        PieceType::L,
        PieceType::J,
        PieceType::S,
        PieceType::Z,
    ];

    /// Parse piece type from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_types::PieceType;
    ///
    /// assert_eq!(PieceType::from_str("i"), Some(PieceType::I));
    /// assert_eq!(PieceType::from_str("Z"), Some(PieceType::Z));
    /// assert_eq!(PieceType::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceType::O),
            "i" => Some(PieceType::I),
            "t" => Some(PieceType::T),
            "l" => Some(PieceType::L),
            "j" => Some(PieceType::J),
            "s" => Some(PieceType::S),
            "z" => Some(PieceType::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceType::O => "o",
            PieceType::I => "i",
            PieceType::T => "t",
            PieceType::L => "l",
            PieceType::J => "j",
            PieceType::S => "s",
            PieceType::Z => "z",
        }
    }
}

/// A playfield cell: `None` when empty, otherwise the type of the piece locked there
pub type Cell = Option<PieceType>;

/// Facing of a piece
///
/// The rotation cycle goes: North → East → South → West → North (clockwise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_types::Facing;
    ///
    /// assert_eq!(Facing::North.rotate_cw(), Facing::East);
    /// assert_eq!(Facing::West.rotate_cw(), Facing::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    /// Ordinal used to index per-facing tables
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Commands a frontend delivers to the simulation, one per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// No input this tick
    #[default]
    DoNothing,
    /// Toggle pause
    Pause,
    /// End the game immediately
    Quit,
    /// Discard the game and start a new one
    Restart,
    /// Move piece one column left
    ShiftLeft,
    /// Move piece one column right
    ShiftRight,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Move piece one row down
    SoftDrop,
    /// Drop piece to its landing position and lock it
    HardDrop,
}

impl Command {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_types::Command;
    ///
    /// assert_eq!(Command::from_str("shiftLeft"), Some(Command::ShiftLeft));
    /// assert_eq!(Command::from_str("ROTATECW"), Some(Command::RotateCw));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "donothing" => Some(Command::DoNothing),
            "pause" => Some(Command::Pause),
            "quit" => Some(Command::Quit),
            "restart" => Some(Command::Restart),
            "shiftleft" => Some(Command::ShiftLeft),
            "shiftright" => Some(Command::ShiftRight),
            "rotateccw" => Some(Command::RotateCcw),
            "rotatecw" => Some(Command::RotateCw),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::DoNothing => "doNothing",
            Command::Pause => "pause",
            Command::Quit => "quit",
            Command::Restart => "restart",
            Command::ShiftLeft => "shiftLeft",
            Command::ShiftRight => "shiftRight",
            Command::RotateCcw => "rotateCcw",
            Command::RotateCw => "rotateCw",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
        }
    }

    /// Whether this command manipulates the active piece
    pub fn moves_piece(&self) -> bool {
        matches!(
            self,
            Command::ShiftLeft
                | Command::ShiftRight
                | Command::RotateCcw
                | Command::RotateCw
                | Command::SoftDrop
                | Command::HardDrop
        )
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndType {
    GameOver,
    Quit,
    Restart,
}

/// Settings chosen by the frontend at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSettings {
    /// Whether pieces fall (and lock) on their own
    pub gravity: bool,
    /// Number of upcoming pieces shown to the player; does not affect simulation
    pub preview_size: u8,
}

impl GameSettings {
    /// Check the settings before starting a game
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_types::{GameSettings, SettingsError};
    ///
    /// assert!(GameSettings::default().validate().is_ok());
    ///
    /// let settings = GameSettings { gravity: true, preview_size: 9 };
    /// assert_eq!(settings.validate(), Err(SettingsError::PreviewTooLarge(9)));
    /// ```
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.preview_size > MAX_PREVIEW_SIZE {
            return Err(SettingsError::PreviewTooLarge(self.preview_size));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            gravity: true,
            preview_size: MAX_PREVIEW_SIZE,
        }
    }
}

/// Invalid [`GameSettings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("maximum preview size is {max} ({0} attempted)", max = MAX_PREVIEW_SIZE)]
    PreviewTooLarge(u8),
}

/// Outcome of one playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    pub end_type: EndType,
    pub end_level: u32,
    pub end_score: u64,
}
