//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the game: the playfield, piece movement and
//! rotation, the randomizer, scoring and leveling, and the lock-delay policy.
//! It has **no dependencies** on rendering, input, or I/O, and it never reads a
//! clock: callers pass the current game time in.
//!
//! # Module Structure
//!
//! - [`playfield`]: 40x10 grid (rows 0-18 hidden) and row clearing
//! - [`collision`]: wall / floor / ceiling / mino classification of points
//! - [`pieces`]: spawn layouts and SRS offset tables with kick resolution
//! - [`tetrimino`]: the active piece: translate, rotate, hard drop, landing
//! - [`rng`]: 7-bag randomizer over a seedable ChaCha generator
//! - [`scoring`]: row-clear points, leveling and the gravity curve
//! - [`game_state`]: one game tying the above together
//! - [`placement`]: lock delay ("extended placement") state machine
//! - [`snapshot`]: read-only per-tick view for frontends
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every run of seven pieces contains each type once
//! - **SRS Rotation**: four kick tests after the unkicked rotation; O never rotates
//! - **Lock Delay**: 0.5 s once landed, restarted by each successful move, at most 15 moves
//! - **Ghost Piece**: [`Game::landing`] shows where a hard drop would put the piece
//! - **Scoring**: `level * {100, 300, 500, 800}` for 1-4 rows
//!
//! # Example
//!
//! ```
//! use tetrimino_core::Game;
//! use tetrimino_types::Command;
//!
//! let mut game = Game::with_seed(12345);
//!
//! game.apply_command(Command::ShiftLeft);
//! game.apply_command(Command::RotateCw);
//! assert!(game.apply_command(Command::HardDrop));
//! assert!(game.is_landed());
//!
//! game.lock_active_tetrimino();
//! assert_eq!(game.clear_rows(), 0);
//! game.draw_new_tetrimino();
//! assert!(!game.is_game_over());
//! ```

pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod placement;
pub mod playfield;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetrimino;

pub use tetrimino_types as types;

// Re-export commonly used types for convenience
pub use collision::{check_collision, check_collision_points, CollisionResult};
pub use game_state::Game;
pub use pieces::{calculate_srs_offset, resolve_kick, spawn_points, srs_offset_value};
pub use placement::{PlacementController, PlacementDecision, PlacementState};
pub use playfield::Playfield;
pub use rng::Bag;
pub use scoring::{calculate_line_score, drop_interval, LevelProgress};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PlacementSnapshot};
pub use tetrimino::Tetrimino;
