//! Engine module - time-driven control of a game
//!
//! [`Session`] is the deterministic tick loop: feed it one [`Command`] per
//! tick and it applies gravity, lock delay, row clears and spawning. The
//! [`runner`] functions wrap a session in a real-time loop against a
//! [`Frontend`] that does the actual input and rendering.
//!
//! # Example
//!
//! ```
//! use tetrimino_engine::Session;
//! use tetrimino_types::{Command, EndType, GameSettings};
//!
//! let mut session = Session::with_seed(GameSettings::default(), 7);
//! assert!(session.step(Command::HardDrop).is_none());
//! assert_eq!(session.game().playfield().filled_count(), 4);
//!
//! let result = session.step(Command::Quit).unwrap();
//! assert_eq!(result.end_type, EndType::Quit);
//! ```
//!
//! [`Command`]: tetrimino_types::Command

pub mod runner;
pub mod session;

pub use runner::{play, play_game, run_session, Frontend};
pub use session::Session;
