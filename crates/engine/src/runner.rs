//! Runner module - real-time drivers over a [`Frontend`]
//!
//! The frontend does all I/O: it renders a snapshot and hands back one
//! command per tick. The runner keeps the tick rate by sleeping off whatever
//! is left of each [`TICK_DURATION`] budget.

use std::thread;
use std::time::Instant;

use anyhow::Result;
use log::debug;

use tetrimino_core::GameSnapshot;
use tetrimino_types::{Command, EndType, GameResult, GameSettings, TICK_DURATION};

use crate::session::Session;

/// Input and output for a running game
pub trait Frontend {
    /// The command for this tick; `Command::DoNothing` when there was no input
    fn poll_command(&mut self) -> Result<Command>;

    /// Draw the current state
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

/// Play one game in real time until it ends
pub fn play_game<F: Frontend + ?Sized>(settings: GameSettings, frontend: &mut F) -> Result<GameResult> {
    settings.validate()?;
    run_session(Session::new(settings), frontend)
}

/// Drive an existing session in real time until it ends
pub fn run_session<F: Frontend + ?Sized>(mut session: Session, frontend: &mut F) -> Result<GameResult> {
    let mut snapshot = GameSnapshot::default();

    loop {
        let tick_start = Instant::now();

        session.snapshot_into(&mut snapshot);
        frontend.render(&snapshot)?;

        let command = frontend.poll_command()?;
        if let Some(result) = session.step(command) {
            session.snapshot_into(&mut snapshot);
            frontend.render(&snapshot)?;
            return Ok(result);
        }

        if let Some(remaining) = TICK_DURATION.checked_sub(tick_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Play games back to back while the player keeps restarting.
///
/// Returns the first result that is not a restart.
pub fn play<F: Frontend + ?Sized>(settings: GameSettings, frontend: &mut F) -> Result<GameResult> {
    loop {
        let result = play_game(settings, frontend)?;
        if result.end_type != EndType::Restart {
            return Ok(result);
        }
        debug!(
            "restart requested at level {} score {}",
            result.end_level, result.end_score
        );
    }
}
