//! Session module - one playthrough advanced one fixed tick at a time
//!
//! A session owns the game, the lock-delay controller and a game clock. The
//! clock moves forward by exactly [`TICK_DURATION`] per unpaused tick, so a
//! session replays identically for the same seed and command stream, and
//! pausing freezes both the gravity and the lock-delay timers.
//!
//! Order of work in [`Session::step`]:
//!
//! 1. game-over check
//! 2. quit / restart / pause
//! 3. command (gated by the lock-delay controller)
//! 4. gravity
//! 5. landing evaluation, lock, row clear, next piece
//! 6. game-over check for the new piece

use std::time::Duration;

use log::{debug, info};

use tetrimino_core::{Game, GameSnapshot, PlacementController, PlacementDecision, PlacementSnapshot};
use tetrimino_types::{Command, EndType, GameResult, GameSettings, TICK_DURATION};

/// One playthrough
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    placement: PlacementController,
    settings: GameSettings,
    clock: Duration,
    last_drop: Duration,
    paused: bool,
    ticks: u64,
}

impl Session {
    /// Start a session with an entropy-seeded bag
    pub fn new(settings: GameSettings) -> Self {
        Self::from_game(settings, Game::new())
    }

    /// Start a session with a reproducible piece sequence
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::from_game(settings, Game::with_seed(seed))
    }

    fn from_game(settings: GameSettings, game: Game) -> Self {
        debug!(
            "session start: gravity={} preview={} first={:?}",
            settings.gravity,
            settings.preview_size,
            game.active().piece_type
        );
        Self {
            game,
            placement: PlacementController::new(settings.gravity),
            settings,
            clock: Duration::ZERO,
            last_drop: Duration::ZERO,
            paused: false,
            ticks: 0,
        }
    }

    /// Advance one tick with the command polled for it.
    ///
    /// Returns `Some` once the session has ended; the caller should stop
    /// stepping it.
    pub fn step(&mut self, command: Command) -> Option<GameResult> {
        if self.game.is_game_over() {
            return Some(self.finish(EndType::GameOver));
        }

        match command {
            Command::Quit => return Some(self.finish(EndType::Quit)),
            Command::Restart => return Some(self.finish(EndType::Restart)),
            Command::Pause => {
                self.paused = !self.paused;
                debug!("paused={} at {:?}", self.paused, self.clock);
                return None;
            }
            _ => {}
        }

        if self.paused {
            return None;
        }

        self.clock += TICK_DURATION;
        self.ticks += 1;
        let now = self.clock;

        self.apply_command(command, now);

        if self.settings.gravity && now.saturating_sub(self.last_drop) >= self.game.drop_interval()
        {
            if self.game.fall() {
                self.placement.on_fall();
            }
            self.last_drop = now;
        }

        if self.placement.evaluate(self.game.is_landed(), now) == PlacementDecision::Lock {
            self.game.lock_active_tetrimino();
            self.game.clear_rows();
            self.game.draw_new_tetrimino();
            self.placement.reset();
        }

        if self.game.is_game_over() {
            return Some(self.finish(EndType::GameOver));
        }

        None
    }

    fn apply_command(&mut self, command: Command, now: Duration) {
        match command {
            Command::HardDrop => {
                if self.game.apply_command(command) {
                    self.placement.on_hard_drop();
                }
            }
            Command::SoftDrop => {
                if self.placement.allows_manipulation() && self.game.apply_command(command) {
                    self.placement.on_fall();
                    self.last_drop = now;
                }
            }
            Command::ShiftLeft | Command::ShiftRight | Command::RotateCcw | Command::RotateCw => {
                if self.placement.allows_manipulation() && self.game.apply_command(command) {
                    self.placement.on_manipulation(now);
                }
            }
            Command::DoNothing | Command::Pause | Command::Quit | Command::Restart => {}
        }
    }

    fn finish(&self, end_type: EndType) -> GameResult {
        let result = GameResult {
            end_type,
            end_level: self.game.level(),
            end_score: self.game.score(),
        };
        info!(
            "game ended: {:?} level={} score={} ticks={}",
            result.end_type, result.end_level, result.end_score, self.ticks
        );
        result
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable game access for setting up positions
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn placement(&self) -> &PlacementController {
        &self.placement
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    /// Game time elapsed over unpaused ticks
    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out, self.settings.preview_size);
        out.paused = self.paused;
        out.placement = PlacementSnapshot::from(&self.placement);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
