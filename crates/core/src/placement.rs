//! Placement module - lock delay ("extended placement") for a landed piece
//!
//! Once the active piece lands it starts resting. With gravity on, a resting
//! piece locks when [`LOCK_DELAY`] passes without a successful move; each
//! successful shift or rotation restarts the window, up to
//! [`EXTENDED_PLACEMENT_MAX_MOVES`] times. A hard drop always locks. With
//! gravity off only a hard drop locks and moves are never capped.
//!
//! Times are game-clock readings (`Duration` since the session started), so a
//! paused session freezes the window.

use std::time::Duration;

use crate::types::{EXTENDED_PLACEMENT_MAX_MOVES, LOCK_DELAY};

/// Where the active piece is in its placement life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlacementState {
    /// Not touching anything below it (or not yet evaluated since it fell)
    #[default]
    Falling,
    /// Landed; `started_at` is the last (re)start of the lock window
    Resting { started_at: Duration, moves_used: u8 },
}

/// Outcome of [`PlacementController::evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementDecision {
    Continue,
    Lock,
}

/// Lock-delay state machine for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementController {
    gravity: bool,
    state: PlacementState,
    hard_dropped: bool,
}

impl PlacementController {
    pub fn new(gravity: bool) -> Self {
        Self {
            gravity,
            state: PlacementState::Falling,
            hard_dropped: false,
        }
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn gravity(&self) -> bool {
        self.gravity
    }

    pub fn is_resting(&self) -> bool {
        matches!(self.state, PlacementState::Resting { .. })
    }

    /// Successful moves spent in the current resting window
    pub fn moves_used(&self) -> u8 {
        match self.state {
            PlacementState::Resting { moves_used, .. } => moves_used,
            PlacementState::Falling => 0,
        }
    }

    /// Whether a shift, rotation or soft drop may be attempted.
    ///
    /// Hard drop is not subject to this check.
    pub fn allows_manipulation(&self) -> bool {
        match self.state {
            PlacementState::Resting { moves_used, .. } if self.gravity => {
                moves_used < EXTENDED_PLACEMENT_MAX_MOVES
            }
            _ => true,
        }
    }

    /// Record a successful shift or rotation
    pub fn on_manipulation(&mut self, now: Duration) {
        if let PlacementState::Resting {
            started_at,
            moves_used,
        } = &mut self.state
        {
            *started_at = now;
            *moves_used = moves_used.saturating_add(1);
        }
    }

    /// Record a successful downward move (gravity or soft drop)
    pub fn on_fall(&mut self) {
        self.state = PlacementState::Falling;
    }

    /// Record a hard drop; the piece locks on the next evaluation
    pub fn on_hard_drop(&mut self) {
        self.hard_dropped = true;
    }

    /// Decide whether the active piece locks now
    pub fn evaluate(&mut self, landed: bool, now: Duration) -> PlacementDecision {
        if !landed {
            return PlacementDecision::Continue;
        }

        if self.state == PlacementState::Falling {
            self.state = PlacementState::Resting {
                started_at: now,
                moves_used: 0,
            };
        }

        if self.hard_dropped {
            return PlacementDecision::Lock;
        }

        match self.state {
            PlacementState::Resting { started_at, .. }
                if self.gravity && now.saturating_sub(started_at) > LOCK_DELAY =>
            {
                PlacementDecision::Lock
            }
            _ => PlacementDecision::Continue,
        }
    }

    /// Start over for a freshly spawned piece
    pub fn reset(&mut self) {
        self.state = PlacementState::Falling;
        self.hard_dropped = false;
    }
}
