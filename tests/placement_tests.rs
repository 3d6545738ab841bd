//! Placement tests - lock delay state machine driven with explicit game times

use std::time::Duration;

use tetrimino::core::{PlacementController, PlacementDecision, PlacementState};
use tetrimino::types::{EXTENDED_PLACEMENT_MAX_MOVES, LOCK_DELAY, TICK_DURATION};

fn ticks(n: u32) -> Duration {
    TICK_DURATION * n
}

#[test]
fn test_resting_piece_locks_after_lock_delay() {
    let mut controller = PlacementController::new(true);
    let landed_at = ticks(10);
    assert_eq!(
        controller.evaluate(true, landed_at),
        PlacementDecision::Continue
    );

    // 30 ticks is just under half a second
    assert!(ticks(30) < LOCK_DELAY);
    assert_eq!(
        controller.evaluate(true, landed_at + ticks(30)),
        PlacementDecision::Continue
    );
    assert_eq!(
        controller.evaluate(true, landed_at + ticks(31)),
        PlacementDecision::Lock
    );
}

#[test]
fn test_exactly_lock_delay_does_not_lock() {
    let mut controller = PlacementController::new(true);
    controller.evaluate(true, Duration::ZERO);
    assert_eq!(
        controller.evaluate(true, LOCK_DELAY),
        PlacementDecision::Continue
    );
}

#[test]
fn test_sixteenth_manipulation_rejected_hard_drop_still_locks() {
    let mut controller = PlacementController::new(true);
    controller.evaluate(true, ticks(0));

    for i in 1..=u32::from(EXTENDED_PLACEMENT_MAX_MOVES) {
        assert!(controller.allows_manipulation(), "move {}", i);
        controller.on_manipulation(ticks(i));
        assert_eq!(
            controller.evaluate(true, ticks(i)),
            PlacementDecision::Continue
        );
    }
    assert_eq!(controller.moves_used(), EXTENDED_PLACEMENT_MAX_MOVES);
    assert!(!controller.allows_manipulation());

    controller.on_hard_drop();
    assert_eq!(controller.evaluate(true, ticks(16)), PlacementDecision::Lock);
}

#[test]
fn test_capped_piece_still_times_out() {
    let mut controller = PlacementController::new(true);
    controller.evaluate(true, ticks(0));
    for i in 1..=u32::from(EXTENDED_PLACEMENT_MAX_MOVES) {
        controller.on_manipulation(ticks(i));
    }
    let last_move = ticks(u32::from(EXTENDED_PLACEMENT_MAX_MOVES));
    assert_eq!(
        controller.evaluate(true, last_move + ticks(31)),
        PlacementDecision::Lock
    );
}

#[test]
fn test_falling_off_ledge_restarts_resting() {
    let mut controller = PlacementController::new(true);
    controller.evaluate(true, ticks(0));
    controller.on_manipulation(ticks(5));

    // Shifted off the ledge, gravity pulls it down
    assert_eq!(controller.evaluate(false, ticks(6)), PlacementDecision::Continue);
    controller.on_fall();
    assert_eq!(controller.state(), PlacementState::Falling);

    controller.evaluate(true, ticks(100));
    assert_eq!(
        controller.state(),
        PlacementState::Resting {
            started_at: ticks(100),
            moves_used: 0
        }
    );
}

#[test]
fn test_not_landed_never_locks() {
    let mut controller = PlacementController::new(true);
    controller.evaluate(true, ticks(0));
    assert_eq!(
        controller.evaluate(false, ticks(1000)),
        PlacementDecision::Continue
    );
}

#[test]
fn test_without_gravity_no_timeout_and_no_cap() {
    let mut controller = PlacementController::new(false);
    controller.evaluate(true, ticks(0));
    for i in 1..=50 {
        assert!(controller.allows_manipulation());
        controller.on_manipulation(ticks(i));
    }
    assert_eq!(
        controller.evaluate(true, ticks(100_000)),
        PlacementDecision::Continue
    );
    controller.on_hard_drop();
    assert_eq!(
        controller.evaluate(true, ticks(100_001)),
        PlacementDecision::Lock
    );
}
