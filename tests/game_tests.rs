//! Game tests - locking, row clears, scoring, leveling and block out

use std::time::Duration;

use tetrimino::core::{Game, Tetrimino};
use tetrimino::types::{Command, PieceType, Point, MAX_LEVEL};

fn fill_row(game: &mut Game, row: i16) {
    for col in 0..10 {
        game.playfield_mut()
            .set(Point::new(row, col), Some(PieceType::T));
    }
}

fn fill_row_except(game: &mut Game, row: i16, gap: i16) {
    for col in (0..10).filter(|&c| c != gap) {
        game.playfield_mut()
            .set(Point::new(row, col), Some(PieceType::T));
    }
}

// ============== Initial State Tests ==============

#[test]
fn test_new_game_initial_state() {
    let game = Game::with_seed(1);
    assert_eq!(game.level(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.rows_cleared(), 0);
    assert!(!game.is_game_over());
    assert_eq!(game.drop_interval(), Duration::from_secs(1));
    assert_eq!(game.preview(6).count(), 6);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Game::with_seed(99);
    let mut b = Game::with_seed(99);
    for _ in 0..20 {
        assert_eq!(a.active(), b.active());
        a.draw_new_tetrimino();
        b.draw_new_tetrimino();
    }
}

// ============== Row Clear And Scoring Tests ==============

#[test]
fn test_clear_rows_nothing_full() {
    let mut game = Game::with_seed(2);
    fill_row_except(&mut game, 39, 3);
    let before = game.playfield().clone();

    assert_eq!(game.clear_rows(), 0);
    assert_eq!(*game.playfield(), before);
    assert_eq!(game.score(), 0);
    assert_eq!(game.rows_cleared(), 0);
}

#[test]
fn test_single_row_score() {
    let mut game = Game::with_seed(3);
    fill_row(&mut game, 39);
    assert_eq!(game.clear_rows(), 1);
    assert_eq!(game.score(), 100);
}

#[test]
fn test_two_rows_at_level_three() {
    let mut game = Game::with_seed(4);

    // Level 1 -> 2 at 5 rows, 2 -> 3 at 15 rows
    for _ in 0..5 {
        fill_row(&mut game, 39);
        game.clear_rows();
    }
    assert_eq!(game.level(), 2);
    for _ in 0..10 {
        fill_row(&mut game, 39);
        game.clear_rows();
    }
    assert_eq!(game.level(), 3);

    let score = game.score();
    fill_row(&mut game, 39);
    fill_row(&mut game, 38);
    assert_eq!(game.clear_rows(), 2);
    assert_eq!(game.score() - score, 900);
}

#[test]
fn test_tetris_score() {
    let mut game = Game::with_seed(5);
    for row in 36..40 {
        fill_row(&mut game, row);
    }
    assert_eq!(game.clear_rows(), 4);
    assert_eq!(game.score(), 800);
    assert_eq!(game.rows_cleared(), 4);
    assert_eq!(game.level(), 1);
}

#[test]
fn test_level_up_at_threshold() {
    let mut game = Game::with_seed(6);
    for row in 36..40 {
        fill_row(&mut game, row);
    }
    game.clear_rows();
    assert_eq!(game.level(), 1);

    fill_row(&mut game, 39);
    game.clear_rows();
    assert_eq!(game.level(), 2);
    assert!(game.drop_interval() < Duration::from_secs(1));
}

#[test]
fn test_level_capped_at_max() {
    let mut game = Game::with_seed(7);
    for _ in 0..300 {
        for row in 36..40 {
            fill_row(&mut game, row);
        }
        game.clear_rows();
    }
    assert_eq!(game.level(), MAX_LEVEL);
}

#[test]
fn test_score_non_decreasing() {
    let mut game = Game::with_seed(8);
    let mut last = 0;
    for i in 0..30 {
        if i % 3 == 0 {
            fill_row(&mut game, 39);
        }
        game.clear_rows();
        assert!(game.score() >= last);
        last = game.score();
    }
}

// ============== Locking Tests ==============

#[test]
fn test_lock_then_clear_line() {
    let mut game = Game::with_seed(9);
    fill_row_except(&mut game, 39, 0);
    fill_row_except(&mut game, 38, 0);
    fill_row_except(&mut game, 37, 0);
    fill_row_except(&mut game, 36, 0);

    // Vertical I dropped into the well
    let mut piece = Tetrimino::new(PieceType::I);
    assert!(piece.rotate_ccw(game.playfield()));
    game.set_active(piece);
    while game.apply_command(Command::ShiftLeft) {}
    assert!(game.apply_command(Command::HardDrop));
    assert!(game.is_landed());

    game.lock_active_tetrimino();
    assert_eq!(game.clear_rows(), 4);
    assert_eq!(game.score(), 800);
    assert_eq!(game.playfield().filled_count(), 0);
}

#[test]
fn test_landing_is_ghost_of_active() {
    let game = Game::with_seed(10);
    let ghost = game.landing();
    assert_eq!(ghost.piece_type, game.active().piece_type);
    assert_eq!(ghost.facing, game.active().facing);
    assert!(ghost.is_landed(game.playfield()));
    assert_eq!(ghost.pivot.col, game.active().pivot.col);
}

// ============== Game Over Tests ==============

#[test]
fn test_spawn_onto_locked_minoes_is_game_over() {
    let mut game = Game::with_seed(11);
    for point in game.active().points {
        game.playfield_mut().set(point, Some(PieceType::O));
    }
    assert!(game.is_game_over());
}

#[test]
fn test_stack_to_spawn_ends_game() {
    let mut game = Game::with_seed(12);
    let mut locks = 0;
    while !game.is_game_over() {
        assert!(game.apply_command(Command::HardDrop));
        game.lock_active_tetrimino();
        game.clear_rows();
        game.draw_new_tetrimino();
        locks += 1;
        assert!(locks < 100, "stack never reached spawn");
    }
    assert!(locks >= 5);
}
