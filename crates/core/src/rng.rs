//! RNG module - 7-bag random piece generation
//!
//! The queue always holds at least one full bag ahead of the active piece: a
//! pop that leaves fewer than 7 pending pieces appends a freshly shuffled set of
//! all seven types. Shuffling uses a seedable ChaCha generator, so a fixed seed
//! replays the same piece sequence.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::tetrimino::Tetrimino;
use crate::types::{PieceType, BAG_SIZE};

/// 7-bag randomizer with a look-ahead queue
#[derive(Debug, Clone)]
pub struct Bag {
    queue: VecDeque<Tetrimino>,
    rng: ChaCha12Rng,
}

impl Bag {
    /// Create a bag seeded from the thread-local entropy source
    pub fn new() -> Self {
        Self::from_rng(ChaCha12Rng::from_rng(&mut rand::rng()))
    }

    /// Create a bag with a fixed seed (reproducible sequence)
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha12Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha12Rng) -> Self {
        let mut bag = Self {
            queue: VecDeque::with_capacity(BAG_SIZE * 2),
            rng,
        };
        bag.extend_queue();
        bag
    }

    /// Take the next piece, topping the queue up with a new bag when it runs low
    pub fn pop(&mut self) -> Tetrimino {
        // Never empty: construction and every pop leave at least one full set queued
        let next = self.queue[0];
        self.queue.pop_front();
        if self.queue.len() < BAG_SIZE {
            self.extend_queue();
        }
        next
    }

    /// Upcoming pieces, next first, without consuming them
    pub fn peek(&self, n: usize) -> impl Iterator<Item = &Tetrimino> + '_ {
        self.queue.iter().take(n)
    }

    /// Number of pending pieces
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn extend_queue(&mut self) {
        let mut set = PieceType::ALL;
        set.shuffle(&mut self.rng);
        self.queue.extend(set.into_iter().map(Tetrimino::new));
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_contains_all_pieces() {
        let mut bag = Bag::with_seed(12345);
        let mut seen = [false; BAG_SIZE];

        for _ in 0..BAG_SIZE {
            let piece = bag.pop();
            let idx = PieceType::ALL
                .iter()
                .position(|&t| t == piece.piece_type)
                .unwrap();
            assert!(!seen[idx], "{:?} drawn twice", piece.piece_type);
            seen[idx] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_bag_deterministic() {
        let mut bag1 = Bag::with_seed(42);
        let mut bag2 = Bag::with_seed(42);

        for _ in 0..50 {
            assert_eq!(bag1.pop(), bag2.pop());
        }
    }

    #[test]
    fn test_bag_never_runs_below_one_set() {
        let mut bag = Bag::with_seed(7);
        assert_eq!(bag.len(), BAG_SIZE);
        for _ in 0..30 {
            bag.pop();
            assert!(bag.len() >= BAG_SIZE);
        }
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut bag = Bag::with_seed(99);
        let upcoming: Vec<PieceType> = bag.peek(3).map(|t| t.piece_type).collect();
        assert_eq!(upcoming.len(), 3);
        assert_eq!(bag.pop().piece_type, upcoming[0]);
        assert_eq!(bag.pop().piece_type, upcoming[1]);
    }

    #[test]
    fn test_popped_pieces_are_at_spawn() {
        let mut bag = Bag::with_seed(1);
        let piece = bag.pop();
        assert_eq!(piece, Tetrimino::new(piece.piece_type));
    }
}
