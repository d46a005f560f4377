//! RNG module - 7-bag random shape generation
//!
//! Each bag contains one of each shape (I, O, T, S, Z, J, L), shuffled.
//! Draws from the bag until empty, then shuffles a fresh one, so the same
//! shape never waits more than 12 draws to come back.
//!
//! The random source is a type parameter: tests pass a seeded
//! [`StdRng`](rand::rngs::StdRng) and get the same sequence every run.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::Shape;

/// 7-bag shape generator
#[derive(Debug, Clone)]
pub struct PieceQueue<R = StdRng> {
    /// Shapes left in the current bag, front is drawn next
    bag: VecDeque<Shape>,
    rng: R,
}

impl<R: Rng> PieceQueue<R> {
    /// Create an empty queue; the first draw fills the first bag
    pub fn new(rng: R) -> Self {
        Self {
            bag: VecDeque::with_capacity(Shape::ALL.len()),
            rng,
        }
    }

    /// Append one shuffled permutation of all 7 shapes
    fn refill_bag(&mut self) {
        let mut bag = Shape::ALL;
        bag.shuffle(&mut self.rng);
        self.bag.extend(bag);
    }

    /// Draw the next shape, refilling the bag when it is empty
    pub fn draw(&mut self) -> Shape {
        loop {
            if let Some(shape) = self.bag.pop_front() {
                return shape;
            }
            self.refill_bag();
        }
    }

    /// Number of shapes left before the next refill
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    /// Shapes left in the current bag, in draw order
    pub fn pending(&self) -> impl Iterator<Item = Shape> + '_ {
        self.bag.iter().copied()
    }

    /// Drop the current bag; the next draw starts a new permutation
    pub fn reset(&mut self) {
        self.bag.clear();
    }
}

impl PieceQueue<StdRng> {
    /// Queue over a seeded [`StdRng`]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for PieceQueue<StdRng> {
    fn default() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draw_n(queue: &mut PieceQueue, n: usize) -> Vec<Shape> {
        (0..n).map(|_| queue.draw()).collect()
    }

    #[test]
    fn test_queue_starts_empty() {
        let queue = PieceQueue::with_seed(1);
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn test_queue_draws_all_seven() {
        let mut queue = PieceQueue::with_seed(1);
        let drawn: HashSet<Shape> = draw_n(&mut queue, 7).into_iter().collect();
        assert_eq!(drawn, Shape::ALL.into_iter().collect());
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn test_every_aligned_bag_is_a_permutation() {
        let mut queue = PieceQueue::with_seed(99);
        for _ in 0..50 {
            let bag: HashSet<Shape> = draw_n(&mut queue, 7).into_iter().collect();
            assert_eq!(bag.len(), 7);
        }
    }

    #[test]
    fn test_repeat_gap_is_bounded() {
        let mut queue = PieceQueue::with_seed(7);
        let seq = draw_n(&mut queue, 700);
        for shape in Shape::ALL {
            let positions: Vec<usize> = seq
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == shape)
                .map(|(i, _)| i)
                .collect();
            for pair in positions.windows(2) {
                assert!(pair[1] - pair[0] <= 13, "{:?} gap {}", shape, pair[1] - pair[0]);
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceQueue::with_seed(12345);
        let mut b = PieceQueue::with_seed(12345);
        assert_eq!(draw_n(&mut a, 28), draw_n(&mut b, 28));
    }

    #[test]
    fn test_pending_matches_next_draws() {
        let mut queue = PieceQueue::with_seed(3);
        queue.draw();
        let pending: Vec<Shape> = queue.pending().collect();
        assert_eq!(pending.len(), 6);
        assert_eq!(draw_n(&mut queue, 6), pending);
    }

    #[test]
    fn test_reset_starts_new_bag() {
        let mut queue = PieceQueue::with_seed(5);
        draw_n(&mut queue, 3);
        queue.reset();
        assert_eq!(queue.remaining(), 0);
        let bag: HashSet<Shape> = draw_n(&mut queue, 7).into_iter().collect();
        assert_eq!(bag.len(), 7);
    }
}
