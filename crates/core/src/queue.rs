//! Upcoming queue - fixed-length FIFO of the next pieces
//!
//! The queue always holds `QUEUE_LEN` pieces once filled. Consuming the front
//! appends one freshly drawn piece at the back; entries are never reordered.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::catalog::{self, PiecePool};
use crate::piece::Piece;
use crate::types::QUEUE_LEN;

#[derive(Debug, Clone, Default)]
pub struct UpcomingQueue {
    pieces: ArrayVec<Piece, QUEUE_LEN>,
}

impl UpcomingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything and draw a full queue
    pub fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R, pool: PiecePool) {
        self.pieces.clear();
        while !self.pieces.is_full() {
            self.pieces.push(draw(rng, pool));
        }
    }

    /// Peek at the piece that will be consumed next
    pub fn front(&self) -> Option<&Piece> {
        self.pieces.first()
    }

    /// Consume the front piece and append one new draw
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, pool: PiecePool) -> Option<Piece> {
        let front = self.pieces.pop_at(0)?;
        self.pieces.push(draw(rng, pool));
        Some(front)
    }

    pub fn as_slice(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, pool: PiecePool) -> Piece {
    Piece::new(catalog::random_kind(rng, pool))
}
