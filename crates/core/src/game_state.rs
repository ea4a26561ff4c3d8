//! Game state module - the engine state machine
//!
//! Owns the field, the active piece, the upcoming queue, the held piece and
//! the score/level/lines counters. Every action reads the current state,
//! builds a candidate with the geometry functions, and either commits it
//! whole or leaves the state untouched.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::PiecePool;
use crate::field::{Field, PlacedBlock};
use crate::geometry::{clear_complete_layers, collides};
use crate::piece::{Piece, SPAWN_ORIGIN};
use crate::queue::UpcomingQueue;
use crate::scoring::{layer_clear_score, level_for_layers};
use crate::snapshot::{GameSnapshot, PlaceOutcome};
use crate::types::{Axis, GameAction, GamePhase, Vec3};

/// Where a held piece is parked; never rendered as active
const HOLD_ORIGIN: Vec3 = Vec3::ZERO;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    field: Field,
    active: Option<Piece>,
    held: Option<Piece>,
    queue: UpcomingQueue,
    rng: R,
    pool: PiecePool,
    /// Seed the RNG was built from, if it was seeded.
    seed: Option<u64>,
    phase: GamePhase,
    score: u32,
    level: u32,
    lines: u32,
    can_hold: bool,
    /// Set by `initialize`, cleared by `start`. The loop driver honours it.
    pending_start: bool,
}

impl GameState<StdRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_seed(seed, PiecePool::default())
    }

    /// Create a new seeded game drawing from `pool`
    pub fn with_seed(seed: u64, pool: PiecePool) -> Self {
        let mut state = Self::with_rng(StdRng::seed_from_u64(seed), pool);
        state.seed = Some(seed);
        state
    }

    /// Create a new game seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy(), PiecePool::default())
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game drawing pieces from `pool` with `rng`
    pub fn with_rng(rng: R, pool: PiecePool) -> Self {
        let mut state = Self {
            field: Field::new(),
            active: None,
            held: None,
            queue: UpcomingQueue::new(),
            rng,
            pool,
            seed: None,
            phase: GamePhase::Ready,
            score: 0,
            level: 1,
            lines: 0,
            can_hold: true,
            pending_start: false,
        };
        state.initialize();
        state
    }

    /// Reset everything to a fresh session in `Ready` and request a start
    pub fn initialize(&mut self) {
        info!("Initializing game");
        self.field.clear();
        self.active = None;
        self.held = None;
        self.queue.refill(&mut self.rng, self.pool);
        self.phase = GamePhase::Ready;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.can_hold = true;
        self.pending_start = true;
    }

    /// Same as `initialize`
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.initialize();
    }

    /// Spawn the first piece and begin play. Only valid from `Ready`.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Ready {
            return false;
        }
        let Some(piece) = self.queue.advance(&mut self.rng, self.pool) else {
            return false;
        };
        self.pending_start = false;

        info!("Starting game with piece: {}", piece.kind.as_str());
        if collides(&piece, &self.field) {
            self.enter_game_over();
            return false;
        }
        self.active = Some(piece);
        self.phase = GamePhase::Playing;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        info!("Pausing game");
        self.phase = GamePhase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        info!("Resuming game");
        self.phase = GamePhase::Playing;
        true
    }

    /// Pause when playing, resume when paused
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// The active piece while playing
    fn playing_piece(&self) -> Option<&Piece> {
        match self.phase {
            GamePhase::Playing => self.active.as_ref(),
            _ => None,
        }
    }

    /// Try to move the active piece by (dx, dy, dz)
    ///
    /// Returns false, leaving everything untouched, when not playing or when
    /// the moved piece would collide. A failed downward move means the piece
    /// has landed.
    pub fn try_move(&mut self, dx: i32, dy: i32, dz: i32) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };

        let Some(candidate) = active.checked_translated(Vec3::new(dx, dy, dz)) else {
            return false;
        };
        if collides(&candidate, &self.field) {
            return false;
        }

        debug!("Moved piece to {}", candidate.origin);
        self.active = Some(candidate);
        true
    }

    /// Try to rotate the active piece 90° about `axis`, all or nothing
    pub fn try_rotate(&mut self, axis: Axis) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };

        let candidate = active.rotated(axis);
        if collides(&candidate, &self.field) {
            return false;
        }

        debug!("Rotated piece around {} axis", axis.as_str());
        self.active = Some(candidate);
        true
    }

    /// One step down
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, -1, 0)
    }

    /// Lowest non-colliding copy of `piece` straight below it
    fn resting(&self, piece: &Piece) -> Piece {
        let mut rest = piece.clone();
        loop {
            let below = rest.translated(0, -1, 0);
            if collides(&below, &self.field) {
                return rest;
            }
            rest = below;
        }
    }

    /// Drop the active piece to its resting position and place it
    pub fn hard_drop(&mut self) -> Option<PlaceOutcome> {
        let active = self.playing_piece()?;
        let rest = self.resting(active);
        self.active = Some(rest);
        debug!("Hard dropped piece");
        self.place()
    }

    /// Bank the active piece, or swap it with the held one.
    ///
    /// Allowed once per placement. Pieces keep their rotation: the one coming
    /// out of hold re-enters at the spawn origin, the one going in is parked at
    /// a placeholder origin that nothing reads.
    pub fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(active) = self.playing_piece() else {
            return false;
        };
        let newly_held = active.moved_to(HOLD_ORIGIN);

        let incoming = match &self.held {
            Some(held) => held.moved_to(SPAWN_ORIGIN),
            None => match self.queue.advance(&mut self.rng, self.pool) {
                Some(next) => next,
                None => return false,
            },
        };

        debug!("Held piece: {}", newly_held.kind.as_str());
        self.held = Some(newly_held);
        self.can_hold = false;

        if collides(&incoming, &self.field) {
            self.enter_game_over();
        } else {
            self.active = Some(incoming);
        }
        true
    }

    /// Write the active piece into the field, clear layers, score, and spawn
    /// the next piece.
    ///
    /// If the next piece would collide with the cleared field the game ends
    /// and nothing else is committed: field, counters and queue keep their
    /// pre-placement values.
    pub fn place(&mut self) -> Option<PlaceOutcome> {
        let active = self.playing_piece()?;

        let mut field = self.field.clone();
        for cell in active.cells() {
            // Out-of-range cells cannot occur while playing; `set` skips them.
            field.set_at(cell, Some(active.kind));
        }

        let cleared = clear_complete_layers(&mut field) as u32;
        let score_gained = layer_clear_score(cleared, self.level);
        let total_lines = self.lines + cleared;

        let spawn_blocked = match self.queue.front() {
            Some(next) => collides(next, &field),
            None => true,
        };
        if spawn_blocked {
            info!("Game over");
            self.enter_game_over();
            return Some(PlaceOutcome {
                game_over: true,
                ..PlaceOutcome::default()
            });
        }

        let next = self.queue.advance(&mut self.rng, self.pool)?;
        self.field = field;
        self.active = Some(next);
        self.score = self.score.saturating_add(score_gained);
        self.lines = total_lines;
        self.level = level_for_layers(total_lines);
        self.can_hold = true;

        if cleared > 0 {
            info!("Cleared {} layers", cleared);
        }

        Some(PlaceOutcome {
            layers_cleared: cleared,
            score_gained,
            game_over: false,
        })
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.active = None;
        self.pending_start = false;
    }

    /// Where a hard drop would put the active piece's origin
    pub fn ghost_position(&self) -> Option<Vec3> {
        let active = self.active.as_ref()?;
        Some(self.resting(active).origin)
    }

    /// Placement check, called at a short fixed interval by the loop driver.
    ///
    /// Places the active piece when it cannot move down. It never moves the
    /// piece itself; gravity is applied separately by the driver.
    pub fn tick(&mut self) -> Option<PlaceOutcome> {
        let active = self.playing_piece()?;
        if collides(&active.translated(0, -1, 0), &self.field) {
            return self.place();
        }
        None
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft
            | GameAction::MoveRight
            | GameAction::MoveForward
            | GameAction::MoveBackward
            | GameAction::SoftDrop => match action.delta() {
                Some(d) => self.try_move(d.x, d.y, d.z),
                None => false,
            },
            GameAction::RotateX | GameAction::RotateY | GameAction::RotateZ => {
                match action.axis() {
                    Some(axis) => self.try_rotate(axis),
                    None => false,
                }
            }
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn pending_start(&self) -> bool {
        self.pending_start
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn pool(&self) -> PiecePool {
        self.pool
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn placed_blocks(&self) -> Vec<PlacedBlock> {
        self.field.placed_blocks()
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_pieces(&self) -> &[Piece] {
        self.queue.as_slice()
    }

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.game_state = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines_cleared = self.lines;
        out.placed_blocks.clear();
        out.placed_blocks.extend(self.field.placed_iter());
        out.current_piece = self.active.clone();
        out.ghost_position = self.ghost_position();
        out.next_pieces.clear();
        out.next_pieces.extend_from_slice(self.queue.as_slice());
        out.held_piece = self.held.clone();
        out.can_hold = self.can_hold;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
