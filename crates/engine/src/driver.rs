//! Loop driver - turns elapsed wall time into engine calls
//!
//! Two cadences run side by side: a short fixed tick that lets the engine
//! place a piece that can no longer fall, and a longer gravity interval that
//! moves the active piece down one cell. A freshly initialized game is started
//! once `AUTO_START_DELAY_MS` has passed.

use log::debug;
use rand::Rng;

use crate::core::{GameState, PlaceOutcome};
use crate::types::{
    GamePhase, AUTO_START_DELAY_MS, BASE_GRAVITY_MS, GRAVITY_INTERVALS, GRAVITY_INTERVAL_MIN_MS,
    TICK_MS,
};

/// How long the active piece waits between gravity steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityCurve {
    /// Same interval at every level
    Fixed(u32),
    /// Classic per-level table, faster as the level rises
    LevelScaled,
}

impl GravityCurve {
    /// Gravity interval at `level` (1-based)
    pub fn interval_ms(&self, level: u32) -> u32 {
        match *self {
            GravityCurve::Fixed(ms) => ms.max(1),
            GravityCurve::LevelScaled => {
                let idx = (level.saturating_sub(1) as usize).min(GRAVITY_INTERVALS.len() - 1);
                GRAVITY_INTERVALS[idx].max(GRAVITY_INTERVAL_MIN_MS)
            }
        }
    }
}

impl Default for GravityCurve {
    fn default() -> Self {
        GravityCurve::Fixed(BASE_GRAVITY_MS)
    }
}

/// What one `advance` call did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverReport {
    /// The deferred start ran during this call
    pub started: bool,
    /// Engine ticks issued
    pub ticks: u32,
    /// Successful gravity steps
    pub gravity_steps: u32,
    /// A gravity step was blocked: the piece is resting
    pub landed: bool,
    /// Placements triggered by ticks
    pub placements: Vec<PlaceOutcome>,
}

impl DriverReport {
    pub fn game_over(&self) -> bool {
        self.placements.iter().any(|p| p.game_over)
    }
}

/// Fixed-timestep driver for one game
#[derive(Debug, Clone)]
pub struct LoopDriver {
    tick_ms: u32,
    gravity: GravityCurve,
    tick_accum_ms: u32,
    gravity_accum_ms: u32,
    start_accum_ms: u32,
}

impl LoopDriver {
    pub fn new(gravity: GravityCurve) -> Self {
        Self::with_tick(TICK_MS, gravity)
    }

    pub fn with_tick(tick_ms: u32, gravity: GravityCurve) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            gravity,
            tick_accum_ms: 0,
            gravity_accum_ms: 0,
            start_accum_ms: 0,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn gravity(&self) -> GravityCurve {
        self.gravity
    }

    /// Gravity interval for the game's current level
    pub fn gravity_interval_ms<R: Rng>(&self, game: &GameState<R>) -> u32 {
        self.gravity.interval_ms(game.level())
    }

    /// Forget all banked time
    pub fn reset(&mut self) {
        self.tick_accum_ms = 0;
        self.gravity_accum_ms = 0;
        self.start_accum_ms = 0;
    }

    /// Advance the game by `elapsed_ms` of wall time
    pub fn advance<R: Rng>(&mut self, game: &mut GameState<R>, elapsed_ms: u32) -> DriverReport {
        let mut report = DriverReport::default();

        if game.phase() == GamePhase::Ready {
            self.tick_accum_ms = 0;
            self.gravity_accum_ms = 0;
            if game.pending_start() {
                self.start_accum_ms = self.start_accum_ms.saturating_add(elapsed_ms);
                if self.start_accum_ms >= AUTO_START_DELAY_MS {
                    self.start_accum_ms = 0;
                    report.started = game.start();
                }
            }
            return report;
        }

        if game.phase() != GamePhase::Playing {
            // Paused or over: no banked steps once play resumes.
            self.reset();
            return report;
        }

        self.tick_accum_ms = self.tick_accum_ms.saturating_add(elapsed_ms);
        self.gravity_accum_ms = self.gravity_accum_ms.saturating_add(elapsed_ms);

        while self.tick_accum_ms >= self.tick_ms {
            self.tick_accum_ms -= self.tick_ms;
            report.ticks += 1;
            if let Some(outcome) = game.tick() {
                report.placements.push(outcome);
                // A new piece starts its fall from a fresh gravity interval.
                self.gravity_accum_ms = 0;
            }
            if game.phase() != GamePhase::Playing {
                self.reset();
                return report;
            }
        }

        let interval = self.gravity_interval_ms(game);
        while self.gravity_accum_ms >= interval {
            self.gravity_accum_ms -= interval;
            if game.soft_drop() {
                report.gravity_steps += 1;
            } else {
                debug!("Gravity step blocked, piece resting");
                report.landed = true;
                self.gravity_accum_ms = 0;
                break;
            }
        }

        report
    }
}

impl Default for LoopDriver {
    fn default() -> Self {
        Self::new(GravityCurve::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    #[test]
    fn test_fixed_gravity_ignores_level() {
        let curve = GravityCurve::Fixed(1000);
        assert_eq!(curve.interval_ms(1), 1000);
        assert_eq!(curve.interval_ms(30), 1000);
        assert_eq!(GravityCurve::Fixed(0).interval_ms(1), 1);
    }

    #[test]
    fn test_level_scaled_gravity() {
        let curve = GravityCurve::LevelScaled;
        assert_eq!(curve.interval_ms(0), 1000);
        assert_eq!(curve.interval_ms(1), 1000);
        assert_eq!(curve.interval_ms(2), 800);
        assert_eq!(curve.interval_ms(6), 320);
        assert_eq!(curve.interval_ms(9), 160);
        assert_eq!(curve.interval_ms(50), 160);
    }

    #[test]
    fn test_deferred_start() {
        let mut game = GameState::new(12345);
        let mut driver = LoopDriver::default();

        let report = driver.advance(&mut game, 50);
        assert!(!report.started);
        assert_eq!(game.phase(), GamePhase::Ready);

        let report = driver.advance(&mut game, 50);
        assert!(report.started);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(!game.pending_start());
    }

    #[test]
    fn test_gravity_steps_at_interval() {
        let mut game = GameState::new(12345);
        game.start();
        let mut driver = LoopDriver::new(GravityCurve::Fixed(1000));
        let y0 = game.active().unwrap().origin.y;

        let mut steps = 0;
        let mut ticks = 0;
        for _ in 0..125 {
            let report = driver.advance(&mut game, TICK_MS);
            steps += report.gravity_steps;
            ticks += report.ticks;
        }
        // 125 * 16ms = 2000ms.
        assert_eq!(ticks, 125);
        assert_eq!(steps, 2);
        assert_eq!(game.active().unwrap().origin.y, y0 - 2);
    }

    #[test]
    fn test_tick_places_landed_piece() {
        let mut game = GameState::new(12345);
        game.start();
        let mut driver = LoopDriver::new(GravityCurve::Fixed(10));
        let spawned = game.active().unwrap().clone();

        // Plenty of time for the piece to fall and be placed.
        let mut placed = 0;
        for _ in 0..40 {
            placed += driver.advance(&mut game, TICK_MS).placements.len();
        }
        assert!(placed >= 1);
        assert!(game.field().occupied_count() >= spawned.shape.len());
    }

    #[test]
    fn test_paused_game_banks_no_time() {
        let mut game = GameState::new(7);
        game.start();
        let mut driver = LoopDriver::new(GravityCurve::Fixed(1000));
        let before: Piece = game.active().unwrap().clone();

        game.pause();
        let report = driver.advance(&mut game, 5000);
        assert_eq!(report, DriverReport::default());

        game.resume();
        let report = driver.advance(&mut game, TICK_MS);
        assert_eq!(report.gravity_steps, 0);
        assert_eq!(game.active(), Some(&before));
    }

    #[test]
    fn test_blocked_gravity_reports_landing() {
        let mut game = GameState::new(3);
        game.start();
        // Tick interval longer than the test so only gravity runs.
        let mut driver = LoopDriver::with_tick(10_000, GravityCurve::Fixed(100));
        while game.soft_drop() {}
        let resting = game.active().cloned();

        let report = driver.advance(&mut game, 100);
        assert!(report.landed);
        assert_eq!(report.gravity_steps, 0);
        assert!(report.placements.is_empty());
        assert_eq!(game.active().cloned(), resting);
    }
}
