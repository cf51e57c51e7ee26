// engine.rs - The simulation engine: grid ownership, run state, and
// snapshot notifications

use crate::grid::Grid;
use crate::patterns::Pattern;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

/// Construction parameters. Dimensions and tick interval are fixed for the
/// lifetime of the engine.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval: Duration,
    pub alive_probability: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            tick_interval: Duration::from_millis(100),
            alive_probability: 0.3,
        }
    }
}

/// Contract violations from the view layer. Fail-fast; the engine state is
/// unchanged when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("expected a {expected_rows}x{expected_cols} grid, got {actual_rows}x{actual_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

/// A fully formed generation, published to subscribers after every change.
/// Subscribers never observe a partially updated grid.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub grid: Grid,
    pub generation: u64,
    pub running: bool,
}

/// Owns the current grid and run state. All mutation goes through the
/// operations below; each one publishes a new snapshot over the watch
/// channel.
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    running: bool,
    run_epoch: u64,
    generation: u64,
    rng: SmallRng,
    tx: watch::Sender<Snapshot>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Engine with a caller-provided RNG, for deterministic randomize.
    pub fn with_rng(config: EngineConfig, rng: SmallRng) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        let (tx, _rx) = watch::channel(Snapshot {
            grid: grid.clone(),
            generation: 0,
            running: false,
        });
        Self {
            config,
            grid,
            running: false,
            run_epoch: 0,
            generation: 0,
            rng,
            tx,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The run loop checks this every tick: it keeps stepping only while
    /// the engine is running *and* no newer loop has been started since.
    pub fn runs_in_epoch(&self, epoch: u64) -> bool {
        self.running && self.run_epoch == epoch
    }

    /// New receiver for snapshot notifications.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Flip one cell. Run state is untouched.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        if !self.grid.in_bounds(row, col) {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.config.rows,
                cols: self.config.cols,
            });
        }
        self.grid.toggle(row, col);
        self.publish();
        Ok(())
    }

    /// Swap in a whole new grid of identical dimensions and reset the
    /// generation counter. Does not stop a running loop.
    pub fn replace_grid(&mut self, grid: Grid) -> Result<(), EngineError> {
        if grid.rows() != self.config.rows || grid.cols() != self.config.cols {
            return Err(EngineError::DimensionMismatch {
                expected_rows: self.config.rows,
                expected_cols: self.config.cols,
                actual_rows: grid.rows(),
                actual_cols: grid.cols(),
            });
        }
        self.grid = grid;
        self.generation = 0;
        self.publish();
        Ok(())
    }

    pub fn clear(&mut self) {
        let empty = Grid::new(self.config.rows, self.config.cols);
        // Dimensions match by construction.
        let _ = self.replace_grid(empty);
    }

    pub fn randomize(&mut self) {
        let random = Grid::random(
            self.config.rows,
            self.config.cols,
            self.config.alive_probability,
            &mut self.rng,
        );
        let _ = self.replace_grid(random);
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        let grid = pattern.to_grid(self.config.rows, self.config.cols);
        let _ = self.replace_grid(grid);
    }

    /// Transition the running flag. Idempotent apart from the snapshot
    /// notification. Returns the new run epoch on a false-to-true
    /// transition so the caller starts exactly one loop.
    pub fn set_running(&mut self, flag: bool) -> Option<u64> {
        let started = flag && !self.running;
        self.running = flag;
        if started {
            self.run_epoch += 1;
        }
        self.publish();
        if started { Some(self.run_epoch) } else { None }
    }

    /// Advance one generation and publish it.
    pub fn step(&mut self) {
        self.grid = self.grid.next_generation();
        self.generation += 1;
        self.publish();
    }

    fn publish(&self) {
        self.tx.send_replace(Snapshot {
            grid: self.grid.clone(),
            generation: self.generation,
            running: self.running,
        });
    }
}
