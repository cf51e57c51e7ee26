// sim.rs - Simulation handle and the timer-driven run loop

use crate::engine::{Engine, EngineConfig, EngineError, Snapshot};
use crate::grid::Grid;
use crate::patterns::Pattern;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

/// Shared handle to the engine. The view layer keeps one of these and calls
/// into it on user interaction; starting the simulation spawns a tokio task
/// that steps the engine at the configured cadence until stopped.
///
/// Must be created from within a tokio runtime (the run loop is spawned on
/// the runtime that was current at construction).
pub struct Simulation {
    engine: Arc<Mutex<Engine>>,
    tick_interval: Duration,
    runtime: tokio::runtime::Handle,
}

impl Simulation {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_engine(Engine::new(config))
    }

    pub fn with_engine(engine: Engine) -> Self {
        let tick_interval = engine.config().tick_interval;
        Self {
            engine: Arc::new(Mutex::new(engine)),
            tick_interval,
            runtime: tokio::runtime::Handle::current(),
        }
    }

    /// New receiver for snapshot notifications.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.lock().subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.lock().is_running()
    }

    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<(), EngineError> {
        self.lock().toggle_cell(row, col)
    }

    pub fn replace_grid(&self, grid: Grid) -> Result<(), EngineError> {
        self.lock().replace_grid(grid)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn randomize(&self) {
        self.lock().randomize();
    }

    pub fn apply_pattern(&self, pattern: &Pattern) {
        self.lock().apply_pattern(pattern);
    }

    /// Advance a single generation without starting the loop.
    pub fn step(&self) {
        self.lock().step();
    }

    /// Start or stop the run loop. Starting while already running is a
    /// no-op; stopping lets any in-flight tick finish and prevents further
    /// ones from being scheduled.
    pub fn set_running(&self, flag: bool) {
        let epoch = self.lock().set_running(flag);
        if let Some(epoch) = epoch {
            self.spawn_run_loop(epoch);
        }
    }

    fn spawn_run_loop(&self, epoch: u64) {
        let engine = Arc::clone(&self.engine);
        let interval = self.tick_interval;
        self.runtime.spawn(async move {
            log::debug!("run loop started (epoch {epoch})");
            loop {
                // Consult live run state every tick; a stale flag captured
                // at spawn time must never keep the loop alive.
                {
                    let mut engine = engine.lock().unwrap();
                    if !engine.runs_in_epoch(epoch) {
                        break;
                    }
                    engine.step();
                }
                // Next tick fires one interval after this one completed,
                // so ticks never overlap under load.
                tokio::time::sleep(interval).await;
            }
            log::debug!("run loop stopped (epoch {epoch})");
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Engine> {
        self.engine.lock().unwrap()
    }
}
