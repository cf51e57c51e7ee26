//! Headless Conway's Game of Life engine: grid state, the step rule, and
//! the timer-driven run loop. The UI crate consumes this through
//! [`Simulation`] and redraws from [`Snapshot`] notifications.

pub mod engine;
pub mod grid;
pub mod patterns;
pub mod sim;

pub use engine::{Engine, EngineConfig, EngineError, Snapshot};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use sim::Simulation;
