//! Guess selection and the solving loop
//!
//! Scorers rank candidates, strategies pick one, and the engine runs the
//! guess / feedback / filter cycle.

pub mod config;
mod engine;
pub mod scoring;
pub mod strategy;
mod table;

pub use config::{DEFAULT_MAX_STEPS, SolverConfig, StrategyKind};
pub use engine::{Outcome, Phase, Session, SolveOutcome, Solver, StepRecord};
pub use strategy::Strategy;
pub use table::PairwisePatternTable;
