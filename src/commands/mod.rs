//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod rank;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkReport, SolveReport, run_benchmark, time_solve};
pub use rank::{RankResult, RankedGuess, rank_candidates};
pub use solve::{GuessStep, SolveResult, solve_word};
