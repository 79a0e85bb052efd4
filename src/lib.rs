//! Wordle Sieve
//!
//! A feedback-game solver: compare words into hit/present/miss patterns,
//! fold the feedback into constraints, sieve a dictionary down to the words
//! that still fit, and rank them by letter frequency or outcome entropy.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::{Word, compare};
//! use wordle_sieve::solver::{Solver, SolverConfig};
//! use wordle_sieve::wordlists::Dictionary;
//!
//! let secret = Word::new("solar").unwrap();
//! let guess = Word::new("arose").unwrap();
//! println!("Pattern: {}", compare(&secret, &guess).unwrap());
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();
//! let result = solver.solve(&secret).unwrap();
//! println!("Solved in {} guesses", result.guess_count());
//! ```

// Core domain types
pub mod core;

// Accumulated feedback and candidate filtering
pub mod constraints;

pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
