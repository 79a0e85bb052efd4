//! Core domain types
//!
//! Words and feedback patterns, plus the comparison that produces patterns.
//! Everything here is pure and has no I/O.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern, compare, compare_mutual};
pub use word::{MAX_WORD_LEN, Word, WordError};
