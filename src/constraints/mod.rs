//! Feedback constraints and candidate filtering

mod filter;
mod set;

pub use filter::{exclude_invalid_chars, exclude_invalid_pos, filter, include_matches};
pub use set::ConstraintSet;
