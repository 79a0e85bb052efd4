//! Word lists for solving
//!
//! Provides the [`Dictionary`] type and an embedded word list compiled into
//! the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
