//! Core domain types for word ladders
//!
//! Pure value types: words, wildcard patterns and finished ladders.

mod ladder;
mod pattern;
mod word;

pub use ladder::Ladder;
pub use pattern::{Pattern, WILDCARD, patterns};
pub use word::{Word, WordError};
