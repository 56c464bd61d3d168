//! Ladder search
//!
//! The cost model, the option set a search runs with, and the best-first
//! search itself.

pub mod cost;
mod engine;
pub mod strategy;

pub use cost::{CostModel, IncrementScope, VowelRule, hamming, is_vowel};
pub use engine::{LadderSearch, SearchReport, min_path};
pub use strategy::SearchOptions;
