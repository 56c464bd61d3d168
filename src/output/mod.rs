//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_ladder_result, print_neighbors_result};
pub use formatters::{format_ladder, outcome_line};
