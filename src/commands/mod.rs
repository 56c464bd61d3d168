//! Command implementations

pub mod benchmark;
pub mod neighbors;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use neighbors::{BucketSummary, NeighborsResult, list_neighbors};
pub use simple::{run_simple, run_simple_with};
pub use solve::{LadderResult, SolveConfig, solve_ladder};
