//! Word Ladder Solver
//!
//! Finds a minimum-cost chain of single-letter substitutions between two words of
//! equal length, using a wildcard-pattern index over the dictionary and a
//! best-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Word;
//! use word_ladder::graph::WordIndex;
//! use word_ladder::solver::min_path;
//!
//! let words: Vec<Word> = ["cat", "cot", "cog", "dog"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let index = WordIndex::build(&words, 3);
//!
//! let ladder = min_path(&index, "cat", "dog").unwrap().unwrap();
//! assert_eq!(ladder.to_string(), "cat cot cog dog");
//! ```

// Core domain types
pub mod core;

// Errors shared by the core and the commands
pub mod error;

// Wildcard pattern index and neighbor lookup
pub mod graph;

// Cost model and ladder search
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::LadderError;
