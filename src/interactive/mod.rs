//! Full-screen terminal interface
//!
//! Two entry fields for the start and end words and a panel showing the ladder.

pub mod app;
pub mod rendering;

pub use app::{App, Field, run_tui};
