//! Dictionaries for word ladders
//!
//! A dictionary is an ordered set of words. Ordered iteration keeps index
//! buckets, and therefore search results, identical from run to run.

mod embedded;
pub mod loader;

use crate::core::Word;
use std::collections::BTreeSet;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

/// Set of normalized dictionary words
pub type Dictionary = BTreeSet<Word>;
