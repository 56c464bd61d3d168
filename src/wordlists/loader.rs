//! Dictionary loading utilities
//!
//! Provides functions to load a dictionary from a file or from the embedded list.
//!
//! Only entries made of ASCII letters become words. Lines such as `co-op`,
//! `naïve` or `can't` are dropped rather than indexed as plain strings, and so
//! is anything containing `?`, which the pattern index reserves as its
//! wildcard.

use super::{DICTIONARY, Dictionary};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load a dictionary from a file, one word per line
///
/// Lines are trimmed and lowercased. Blank lines and lines that are not a
/// single run of ASCII letters are skipped: hyphens, apostrophes, accented
/// letters, digits and the `?` wildcard all disqualify a line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("Dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());

    debug!(path = %path.display(), words = words.len(), "loaded dictionary file");
    Ok(words)
}

/// Convert a string slice to a dictionary, skipping invalid entries
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Cat", "dog", "c4t"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    words_from_lines(slice.iter().copied())
}

/// The dictionary compiled into the binary
#[must_use]
pub fn embedded() -> Dictionary {
    words_from_slice(DICTIONARY)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Dictionary {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}
