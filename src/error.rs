//! Error types for ladder queries

use crate::core::WordError;
use thiserror::Error;

/// Errors raised before or during a ladder search
///
/// A missing ladder is not an error: searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// Two words that must be compared position by position have different lengths
    #[error("Words must be the same length ({left} vs {right} letters)")]
    LengthMismatch { left: usize, right: usize },

    /// A query word does not have the length the index was built for
    #[error("Word has {word} letters but the index holds {index}-letter words")]
    IndexLengthMismatch { word: usize, index: usize },

    /// A query word could not be normalized
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
}
