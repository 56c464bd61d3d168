//! Formatting utilities for terminal output

use crate::core::{Ladder, Word};

/// Format a ladder as uppercased, space-joined words
#[must_use]
pub fn format_ladder(ladder: &Ladder) -> String {
    ladder
        .iter()
        .map(|word| word.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line announcing a found ladder
#[must_use]
pub fn ladder_line(ladder: &Ladder) -> String {
    format!("Shortest Word Ladder: {}", format_ladder(ladder))
}

/// Line announcing that no ladder connects two words
#[must_use]
pub fn no_ladder_line(start: &Word, end: &Word) -> String {
    format!(
        "No word ladder exists from {} to {}",
        start.text().to_uppercase(),
        end.text().to_uppercase()
    )
}

/// Outcome line for an optional ladder
#[must_use]
pub fn outcome_line(start: &Word, end: &Word, ladder: Option<&Ladder>) -> String {
    ladder.map_or_else(|| no_ladder_line(start, end), ladder_line)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(words: &[&str]) -> Ladder {
        Ladder::new(words.iter().map(|w| Word::new(w).unwrap()).collect()).unwrap()
    }

    #[test]
    fn ladder_is_uppercased_and_space_joined() {
        let ladder = ladder(&["cat", "cot", "cog", "dog"]);
        assert_eq!(format_ladder(&ladder), "CAT COT COG DOG");
        assert_eq!(ladder_line(&ladder), "Shortest Word Ladder: CAT COT COG DOG");
    }

    #[test]
    fn single_word_ladder() {
        assert_eq!(format_ladder(&ladder(&["cat"])), "CAT");
    }

    #[test]
    fn no_ladder_message() {
        let start = Word::new("aaa").unwrap();
        let end = Word::new("bbb").unwrap();
        assert_eq!(
            no_ladder_line(&start, &end),
            "No word ladder exists from AAA to BBB"
        );
        assert_eq!(outcome_line(&start, &end, None), no_ladder_line(&start, &end));
    }

    #[test]
    fn outcome_with_ladder() {
        let found = ladder(&["cat", "cot"]);
        let line = outcome_line(found.start(), found.end(), Some(&found));
        assert_eq!(line, "Shortest Word Ladder: CAT COT");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
