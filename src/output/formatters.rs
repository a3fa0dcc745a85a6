//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a guess with each letter colored by its feedback
#[must_use]
pub fn colored_guess(guess: &Word, mark: &Mark) -> String {
    guess
        .text()
        .chars()
        .zip(mark.feedback())
        .map(|(letter, feedback)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match feedback {
                Feedback::Correct => letter.black().on_green().bold().to_string(),
                Feedback::Present => letter.black().on_yellow().bold().to_string(),
                Feedback::Absent => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Comma-separated preview of candidate words
#[must_use]
pub fn preview_list(words: &[Word]) -> String {
    let texts: Vec<&str> = words.iter().map(Word::text).collect();
    texts.join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{word, words};

    #[test]
    fn preview_joins_with_commas() {
        let candidates = words(&["crate", "grate", "irate"]);
        assert_eq!(preview_list(&candidates), "crate, grate, irate");
        assert_eq!(preview_list(&[]), "");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let mark = Mark::parse("YG--G").unwrap();
        assert_eq!(colored_guess(&word("arose"), &mark), "AROSE");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
