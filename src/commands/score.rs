//! One-shot guess scoring
//!
//! Evaluates a single guess against a target word and reports the coloring.

use crate::core::{CellColor, Feedback, Word};

/// Result of scoring a guess against a target
pub struct ScoreResult {
    pub target: String,
    pub guess: String,
    pub colors: [CellColor; 5],
    pub correct: bool,
}

/// Score one guess against one target word
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn score_guess(target: &str, guess: &str) -> Result<ScoreResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let feedback = Feedback::calculate(&guess, &target);

    Ok(ScoreResult {
        target: target.text().to_string(),
        guess: guess.text().to_string(),
        colors: feedback.colors(),
        correct: feedback.is_correct(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_exact_match() {
        let result = score_guess("crane", "crane").unwrap();

        assert!(result.correct);
        assert_eq!(result.colors, [CellColor::Green; 5]);
    }

    #[test]
    fn score_partial_match() {
        let result = score_guess("crane", "trace").unwrap();

        assert!(!result.correct);
        assert_eq!(
            result.colors,
            [
                CellColor::Neutral,
                CellColor::Green,
                CellColor::Green,
                CellColor::Yellow,
                CellColor::Green,
            ]
        );
    }

    #[test]
    fn score_is_case_insensitive() {
        let result = score_guess("CRANE", "Crane").unwrap();
        assert!(result.correct);
        assert_eq!(result.target, "crane");
        assert_eq!(result.guess, "crane");
    }

    #[test]
    fn score_invalid_words_return_error() {
        assert!(score_guess("toolong", "crane").is_err());
        assert!(score_guess("crane", "abc").is_err());
        assert!(score_guess("cr4ne", "crane").is_err());
    }
}
