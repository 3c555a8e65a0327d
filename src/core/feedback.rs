//! Guess feedback calculation and representation
//!
//! Feedback colors one submitted guess against the target word:
//! - Neutral: letter not in the word (or all its occurrences already used)
//! - Yellow: letter in the word, wrong position
//! - Green: letter in the correct position

use super::Word;

/// Color of one grid cell after evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellColor {
    /// No match (also the color of unevaluated cells)
    #[default]
    Neutral,
    /// Exact position match
    Green,
    /// Letter present elsewhere in the word
    Yellow,
}

/// Feedback for one guessed row
///
/// Holds the five cell colors in position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([CellColor; 5]);

impl Feedback {
    /// All greens (the guess is the target word)
    pub const CORRECT: Self = Self([CellColor::Green; 5]);

    /// Calculate the feedback when `guess` is guessed and `target` is the answer
    ///
    /// Each letter occurrence in the target can satisfy at most one guess
    /// cell: a green consumes its occurrence before any yellow is awarded,
    /// and yellows consume remaining occurrences left to right.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches green and remove them from the
    ///    available pool
    /// 2. Second pass: mark present-but-wrong-position letters yellow from
    ///    the remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_rush::core::{CellColor, Feedback, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// // T(neutral) R(green) A(green) C(yellow) E(green)
    /// assert_eq!(
    ///     feedback.colors(),
    ///     [
    ///         CellColor::Neutral,
    ///         CellColor::Green,
    ///         CellColor::Green,
    ///         CellColor::Yellow,
    ///         CellColor::Green,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [CellColor::Neutral; 5];
        let mut target_available = target.char_counts();

        // First pass: mark greens (exact position matches)
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == target.chars()[i] {
                result[i] = CellColor::Green;

                // Remove from available pool
                let letter = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: mark yellows (wrong position, but letter exists)
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == CellColor::Neutral {
                let letter = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = CellColor::Yellow;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Get the five cell colors in position order
    #[inline]
    #[must_use]
    pub const fn colors(self) -> [CellColor; 5] {
        self.0
    }

    /// Check if the guess matched the target exactly (all greens)
    #[inline]
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == Self::CORRECT
    }

    /// Count the number of green cells
    #[must_use]
    pub fn count_greens(self) -> u8 {
        self.0
            .iter()
            .filter(|&&c| c == CellColor::Green)
            .count() as u8
    }

    /// Count the number of yellow cells
    #[must_use]
    pub fn count_yellows(self) -> u8 {
        self.0
            .iter()
            .filter(|&&c| c == CellColor::Yellow)
            .count() as u8
    }

    /// Convert feedback to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨".
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|color| match color {
                CellColor::Green => '🟩',
                CellColor::Yellow => '🟨',
                CellColor::Neutral => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(s: &str) -> [CellColor; 5] {
        let mut result = [CellColor::Neutral; 5];
        for (i, ch) in s.chars().enumerate() {
            result[i] = match ch {
                'G' => CellColor::Green,
                'Y' => CellColor::Yellow,
                _ => CellColor::Neutral,
            };
        }
        result
    }

    #[test]
    fn feedback_correct_constant() {
        assert!(Feedback::CORRECT.is_correct());
        assert_eq!(Feedback::CORRECT.count_greens(), 5);
        assert_eq!(Feedback::CORRECT.count_yellows(), 0);
    }

    #[test]
    fn feedback_all_neutral() {
        let guess = Word::new("abcde").unwrap();
        let target = Word::new("fghij").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        assert_eq!(feedback.colors(), colors("-----"));
        assert_eq!(feedback.count_greens(), 0);
        assert_eq!(feedback.count_yellows(), 0);
    }

    #[test]
    fn feedback_all_green() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&word, &word);

        assert_eq!(feedback, Feedback::CORRECT);
        assert!(feedback.is_correct());
    }

    #[test]
    fn feedback_trace_against_crane() {
        // TRACE vs CRANE
        // Pass 1: R, A, E are exact matches and consume their occurrences
        // Pass 2: T absent; C remains in the pool so it goes yellow
        let guess = Word::new("trace").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        assert_eq!(feedback.colors(), colors("-GGYG"));
        assert_eq!(feedback.count_greens(), 3);
        assert_eq!(feedback.count_yellows(), 1);
    }

    #[test]
    fn feedback_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE
        // S(yellow) P(neutral) E(yellow) E(yellow) D(neutral)
        // ERASE has two E's, so both guessed E's earn a yellow
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        assert_eq!(feedback.colors(), colors("Y-YY-"));
        assert_eq!(feedback.count_greens(), 0);
        assert_eq!(feedback.count_yellows(), 3);
    }

    #[test]
    fn feedback_duplicate_letters_complex() {
        // ROBOT vs FLOOR
        // R(yellow) O(yellow) B(neutral) O(green) T(neutral)
        // First O is yellow (wrong position), second O is green (correct position)
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        assert_eq!(feedback.colors(), colors("YY-G-"));
        assert_eq!(feedback.count_greens(), 1);
        assert_eq!(feedback.count_yellows(), 2);
    }

    #[test]
    fn feedback_excess_duplicates_stay_neutral() {
        // EEEEE vs CRANE: only one E in the target, so exactly one cell
        // earns a color (the green at position 4)
        let guess = Word::new("eeeee").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        assert_eq!(feedback.colors(), colors("----G"));
    }

    #[test]
    fn feedback_is_valid_multiset_match() {
        // Green + yellow count for a letter never exceeds its count in the target
        let cases = [
            ("speed", "erase"),
            ("robot", "floor"),
            ("eeeee", "crane"),
            ("llama", "label"),
            ("aback", "aaaaa"),
        ];

        for (guess_text, target_text) in cases {
            let guess = Word::new(guess_text).unwrap();
            let target = Word::new(target_text).unwrap();
            let feedback = Feedback::calculate(&guess, &target);

            for letter in b'a'..=b'z' {
                let colored = feedback
                    .colors()
                    .iter()
                    .zip(guess.chars())
                    .filter(|&(&c, &g)| g == letter && c != CellColor::Neutral)
                    .count();
                let in_target = target.chars().iter().filter(|&&t| t == letter).count();

                assert!(
                    colored <= in_target,
                    "{guess_text} vs {target_text}: letter {} colored {colored} times but target has {in_target}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn feedback_symmetry() {
        // Feedback of a word against itself is always all green
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Feedback::calculate(&w, &w), Feedback::CORRECT);
        }
    }

    #[test]
    fn feedback_to_emoji() {
        let guess = Word::new("trace").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        assert_eq!(feedback.to_emoji(), "⬜🟩🟩🟨🟩");
    }
}
