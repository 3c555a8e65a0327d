//! Round state machine
//!
//! The engine is a sequential reducer: every external event (character
//! input, timer expiry, round reset) mutates state synchronously and
//! returns the side-effect requests the shell must carry out. Nothing in
//! here blocks, and no state is ever derived from more than one flag.

use super::grid::{COLS, Grid, ROWS};
use crate::core::{Feedback, Word};

/// Points a fresh game starts with
pub const STARTING_SCORE: i32 = 2;
/// Points awarded for guessing the word
pub const WIN_REWARD: i32 = 2;
/// Points deducted on any lost round
pub const LOSS_PENALTY: i32 = 1;
/// Consecutive round wins needed to win the game
pub const STREAK_TARGET: u32 = 3;
/// Round clock in seconds
pub const ROUND_SECONDS: u32 = 150;

/// State of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// Why a round is being reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetKind {
    /// Advance to the next word; score and streak carry over
    NextWord,
    /// The streak target was reached; score and streak start over
    GameWon,
    /// The score hit zero; score and streak start over
    GameLost,
}

/// Side-effect requests returned from engine mutations
///
/// The engine never performs I/O itself; the shell executes these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move input focus to this cell
    MoveFocus { row: usize, col: usize },
    /// Ask the word provider for a fresh target word
    RequestWord,
    /// Cancel any running round clock and start a new one
    RestartTimer,
}

/// The round engine
///
/// Owns the guess grid, the target word, the round state, and the game
/// progress (score and win streak).
#[derive(Debug, Clone)]
pub struct RoundEngine {
    grid: Grid,
    target: Option<Word>,
    state: RoundState,
    score: i32,
    win_streak: u32,
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundEngine {
    /// Create an engine for a fresh game
    ///
    /// The grid is empty and no target word is loaded yet; input is rejected
    /// until one arrives via [`RoundEngine::set_target`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            target: None,
            state: RoundState::InProgress,
            score: STARTING_SCORE,
            win_streak: 0,
        }
    }

    /// The guess grid (letters and colors)
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// State of the current round
    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Current score
    #[inline]
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Count of consecutive won rounds
    #[inline]
    #[must_use]
    pub const fn win_streak(&self) -> u32 {
        self.win_streak
    }

    /// The target word for this round, if one has been delivered
    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    /// Deliver the target word for the current round
    pub fn set_target(&mut self, word: Word) {
        self.target = Some(word);
    }

    /// The game is won: the round was won and the streak hit its target
    #[must_use]
    pub fn game_won(&self) -> bool {
        self.state == RoundState::Won && self.win_streak == STREAK_TARGET
    }

    /// The game is lost: the round was lost and the score is depleted
    #[must_use]
    pub fn game_lost(&self) -> bool {
        self.state == RoundState::Lost && self.score == 0
    }

    /// Submit one character into a grid cell
    ///
    /// Invalid input is silently ignored (no effects, no state change): a
    /// non-alphabetic character, an out-of-range cell, a finished round, a
    /// cell that is not next in fill order, or a round with no target word
    /// loaded yet. Leniency here is deliberate; the caller never needs to
    /// handle a rejection.
    ///
    /// A successful write requests a focus move to the next cell, and
    /// completing the last cell of a row evaluates that row's guess.
    pub fn submit_char(&mut self, value: char, row: usize, col: usize) -> Vec<Effect> {
        if !value.is_ascii_alphabetic()
            || self.state != RoundState::InProgress
            || self.target.is_none()
            || !self.grid.is_open(row, col)
        {
            return Vec::new();
        }

        self.grid.set_letter(row, col, value);

        let mut effects = Vec::new();
        if col + 1 < COLS {
            effects.push(Effect::MoveFocus { row, col: col + 1 });
        } else if row + 1 < ROWS {
            effects.push(Effect::MoveFocus {
                row: row + 1,
                col: 0,
            });
        }

        if col == COLS - 1 {
            self.evaluate_row(row);
        }

        effects
    }

    /// Evaluate the completed guess in `row` against the target word
    fn evaluate_row(&mut self, row: usize) {
        let Some(target) = &self.target else {
            return;
        };
        let Some(text) = self.grid.row_text(row) else {
            return;
        };
        // Cells only ever hold ASCII letters, so this cannot fail
        let Ok(guess) = Word::new(text) else {
            return;
        };

        let feedback = Feedback::calculate(&guess, target);
        self.grid.paint_row(row, feedback.colors());

        if feedback.is_correct() {
            self.state = RoundState::Won;
            self.score += WIN_REWARD;
            self.win_streak += 1;
        } else if row == ROWS - 1 {
            self.lose_round();
        }
    }

    /// The round clock ran out
    ///
    /// Ignored unless the round is still in progress; the shell discards
    /// stale timer signals, but a late tick racing a win costs nothing here.
    pub fn timer_expired(&mut self) {
        if self.state == RoundState::InProgress {
            self.lose_round();
        }
    }

    // Every Lost transition costs a point and breaks the streak, whether
    // the round ended by exhaustion or by timeout.
    fn lose_round(&mut self) {
        self.state = RoundState::Lost;
        self.score -= LOSS_PENALTY;
        self.win_streak = 0;
    }

    /// Start a new round
    ///
    /// Always clears the grid and colors, drops the target word (a fresh one
    /// must be requested), and requests a timer restart plus focus on the
    /// first cell. `GameWon` and `GameLost` additionally reset the score and
    /// streak for a fresh game.
    pub fn reset_round(&mut self, kind: ResetKind) -> Vec<Effect> {
        self.grid.clear();
        self.target = None;
        self.state = RoundState::InProgress;

        if matches!(kind, ResetKind::GameWon | ResetKind::GameLost) {
            self.score = STARTING_SCORE;
            self.win_streak = 0;
        }

        vec![
            Effect::RequestWord,
            Effect::RestartTimer,
            Effect::MoveFocus { row: 0, col: 0 },
        ]
    }
}
