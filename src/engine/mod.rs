//! Round engine
//!
//! The guess grid, the round/game state machine, and the side-effect
//! requests it hands back to the presentation layer.

mod grid;
mod round;

pub use grid::{COLS, Cell, Grid, ROWS};
pub use round::{
    Effect, LOSS_PENALTY, ROUND_SECONDS, ResetKind, RoundEngine, RoundState, STARTING_SCORE,
    STREAK_TARGET, WIN_REWARD,
};
