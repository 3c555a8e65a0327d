//! Core domain types
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{CellColor, Feedback};
pub use word::{Word, WordError};
