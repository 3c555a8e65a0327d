//! Word lists and target-word supply
//!
//! Provides the embedded word list compiled into the binary, a file loader
//! for custom lists, and the word-provider seam the round engine is driven
//! through.

mod embedded;
pub mod loader;
pub mod provider;

pub use embedded::{WORDS, WORDS_COUNT};
pub use provider::{ProviderError, RandomProvider, WordProvider};
