//! Target word supply
//!
//! The engine never picks its own words; a provider hands one over at round
//! start. A provider may fail (empty list, exhausted source), which leaves
//! the round without a target until a later request succeeds. The engine
//! rejects all input in the meantime.

use crate::core::Word;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Error type for word providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    NoWordsAvailable,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable => write!(f, "no words available"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Supplies the target word for each round
pub trait WordProvider {
    /// Supply the target word for the next round
    ///
    /// # Errors
    /// Returns `ProviderError` if no word can be supplied.
    fn next_word(&mut self) -> Result<Word, ProviderError>;
}

/// Picks uniformly at random from a fixed word list
pub struct RandomProvider {
    words: Vec<Word>,
    rng: ThreadRng,
}

impl RandomProvider {
    /// Create a provider drawing from the given words
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            rng: rand::rng(),
        }
    }

    /// Create a provider drawing from the embedded word list
    #[must_use]
    pub fn from_embedded() -> Self {
        use super::WORDS;
        use super::loader::words_from_slice;

        Self::new(words_from_slice(WORDS))
    }
}

impl WordProvider for RandomProvider {
    fn next_word(&mut self) -> Result<Word, ProviderError> {
        self.words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(ProviderError::NoWordsAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn random_provider_draws_from_list() {
        let words = words_from_slice(&["crane", "slate"]);
        let mut provider = RandomProvider::new(words);

        for _ in 0..20 {
            let word = provider.next_word().unwrap();
            assert!(word.text() == "crane" || word.text() == "slate");
        }
    }

    #[test]
    fn random_provider_single_word_is_deterministic() {
        let words = words_from_slice(&["crane"]);
        let mut provider = RandomProvider::new(words);

        assert_eq!(provider.next_word().unwrap().text(), "crane");
    }

    #[test]
    fn random_provider_empty_list_fails() {
        let mut provider = RandomProvider::new(Vec::new());

        assert_eq!(
            provider.next_word(),
            Err(ProviderError::NoWordsAvailable)
        );
    }

    #[test]
    fn embedded_provider_always_succeeds() {
        let mut provider = RandomProvider::from_embedded();
        assert!(provider.next_word().is_ok());
    }
}
