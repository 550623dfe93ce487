use crate::debug_log;
use crate::error::{GameError, Result};
use crate::wordbank::WordList;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Number of recent selections the repetition rule looks at.
pub const HISTORY_LEN: usize = 3;

/// A word may appear at most this many times inside the history window.
const MAX_OCCURRENCES: usize = 2;

/// Picks words from a [`WordList`] while avoiding repeats.
///
/// A candidate is rejected when it equals the previous selection, or when it
/// already occurs twice in the last [`HISTORY_LEN`] selections.
#[derive(Debug, Clone)]
pub struct WordSelector {
    words: WordList,
    history: VecDeque<String>,
}

impl WordSelector {
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            history: VecDeque::with_capacity(HISTORY_LEN + 1),
        }
    }

    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Recent selections, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_eligible(&self, candidate: &str) -> bool {
        let repeats_last = self.history.back().is_some_and(|last| last == candidate);
        let occurrences = self.history.iter().filter(|w| *w == candidate).count();
        !repeats_last && occurrences < MAX_OCCURRENCES
    }

    /// Draw a word uniformly among the eligible list entries and record it.
    pub fn select<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String> {
        let eligible: Vec<&String> = self
            .words
            .words()
            .iter()
            .filter(|w| self.is_eligible(w))
            .collect();
        let word = eligible
            .choose(rng)
            .map(|w| (*w).clone())
            .ok_or(GameError::NoEligibleWord)?;

        self.history.push_back(word.clone());
        if self.history.len() > HISTORY_LEN {
            self.history.pop_front();
        }
        debug_log!("Selected word '{}', history: {:?}", word, self.history);
        Ok(word)
    }
}
