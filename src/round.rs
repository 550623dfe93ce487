//! A single round: one target word, some hidden letters, and the guesses made against it.
//!
//! Guesses are sequential. Only the lowest-index hidden letter can be filled,
//! so a correct letter for a later slot still counts as a failure.

use crate::error::{GameError, Result};
use rand::Rng;
use rand::seq::index;

/// Wrong guesses allowed before the round is lost.
pub const MAX_FAILURES: u8 = 5;
pub const MIN_HIDDEN: usize = 2;
pub const MAX_HIDDEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

/// Result of submitting one guess, carrying what a frontend needs to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was not a single A-Z letter, or the round is already over.
    NoOp,
    Correct { position: usize, letter: char },
    Incorrect { letter: char, failures: u8 },
    Won { position: usize, letter: char, word: String },
    Lost { letter: char, word: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    word: Vec<char>,
    revealed: Vec<Option<char>>,
    hidden_positions: Vec<usize>,
    failures: u8,
    wrong_letters: Vec<char>,
    status: RoundStatus,
}

/// Uppercase and trim `input`, accepting it only if a single A-Z letter remains.
#[must_use]
pub fn normalize_guess(input: &str) -> Option<char> {
    let upper = input.trim().to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(c),
        _ => None,
    }
}

impl Round {
    /// Start a round for `word`, hiding between 2 and 5 random letters.
    ///
    /// The count is clamped to the word length, so a two-letter word is fully hidden.
    pub fn new<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<Self> {
        let len = word.chars().count();
        let num_to_hide = rng.gen_range(MIN_HIDDEN..=MAX_HIDDEN).min(len);
        let positions = index::sample(rng, len, num_to_hide).into_vec();
        Self::with_hidden(word, &positions)
    }

    /// Start a round with an explicit set of hidden positions.
    pub fn with_hidden(word: &str, hidden_positions: &[usize]) -> Result<Self> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GameError::InvalidWord(word.to_string()));
        }
        if hidden_positions.is_empty() {
            return Err(GameError::NoHiddenPositions);
        }
        let word: Vec<char> = word.chars().collect();
        let len = word.len();
        if let Some(&position) = hidden_positions.iter().find(|&&p| p >= len) {
            return Err(GameError::InvalidHiddenPosition { position, len });
        }

        let mut hidden = hidden_positions.to_vec();
        hidden.sort_unstable();
        hidden.dedup();

        let revealed = word
            .iter()
            .enumerate()
            .map(|(i, &c)| (hidden.binary_search(&i).is_err()).then_some(c))
            .collect();

        Ok(Self {
            word,
            revealed,
            hidden_positions: hidden,
            failures: 0,
            wrong_letters: Vec::new(),
            status: RoundStatus::Active,
        })
    }

    #[must_use]
    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    #[must_use]
    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// Sorted indices that started out hidden.
    #[must_use]
    pub fn hidden_positions(&self) -> &[usize] {
        &self.hidden_positions
    }

    #[must_use]
    pub fn failures(&self) -> u8 {
        self.failures
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u8 {
        MAX_FAILURES - self.failures
    }

    /// Wrong letters in the order they were first guessed.
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::Active
    }

    /// Index of the letter the next guess is checked against.
    #[must_use]
    pub fn next_hidden_index(&self) -> Option<usize> {
        self.revealed.iter().position(Option::is_none)
    }

    /// The word with unknown letters shown as `_`, e.g. `D E S _`.
    #[must_use]
    pub fn masked(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn submit_guess(&mut self, input: &str) -> Outcome {
        if !self.is_active() {
            return Outcome::NoOp;
        }
        let Some(letter) = normalize_guess(input) else {
            return Outcome::NoOp;
        };
        let Some(position) = self.next_hidden_index() else {
            return Outcome::NoOp;
        };

        if self.word[position] == letter {
            self.revealed[position] = Some(letter);
            if self.next_hidden_index().is_none() {
                self.status = RoundStatus::Won;
                return Outcome::Won {
                    position,
                    letter,
                    word: self.word(),
                };
            }
            return Outcome::Correct { position, letter };
        }

        self.failures += 1;
        if !self.wrong_letters.contains(&letter) {
            self.wrong_letters.push(letter);
        }
        if self.failures >= MAX_FAILURES {
            self.status = RoundStatus::Lost;
            Outcome::Lost {
                letter,
                word: self.word(),
            }
        } else {
            Outcome::Incorrect {
                letter,
                failures: self.failures,
            }
        }
    }
}
