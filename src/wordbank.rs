use crate::error::{GameError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase())
}

fn normalize(line: &str) -> String {
    line.trim().to_uppercase()
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(normalize)
        .filter(|word| is_valid_word(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = normalize(&line?);
        if is_valid_word(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// The fixed, ordered list of words a game draws from.
///
/// Every entry is non-empty uppercase A-Z, and the list holds at least two
/// distinct words so the repetition rule can always be satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        if let Some(bad) = words.iter().find(|w| !is_valid_word(w)) {
            return Err(GameError::InvalidWord(bad.clone()));
        }
        let distinct = words.iter().collect::<HashSet<_>>().len();
        if distinct < 2 {
            return Err(GameError::NotEnoughWords { distinct });
        }
        Ok(Self { words })
    }

    pub fn embedded() -> Result<Self> {
        Self::new(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(load_wordbank_from_file(path)?)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
