use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Word list is empty")]
    EmptyWordList,
    #[error("Word list needs at least 2 distinct words to avoid repeats, found {distinct}")]
    NotEnoughWords { distinct: usize },
    #[error("Invalid word '{0}': only letters A-Z are allowed")]
    InvalidWord(String),
    #[error("Hidden position {position} is outside of a {len}-letter word")]
    InvalidHiddenPosition { position: usize, len: usize },
    #[error("A round needs at least one hidden position")]
    NoHiddenPositions,
    #[error("No word satisfies the repetition rule")]
    NoEligibleWord,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
