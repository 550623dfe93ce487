use crate::game_state::{GameInterface, SessionStats, UserAction};
use crate::round::{MAX_FAILURES, Outcome, Round, normalize_guess};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Guess the hidden letters of a word, left to right, before five mistakes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (defaults to the built-in list)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Seed for the random word and letter choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the line-based interface instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Where to write log output
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum LineInput {
    Action(UserAction),
    Invalid,
    Eof,
}

pub fn parse_line(line: &str) -> LineInput {
    let input = line.trim().to_uppercase();
    match input.as_str() {
        "EXIT" | "QUIT" => LineInput::Action(UserAction::Exit),
        "NEXT" => LineInput::Action(UserAction::Continue),
        "RESET" => LineInput::Action(UserAction::Reset),
        _ if normalize_guess(&input).is_some() => LineInput::Action(UserAction::Guess(input)),
        _ => LineInput::Invalid,
    }
}

pub fn read_line_input<R: BufRead>(reader: &mut R) -> LineInput {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => LineInput::Eof,
        Ok(_) => parse_line(&line),
    }
}

fn format_wrong_letters(round: &Round) -> String {
    round
        .wrong_letters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_round(round: &Round, stats: &SessionStats) {
    println!();
    println!("Word: {}", round.masked());
    println!(
        "Failures: {}/{} | Wrong letters: {}",
        round.failures(),
        MAX_FAILURES,
        format_wrong_letters(round)
    );
    println!(
        "Won: {} | Lost: {} | Streak: {}",
        stats.won, stats.lost, stats.streak
    );
    println!("Enter the next hidden letter ('reset' for a new word, 'exit' to quit):");
}

pub fn display_outcome(round: &Round, outcome: &Outcome) {
    match outcome {
        Outcome::NoOp if round.is_active() => {
            println!("Enter a single letter A-Z.");
        }
        Outcome::NoOp => {
            println!("This round is over. Type 'next' to play again.");
        }
        Outcome::Correct { letter, .. } => {
            println!("Correct: {letter}");
            println!("Word: {}", round.masked());
        }
        Outcome::Incorrect { letter, failures } => {
            println!("Wrong: {letter} ({failures}/{MAX_FAILURES})");
            println!("Word: {}", round.masked());
            println!("Wrong letters: {}", format_wrong_letters(round));
        }
        Outcome::Won { word, .. } => {
            println!("Solved! The word was {word}.");
            println!("Type 'next' for the next word.");
        }
        Outcome::Lost { word, .. } => {
            println!("Out of attempts after {MAX_FAILURES} failures. The word was {word}.");
            println!("Type 'next' or 'reset' to try a new word.");
        }
    }
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, round: &Round, stats: &SessionStats) {
        display_round(round, stats);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_line_input(&mut self.reader) {
            LineInput::Action(action) => Some(action),
            LineInput::Eof => Some(UserAction::Exit),
            LineInput::Invalid => {
                println!("Enter a single letter A-Z, 'next', 'reset' or 'exit'.");
                None
            }
        }
    }

    fn display_outcome(&mut self, round: &Round, outcome: &Outcome, _stats: &SessionStats) {
        display_outcome(round, outcome);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_parses_all_options() {
        let cli = Cli::try_parse_from([
            "hidden-letters",
            "-i",
            "words.txt",
            "--seed",
            "42",
            "--plain",
            "--log-file",
            "/tmp/game.log",
        ])
        .unwrap();
        assert_eq!(cli.wordbank_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.plain);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/game.log")));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["hidden-letters"]).unwrap();
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.plain);
    }

    #[test]
    fn test_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["hidden-letters", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_parse_line_commands() {
        assert!(matches!(parse_line("exit\n"), LineInput::Action(UserAction::Exit)));
        assert!(matches!(parse_line("QUIT"), LineInput::Action(UserAction::Exit)));
        assert!(matches!(parse_line(" next "), LineInput::Action(UserAction::Continue)));
        assert!(matches!(parse_line("Reset"), LineInput::Action(UserAction::Reset)));
    }

    #[test]
    fn test_parse_line_guesses() {
        match parse_line("e\n") {
            LineInput::Action(UserAction::Guess(g)) => assert_eq!(g, "E"),
            _ => panic!("Expected Guess"),
        }
        assert!(matches!(parse_line("ab"), LineInput::Invalid));
        assert!(matches!(parse_line("1"), LineInput::Invalid));
        assert!(matches!(parse_line(""), LineInput::Invalid));
    }

    #[test]
    fn test_read_line_input_eof() {
        let mut reader = Cursor::new("");
        assert!(matches!(read_line_input(&mut reader), LineInput::Eof));
    }

    #[test]
    fn test_cli_interface_reads_sequence() {
        let mut ui = CliInterface::new(Cursor::new("a\n??\nnext\n"));
        assert_eq!(ui.read_action(), Some(UserAction::Guess("A".to_string())));
        assert_eq!(ui.read_action(), None);
        assert_eq!(ui.read_action(), Some(UserAction::Continue));
        assert_eq!(ui.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_format_wrong_letters() {
        let mut round = Round::with_hidden("DESA", &[1]).unwrap();
        round.submit_guess("Z");
        round.submit_guess("Q");
        assert_eq!(format_wrong_letters(&round), "Z, Q");
    }
}
