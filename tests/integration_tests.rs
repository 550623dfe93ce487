// Integration tests for the hidden-letters game
// These tests verify that all modules work together correctly

use hidden_letters::cli::CliInterface;
use hidden_letters::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

/// Words made of a single repeated letter, so "A" always matches the next slot
/// no matter which positions are hidden.
fn all_a_words() -> WordList {
    WordList::new(vec!["AAAA".to_string(), "AAAAA".to_string(), "AAAAAA".to_string()]).unwrap()
}

fn play(words: WordList, seed: u64, input: &str) -> (GameState<StdRng>, SessionStats) {
    let mut game = GameState::initialize(words, StdRng::seed_from_u64(seed)).unwrap();
    let mut interface = CliInterface::new(Cursor::new(input.to_string()));
    let stats = game_loop(&mut game, &mut interface).unwrap();
    (game, stats)
}

#[test]
fn test_end_to_end_win_and_continue() {
    // Five guesses always cover the hidden letters; extras are ignored once won
    let input = "a\na\na\na\na\nnext\na\na\na\na\na\nexit\n";
    let (game, stats) = play(all_a_words(), 1, input);

    assert_eq!(
        stats,
        SessionStats {
            won: 2,
            lost: 0,
            streak: 2
        }
    );
    assert_eq!(game.round().status(), RoundStatus::Won);
}

#[test]
fn test_end_to_end_loss_then_win() {
    let input = "z\nq\nr\nt\nm\nnext\na\na\na\na\na\n";
    let (game, stats) = play(all_a_words(), 2, input);

    assert_eq!(
        stats,
        SessionStats {
            won: 1,
            lost: 1,
            streak: 1
        }
    );
    assert_eq!(game.round().failures(), 0);
}

#[test]
fn test_end_to_end_loss_records_wrong_letters() {
    let (game, stats) = play(all_a_words(), 3, "z\nq\nr\nt\nm\n");

    assert_eq!(stats.lost, 1);
    let round = game.round();
    assert_eq!(round.status(), RoundStatus::Lost);
    assert_eq!(round.failures(), MAX_FAILURES);
    assert_eq!(round.wrong_letters(), ['Z', 'Q', 'R', 'T', 'M']);
}

#[test]
fn test_malformed_input_costs_nothing() {
    let (game, stats) = play(all_a_words(), 4, "1\nab\n\n??\n  \nexit\n");

    assert_eq!(stats, SessionStats::default());
    let round = game.round();
    assert!(round.is_active());
    assert_eq!(round.failures(), 0);
    assert!(round.wrong_letters().is_empty());
    assert_eq!(
        round.revealed().iter().filter(|s| s.is_none()).count(),
        round.hidden_positions().len()
    );
}

#[test]
fn test_reset_mid_round_starts_fresh() {
    let (game, stats) = play(all_a_words(), 5, "z\nz\nreset\n");

    assert_eq!(stats, SessionStats::default());
    assert_eq!(game.round().failures(), 0);
    assert!(game.round().wrong_letters().is_empty());
}

#[test]
fn test_eof_exits_cleanly() {
    let (game, stats) = play(all_a_words(), 6, "");
    assert_eq!(stats, SessionStats::default());
    assert!(game.round().is_active());
}

#[test]
fn test_desa_scenario_through_public_api() {
    let mut round = Round::with_hidden("DESA", &[1, 3]).unwrap();
    assert_eq!(round.masked(), "D _ S _");

    assert!(matches!(round.submit_guess("e"), Outcome::Correct { position: 1, .. }));
    assert_eq!(round.masked(), "D E S _");
    assert!(matches!(round.submit_guess("Z"), Outcome::Incorrect { failures: 1, .. }));
    assert_eq!(round.wrong_letters(), ['Z']);
    assert!(matches!(round.submit_guess("A"), Outcome::Won { ref word, .. } if word == "DESA"));
}

#[test]
fn test_embedded_list_selection_constraints() {
    let words = WordList::embedded().unwrap();
    let mut game = GameState::initialize(words, StdRng::seed_from_u64(7)).unwrap();

    let mut picks = vec![game.round().word()];
    for _ in 0..300 {
        picks.push(game.reset().unwrap().word());
    }
    for window in picks.windows(3) {
        assert_ne!(window[0], window[1]);
        assert_ne!(window[1], window[2]);
    }
}

#[test]
fn test_every_round_hides_valid_positions() {
    let words = WordList::embedded().unwrap();
    let mut game = GameState::initialize(words, StdRng::seed_from_u64(8)).unwrap();

    for _ in 0..200 {
        let round = game.reset().unwrap();
        let len = round.word().len();
        let hidden = round.hidden_positions();
        assert_eq!(round.revealed().len(), len);
        assert!(hidden.len() >= 2 && hidden.len() <= 5usize.min(len));
        for (i, slot) in round.revealed().iter().enumerate() {
            assert_eq!(slot.is_none(), hidden.contains(&i));
        }
    }
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("hidden_letters_integration_words.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "aaaa").unwrap();
        writeln!(file, "aaaaa").unwrap();
        writeln!(file, "not a word").unwrap();
    }

    let words = WordList::from_file(&path).unwrap();
    assert_eq!(words.len(), 2);

    let (_, stats) = play(words, 9, "a\na\na\na\na\nexit\n");
    assert_eq!(stats.won, 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_too_small_word_list_is_a_startup_error() {
    let words = load_wordbank_from_str("desa\nDESA\n");
    assert!(matches!(
        WordList::new(words),
        Err(GameError::NotEnoughWords { distinct: 1 })
    ));
}
