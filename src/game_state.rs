use crate::error::Result;
use crate::round::{Outcome, Round, RoundStatus};
use crate::selector::WordSelector;
use crate::wordbank::WordList;
use crate::{debug_log, info_log};
use rand::Rng;

/// Owns the word selector, the current round and the random source.
pub struct GameState<R: Rng> {
    selector: WordSelector,
    round: Round,
    rng: R,
}

impl<R: Rng> GameState<R> {
    /// Select the first word and start the first round.
    pub fn initialize(words: WordList, mut rng: R) -> Result<Self> {
        let mut selector = WordSelector::new(words);
        let round = Self::new_round(&mut selector, &mut rng)?;
        Ok(Self {
            selector,
            round,
            rng,
        })
    }

    fn new_round(selector: &mut WordSelector, rng: &mut R) -> Result<Round> {
        let word = selector.select(rng)?;
        let round = Round::new(&word, rng)?;
        info_log!(
            "New round: {} letters, {} hidden",
            round.revealed().len(),
            round.hidden_positions().len()
        );
        Ok(round)
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn selector(&self) -> &WordSelector {
        &self.selector
    }

    pub fn submit_guess(&mut self, input: &str) -> Outcome {
        if !self.round.is_active() {
            debug_log!("Guess '{}' ignored, round is {:?}", input, self.round.status());
        }
        let outcome = self.round.submit_guess(input);
        debug_log!("Guess '{}' -> {:?}", input.trim(), outcome);
        outcome
    }

    /// Abandon the current round and start a fresh one.
    pub fn reset(&mut self) -> Result<&Round> {
        info_log!("Reset requested, round was {:?}", self.round.status());
        self.round = Self::new_round(&mut self.selector, &mut self.rng)?;
        Ok(&self.round)
    }

    /// Start the next round once a win has been acknowledged.
    pub fn continue_after_win(&mut self) -> Result<&Round> {
        if self.round.status() != RoundStatus::Won {
            debug_log!("continue_after_win() called while round is {:?}", self.round.status());
        }
        self.round = Self::new_round(&mut self.selector, &mut self.rng)?;
        Ok(&self.round)
    }
}

/// Per-process tally of finished rounds. Nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub won: usize,
    pub lost: usize,
    pub streak: usize,
}

impl SessionStats {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won { .. } => {
                self.won += 1;
                self.streak += 1;
            }
            Outcome::Lost { .. } => {
                self.lost += 1;
                self.streak = 0;
            }
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    /// Dismiss the result of a finished round and move on.
    Continue,
    Reset,
    Exit,
}

/// Frontend seam between the game loop and a concrete UI.
pub trait GameInterface {
    fn display_round(&mut self, round: &Round, stats: &SessionStats);
    /// `None` means no action was produced yet (ignored key, invalid line).
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_outcome(&mut self, round: &Round, outcome: &Outcome, stats: &SessionStats);
    fn display_exit_message(&mut self);
}

/// Drive a game through `interface` until the player exits.
pub fn game_loop<R: Rng, I: GameInterface + ?Sized>(
    game: &mut GameState<R>,
    interface: &mut I,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();
    interface.display_round(game.round(), &stats);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::Guess(input) => {
                let outcome = game.submit_guess(&input);
                stats.record(&outcome);
                interface.display_outcome(game.round(), &outcome, &stats);
            }
            UserAction::Continue => match game.round().status() {
                RoundStatus::Active => {
                    debug_log!("Continue ignored while the round is active");
                }
                RoundStatus::Won => {
                    let round = game.continue_after_win()?;
                    interface.display_round(round, &stats);
                }
                RoundStatus::Lost => {
                    let round = game.reset()?;
                    interface.display_round(round, &stats);
                }
            },
            UserAction::Reset => {
                let round = game.reset()?;
                interface.display_round(round, &stats);
            }
        }
    }

    Ok(stats)
}
