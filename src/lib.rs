// Library interface for hidden-letters
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod round;
pub mod selector;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{GameError, Result};
pub use game_state::{GameInterface, GameState, SessionStats, UserAction, game_loop};
pub use round::{MAX_FAILURES, Outcome, Round, RoundStatus};
pub use selector::WordSelector;
pub use wordbank::{WordList, load_wordbank_from_file, load_wordbank_from_str};
