use hidden_letters::cli::{CliInterface, parse_cli};
use hidden_letters::logging::{default_log_path, init_logging};
use hidden_letters::tui::TuiInterface;
use hidden_letters::{GameState, Result, WordList, game_loop};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io;
use std::process::ExitCode;

fn run() -> Result<()> {
    let cli = parse_cli();

    let log_path = cli.log_file.clone().or_else(default_log_path);
    init_logging(log_path.as_deref())?;

    let words = match &cli.wordbank_path {
        Some(path) => WordList::from_file(path)?,
        None => WordList::embedded()?,
    };
    log::info!("Loaded {} words", words.len());

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut game = GameState::initialize(words, rng)?;

    let stats = if cli.plain {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&mut game, &mut interface)?
    } else {
        let mut interface = TuiInterface::new()?;
        game_loop(&mut game, &mut interface)?
    };
    log::info!(
        "Session over: {} won, {} lost",
        stats.won,
        stats.lost
    );
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hidden-letters: {e}");
            ExitCode::FAILURE
        }
    }
}
