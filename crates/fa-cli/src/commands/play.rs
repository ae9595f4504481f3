use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use fa_session::{GameSession, PersistOutcome, SessionConfig, player_count};

use crate::terminal::{LinePrompter, TerminalDisplay};

/// Flags that shape a round beyond the positional arguments.
pub struct PlayOptions {
    pub consume: bool,
    pub out: Option<PathBuf>,
    pub seed: Option<u64>,
}

pub fn run(players: i64, words: &Path, options: PlayOptions) -> Result<(), String> {
    let players = player_count(players).map_err(|e| e.to_string())?;
    let pool = super::load_pool(words)?;

    let mut config = SessionConfig::default().with_consume(options.consume);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    if let Some(out) = options.out {
        config = config.with_output(out);
    }

    let mut session = GameSession::new(pool, config);
    let mut display = TerminalDisplay::new(io::stdout());
    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());

    let outcome = session
        .play(players, &mut display, &mut prompter)
        .map_err(|e| e.to_string())?;

    match outcome.persisted {
        PersistOutcome::Skipped => {}
        PersistOutcome::Saved(path) => {
            println!(
                "{}",
                format!("  Remaining words saved to {}", path.display()).dimmed()
            );
        }
        PersistOutcome::Failed { path, error } => {
            eprintln!(
                "{} could not save remaining words to {}: {error}",
                "warning:".yellow().bold(),
                path.display()
            );
        }
    }

    Ok(())
}
