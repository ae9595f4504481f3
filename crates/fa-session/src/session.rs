//! A game session: one pool, one random source, and the rounds played from
//! them.

use std::path::PathBuf;

use fa_core::{CoreError, WordPool};
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::random::RandomSource;
use crate::reveal::RevealSequencer;
use crate::round::{RoundSelection, select_round};
use crate::screen::{Prompter, RevealDisplay};

/// What happened to the reduced pool after a round.
#[derive(Debug)]
pub enum PersistOutcome {
    /// Consumption is disabled; nothing was written.
    Skipped,
    /// The reduced pool was written here.
    Saved(PathBuf),
    /// Writing failed. The round itself still counts.
    Failed {
        /// Where the pool was meant to go.
        path: PathBuf,
        /// Why the write failed.
        error: CoreError,
    },
}

/// The result of a completed round.
#[derive(Debug)]
pub struct SessionOutcome {
    /// The secret that was played.
    pub round: RoundSelection,
    /// Whether the reduced pool was stored.
    pub persisted: PersistOutcome,
}

/// Runs rounds from a word pool.
pub struct GameSession<R = StdRng> {
    pool: WordPool,
    config: SessionConfig,
    rng: R,
}

impl GameSession<StdRng> {
    /// Create a session whose RNG is built from the config.
    pub fn new(pool: WordPool, config: SessionConfig) -> Self {
        let rng = config.rng();
        Self::with_source(pool, config, rng)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session drawing from the given random source.
    pub fn with_source(pool: WordPool, config: SessionConfig, rng: R) -> Self {
        Self { pool, config, rng }
    }

    /// The pool as it currently stands.
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Select a round and reveal it to every player.
    ///
    /// Selection errors surface before anything is shown. An I/O error during
    /// the reveals aborts the round and nothing is persisted. When
    /// consumption is enabled the played word is dropped from the pool and
    /// the pool is written out; a failed write is reported in the outcome
    /// rather than as an error.
    pub fn play<D, P>(
        &mut self,
        players: usize,
        display: &mut D,
        prompter: &mut P,
    ) -> SessionResult<SessionOutcome>
    where
        D: RevealDisplay + ?Sized,
        P: Prompter + ?Sized,
    {
        let round = select_round(&self.pool, players, &mut self.rng)?;
        info!(players, "round started");

        RevealSequencer::new(&round).run(display, prompter)?;
        info!("all roles revealed");

        let persisted = if self.config.consume {
            self.consume(&round)
        } else {
            PersistOutcome::Skipped
        };

        Ok(SessionOutcome { round, persisted })
    }

    fn consume(&mut self, round: &RoundSelection) -> PersistOutcome {
        self.pool.remove(round.entry());
        let path = self.config.output.clone();
        match self.pool.save(&path) {
            Ok(()) => PersistOutcome::Saved(path),
            Err(error) => {
                warn!(path = %path.display(), %error, "could not save reduced word pool");
                PersistOutcome::Failed { path, error }
            }
        }
    }
}
