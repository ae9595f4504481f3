//! Configuration for a game session.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for a reproducible round. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Remove the played word and write the reduced pool to `output`.
    pub consume: bool,
    /// Destination for the reduced pool.
    pub output: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            consume: false,
            output: fa_core::default_consumed_path(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable removal of the played word.
    pub fn with_consume(mut self, consume: bool) -> Self {
        self.consume = consume;
        self
    }

    /// Set where the reduced pool is written.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Build the session RNG: seeded if a seed is configured, otherwise from
    /// OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
