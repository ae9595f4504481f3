//! Game session runner for Fake Artist.
//!
//! Draws a secret word and an impostor for a round, then walks the players
//! through their private role reveals on a shared screen. Terminal access,
//! operator input, and randomness are injected through the [`RevealDisplay`],
//! [`Prompter`] and [`RandomSource`] traits so a whole round can be driven
//! from tests.

pub mod config;
pub mod error;
pub mod random;
pub mod reveal;
pub mod role;
pub mod round;
pub mod screen;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use random::RandomSource;
pub use reveal::{RevealSequencer, RevealStage};
pub use role::Role;
pub use round::{RoundSelection, player_count, select_round};
pub use screen::{Prompter, RevealDisplay};
pub use session::{GameSession, PersistOutcome, SessionOutcome};
