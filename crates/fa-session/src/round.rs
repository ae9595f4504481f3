//! Secret word and impostor selection for a round.

use fa_core::{WordEntry, WordPool};
use tracing::debug;

use crate::error::{SessionError, SessionResult};
use crate::random::RandomSource;
use crate::role::Role;

/// The secret drawn for one round. Immutable once selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSelection {
    entry: WordEntry,
    impostor: usize,
    players: usize,
}

impl RoundSelection {
    /// The drawn category/word pair.
    pub fn entry(&self) -> &WordEntry {
        &self.entry
    }

    /// The category, revealed to everyone at the end.
    pub fn category(&self) -> &str {
        &self.entry.category
    }

    /// The secret word, revealed to artists only.
    pub fn word(&self) -> &str {
        &self.entry.word
    }

    /// Zero-based index of the impostor, always below [`Self::players`].
    pub fn impostor(&self) -> usize {
        self.impostor
    }

    /// Number of players the round was drawn for.
    pub fn players(&self) -> usize {
        self.players
    }

    /// The role of the player at `index`.
    pub fn role_of(&self, index: usize) -> Role {
        if index == self.impostor {
            Role::Impostor
        } else {
            Role::Artist
        }
    }
}

/// Validate a player count given as a signed integer.
pub fn player_count(n: i64) -> SessionResult<usize> {
    usize::try_from(n)
        .ok()
        .filter(|n| *n >= 1)
        .ok_or(SessionError::InvalidPlayerCount(n))
}

/// Draw a category, a word within it, and an impostor.
///
/// The three draws are independent and happen in that order. The pool is
/// only read.
pub fn select_round<R: RandomSource>(
    pool: &WordPool,
    players: usize,
    rng: &mut R,
) -> SessionResult<RoundSelection> {
    if pool.is_empty() {
        return Err(SessionError::EmptyPool);
    }
    if players == 0 {
        return Err(SessionError::InvalidPlayerCount(0));
    }

    let categories: Vec<(&str, &[String])> = pool.iter().collect();
    let &(category, words) = rng
        .uniform_choice(&categories)
        .ok_or(SessionError::EmptyPool)?;
    let word = rng.uniform_choice(words).ok_or(SessionError::EmptyPool)?;
    let impostor = rng.uniform_int(players);

    debug!(
        players,
        categories = categories.len(),
        candidates = words.len(),
        "round selected"
    );

    Ok(RoundSelection {
        entry: WordEntry::new(category, word.as_str()),
        impostor,
        players,
    })
}
