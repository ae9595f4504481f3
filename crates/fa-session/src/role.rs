//! Player roles and the text shown for them.

/// Message shown to the impostor. Contains no part of the secret word.
pub const IMPOSTOR_MESSAGE: &str = "You are the FAKE";

/// A player's role for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Receives the secret word.
    Artist,
    /// Receives only the category at the end and must bluff.
    Impostor,
}

impl Role {
    /// The private message for this role. Artists see the word upper-cased;
    /// the category is never part of it.
    pub fn message(self, word: &str) -> String {
        match self {
            Self::Artist => format!("You are an ARTIST\nThe word is {}.", word.to_uppercase()),
            Self::Impostor => IMPOSTOR_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Artist => write!(f, "artist"),
            Self::Impostor => write!(f, "impostor"),
        }
    }
}

/// The broadcast shown to everyone once all roles are revealed.
pub fn category_message(category: &str) -> String {
    format!("Category is... {}!", category.to_uppercase())
}
