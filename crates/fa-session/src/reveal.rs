//! Sequencing of the private role reveals.
//!
//! Each player walks through three stages on the shared screen: a blank
//! screen waiting for them to step up, their role, and a confirmation that
//! wipes the screen again. After the last player the category is broadcast
//! to everyone.
//!
//! ```text
//! AwaitingPlayer(0) -> ShowingRole(0) -> AwaitingConfirm(0)
//!   -> AwaitingPlayer(1) -> ... -> AwaitingConfirm(n-1)
//!   -> ShowingCategory -> Done
//! ```

use tracing::trace;

use crate::error::SessionResult;
use crate::role::category_message;
use crate::round::RoundSelection;
use crate::screen::{Prompter, RevealDisplay};

/// Prompt shown on a blank screen before a player's role.
pub const SEE_ROLE_PROMPT: &str = "Press enter to see your role...";

/// Prompt shown under a role before the screen is wiped.
pub const CONFIRM_PROMPT: &str = "Press enter to confirm...";

/// Where the reveal sequence currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    /// Blank screen, waiting for player `i` to step up.
    AwaitingPlayer(usize),
    /// Player `i`'s role is on screen.
    ShowingRole(usize),
    /// Waiting for player `i` to confirm they have read their role.
    AwaitingConfirm(usize),
    /// Every role has been seen; the category goes up for everyone.
    ShowingCategory,
    /// The sequence is finished.
    Done,
}

impl RevealStage {
    /// The stage after this one for a round of `players` players.
    pub fn next(self, players: usize) -> Self {
        match self {
            Self::AwaitingPlayer(i) => Self::ShowingRole(i),
            Self::ShowingRole(i) => Self::AwaitingConfirm(i),
            Self::AwaitingConfirm(i) if i + 1 < players => Self::AwaitingPlayer(i + 1),
            Self::AwaitingConfirm(_) => Self::ShowingCategory,
            Self::ShowingCategory | Self::Done => Self::Done,
        }
    }

    /// Whether the sequence has finished.
    pub fn is_done(self) -> bool {
        self == Self::Done
    }
}

/// Drives one round's reveals over a display and a prompter.
///
/// Any I/O failure stops the sequence where it is: role secrecy cannot be
/// guaranteed on a screen that can no longer be cleared, and a partial
/// sequence cannot be resumed.
#[derive(Debug)]
pub struct RevealSequencer<'a> {
    round: &'a RoundSelection,
    stage: RevealStage,
}

impl<'a> RevealSequencer<'a> {
    /// Start a sequence at the first player.
    pub fn new(round: &'a RoundSelection) -> Self {
        Self {
            round,
            stage: RevealStage::AwaitingPlayer(0),
        }
    }

    /// The current stage.
    pub fn stage(&self) -> RevealStage {
        self.stage
    }

    /// Perform the current stage's screen work and advance.
    pub fn step<D, P>(&mut self, display: &mut D, prompter: &mut P) -> SessionResult<RevealStage>
    where
        D: RevealDisplay + ?Sized,
        P: Prompter + ?Sized,
    {
        match self.stage {
            RevealStage::AwaitingPlayer(_) => {
                display.clear()?;
                prompter.acknowledge(SEE_ROLE_PROMPT)?;
            }
            RevealStage::ShowingRole(i) => {
                display.clear()?;
                display.show(&self.round.role_of(i).message(self.round.word()))?;
            }
            RevealStage::AwaitingConfirm(_) => {
                prompter.acknowledge(CONFIRM_PROMPT)?;
                display.clear()?;
            }
            RevealStage::ShowingCategory => {
                display.clear()?;
                display.show(&category_message(self.round.category()))?;
            }
            RevealStage::Done => return Ok(RevealStage::Done),
        }

        self.stage = self.stage.next(self.round.players());
        trace!(stage = ?self.stage, "reveal advanced");
        Ok(self.stage)
    }

    /// Run every remaining stage.
    pub fn run<D, P>(&mut self, display: &mut D, prompter: &mut P) -> SessionResult<()>
    where
        D: RevealDisplay + ?Sized,
        P: Prompter + ?Sized,
    {
        while !self.stage.is_done() {
            self.step(display, prompter)?;
        }
        Ok(())
    }
}

/// The private message for each player in order, followed by the category
/// broadcast. Performs no I/O.
#[cfg(test)]
fn transcript(round: &RoundSelection) -> Vec<String> {
    (0..round.players())
        .map(|i| round.role_of(i).message(round.word()))
        .chain(std::iter::once(category_message(round.category())))
        .collect()
}
