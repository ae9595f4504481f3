//! The shared screen and the operator pacing the reveals.

use std::io;

/// The screen every player looks at.
pub trait RevealDisplay {
    /// Wipe everything visible so no earlier reveal can be read.
    fn clear(&mut self) -> io::Result<()>;

    /// Print a block of text.
    fn show(&mut self, text: &str) -> io::Result<()>;
}

/// Blocks until the operator confirms they are ready to continue.
pub trait Prompter {
    /// Show `prompt` and wait for an explicit acknowledgment.
    fn acknowledge(&mut self, prompt: &str) -> io::Result<()>;
}
