//! Terminal-backed screen and prompter.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use fa_session::{Prompter, RevealDisplay};

/// The shared screen, wiped with ANSI clear sequences so it behaves the same
/// on every platform crossterm supports.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RevealDisplay for TerminalDisplay<W> {
    fn clear(&mut self) -> io::Result<()> {
        // Purge drops the scrollback so earlier reveals cannot be scrolled to.
        execute!(
            self.out,
            Clear(ClearType::All),
            Clear(ClearType::Purge),
            MoveTo(0, 0)
        )
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}\n", text.bold())?;
        self.out.flush()
    }
}

/// Waits for Enter on a line-oriented input.
pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn acknowledge(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for confirmation",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn clear_emits_escape_sequences() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.clear().unwrap();
        let written = String::from_utf8(display.out).unwrap();
        assert!(written.contains("\x1b[2J"));
        assert!(written.contains("\x1b[3J"));
    }

    #[test]
    fn show_writes_text() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.show("You are the FAKE").unwrap();
        let written = String::from_utf8(display.out).unwrap();
        assert!(written.contains("You are the FAKE"));
    }

    #[test]
    fn prompter_consumes_one_line_per_prompt() {
        let mut out = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("\nanything\n"), &mut out);
        prompter.acknowledge("first").unwrap();
        prompter.acknowledge("second").unwrap();
        let err = prompter.acknowledge("third").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        drop(prompter);
        assert_eq!(String::from_utf8(out).unwrap(), "firstsecondthird");
    }
}
