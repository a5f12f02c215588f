//! Console surface: prompts and status narration
//!
//! The pipeline talks to the user only through [`Ui`], so tests can swap
//! the terminal for [`SilentUi`] with scripted answers.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Trait for UI implementations - allows both the real console and test modes
pub trait Ui {
    /// Ask a question and return the raw answer line, without the newline
    fn prompt(&mut self, question: &str) -> Result<String>;

    /// Show a status line
    fn log(&mut self, message: impl Into<String>);
}

/// Reads answers from stdin and narrates to stdout
pub struct TerminalUi<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Ui for TerminalUi<R, W> {
    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn log(&mut self, message: impl Into<String>) {
        writeln!(self.output, "{}", message.into()).ok();
    }
}

/// Silent UI implementation for testing and non-interactive use.
///
/// Answers prompts from a script (blank once exhausted) and keeps every
/// logged line so tests can inspect the narration.
#[derive(Debug, Default)]
pub struct SilentUi {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
}

impl SilentUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl Ui for SilentUi {
    fn prompt(&mut self, question: &str) -> Result<String> {
        self.prompts.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }

    fn log(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_prompt_strips_newline() {
        let mut out = Vec::new();
        let mut ui = TerminalUi::with_io("Portugal\r\nignored\n".as_bytes(), &mut out);
        assert_eq!(ui.prompt("Country: ").unwrap(), "Portugal");
        ui.log("done");
        drop(ui);
        assert_eq!(String::from_utf8(out).unwrap(), "Country: done\n");
    }

    #[test]
    fn test_terminal_prompt_at_eof() {
        let mut ui = TerminalUi::with_io("".as_bytes(), Vec::new());
        assert_eq!(ui.prompt("Name: ").unwrap(), "");
    }

    #[test]
    fn test_silent_ui_scripted_answers() {
        let mut ui = SilentUi::with_answers(["a", "b"]);
        assert_eq!(ui.prompt("1").unwrap(), "a");
        assert_eq!(ui.prompt("2").unwrap(), "b");
        assert_eq!(ui.prompt("3").unwrap(), "");
        assert_eq!(ui.prompts, ["1", "2", "3"]);
    }
}
