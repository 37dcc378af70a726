//! Interactive console seam.
//!
//! The wizard talks to the operator exclusively through the [`Prompter`]
//! trait so tests can script a whole session without a terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Confirm, Input};

use crate::error::Result;

/// Operator console for the wizard: narration and line-oriented input.
pub trait Prompter {
    /// Print a line of guidance to the operator.
    fn say(&mut self, msg: &str);

    /// Prompt for one line of input, trailing newline stripped, otherwise
    /// verbatim.
    fn line(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal-backed prompter.
///
/// Uses dialoguer when stdin is a terminal, plain line reads otherwise so
/// piped input still works.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn read_piped_line(&self, prompt: &str) -> Result<String> {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut buf = String::new();
        io::stdin().lock().read_line(&mut buf)?;
        Ok(buf.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn say(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn line(&mut self, prompt: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            let value: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            Ok(value)
        } else {
            self.read_piped_line(prompt)
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        if io::stdin().is_terminal() {
            Ok(Confirm::new()
                .with_prompt(prompt)
                .default(default)
                .interact()?)
        } else {
            let answer = self.read_piped_line(&format!("{} (y/n)", prompt))?;
            Ok(answer.trim().eq_ignore_ascii_case("y"))
        }
    }
}
