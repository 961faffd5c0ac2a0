//! Numbered-menu prompt over a line-oriented reader and writer.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::debug;

use od_game::Prompt;

/// Prints numbered choices and reads a 1-based selection per line.
///
/// Anything that is not a listed number re-asks the question. End of input or
/// a read failure counts as no selection.
pub struct MenuPrompt<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> MenuPrompt<R, W> {
    /// Create a prompt reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    fn ask(&mut self, message: &str, labels: &[String]) -> io::Result<Option<usize>> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", message.bold())?;
        for (i, label) in labels.iter().enumerate() {
            writeln!(self.output, "  [{}] {label}", i + 1)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let input = self.line.trim();
            if input.is_empty() {
                continue;
            }

            match input.parse::<usize>() {
                Ok(n) if (1..=labels.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(
                    self.output,
                    "{}",
                    format!("Please enter a number between 1 and {}.", labels.len()).yellow()
                )?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompt for MenuPrompt<R, W> {
    fn choose(&mut self, message: &str, labels: &[String]) -> Option<usize> {
        if labels.is_empty() {
            return None;
        }
        match self.ask(message, labels) {
            Ok(choice) => choice,
            Err(e) => {
                debug!(error = %e, "prompt i/o failed");
                None
            }
        }
    }
}
