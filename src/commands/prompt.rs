//! Line-oriented console input

use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Write};
use std::ops::RangeInclusive;

/// Reads prompted answers from a line-based input
pub struct Prompt<R> {
    input: R,
}

impl Prompt<StdinLock<'static>> {
    /// Prompt reading from standard input
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompt<R> {
    pub const fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or when the input is closed.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            bail!("input closed");
        }
        Ok(buffer.trim().to_string())
    }

    /// Read a non-empty line, asking again until one is given
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or when the input is closed.
    pub fn non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.line(prompt)?;
            if !line.is_empty() {
                return Ok(line);
            }
            println!("{}", "Input must not be empty!".red());
        }
    }

    /// Read a number within `range`, asking again until one is given
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or when the input is closed.
    pub fn number(&mut self, prompt: &str, range: RangeInclusive<usize>) -> Result<usize> {
        loop {
            let line = self.line(prompt)?;
            match line.parse::<usize>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                Ok(_) => println!(
                    "{}",
                    format!(
                        "Please enter a number between {} and {}",
                        range.start(),
                        range.end()
                    )
                    .red()
                ),
                Err(_) => println!("{}", "Invalid input! Please enter a number".red()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_is_trimmed() {
        let mut prompt = Prompt::new(Cursor::new("  hello \n"));
        assert_eq!(prompt.line("say").unwrap(), "hello");
    }

    #[test]
    fn closed_input_is_error() {
        let mut prompt = Prompt::new(Cursor::new(""));
        assert!(prompt.line("say").is_err());
    }

    #[test]
    fn number_retries_until_valid() {
        let mut prompt = Prompt::new(Cursor::new("abc\n0\n42\n7\n"));
        assert_eq!(prompt.number("pick", 1..=10).unwrap(), 7);
    }

    #[test]
    fn number_fails_when_input_runs_out() {
        let mut prompt = Prompt::new(Cursor::new("99\n"));
        assert!(prompt.number("pick", 1..=10).is_err());
    }

    #[test]
    fn non_empty_skips_blank_lines() {
        let mut prompt = Prompt::new(Cursor::new("\n   \nparis\n"));
        assert_eq!(prompt.non_empty("answer").unwrap(), "paris");
    }
}
