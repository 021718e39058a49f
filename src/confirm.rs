//! Overwrite confirmation
//!
//! Instantiating a test case over an existing file asks a [`Confirm`]
//! implementation first. The binary answers from stdin; tests pass a closure.

use std::io::{self, BufRead, Write};

/// Decides whether an existing file may be overwritten
pub trait Confirm {
    /// Ask the question in `prompt`, returning true only on an affirmative answer
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self(prompt))
    }
}

/// Whether a typed answer counts as "yes"
///
/// Only `yes` in any letter case is accepted; `y` is not.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).to_lowercase() == "yes"
}

/// Prompts on a writer and reads one answer line from a reader
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, answer from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut answer = String::new();
        // EOF reads as an empty answer, which declines
        self.input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}
