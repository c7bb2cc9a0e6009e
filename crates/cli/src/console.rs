//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};

/// Prompt/answer channel used by the menus.
///
/// Every read consumes one whole line, so a malformed answer never leaks into
/// the next prompt. `None` from any `ask_*` method means end of input.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl core::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print `prompt` and read one line with its terminator stripped.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read a menu choice. Anything that is not a number maps to `Some(None)`.
    pub fn ask_choice(&mut self, prompt: &str) -> io::Result<Option<Option<u32>>> {
        Ok(self
            .ask(prompt)?
            .map(|line| line.trim().parse::<u32>().ok()))
    }

    /// Read an integer, re-prompting until the answer parses.
    pub fn ask_number(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    tracing::debug!(input = %line, "rejected numeric input");
                    self.say("Invalid number, please enter a whole number.")?;
                }
            }
        }
    }
}
