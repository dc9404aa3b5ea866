use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Interactive parameter entry on the terminal.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for a value, showing `current` as the default.
    ///
    /// Empty input or end of input keeps `current`. Input that fails to parse
    /// or is rejected by `accept` asks again.
    pub fn ask<T, F>(&mut self, label: &str, current: T, accept: F) -> io::Result<T>
    where
        T: FromStr + Display,
        F: Fn(&T) -> bool,
    {
        loop {
            write!(self.output, "{label} [{current}]: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(current);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(current);
            }

            match trimmed.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => writeln!(self.output, "invalid value {trimmed:?}, try again")?,
            }
        }
    }
}
