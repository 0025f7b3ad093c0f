//! Command line tokenizer
//!
//! Turns one input line into an argument vector:
//! - Whitespace separates arguments outside quotes
//! - `'...'` and `"..."` spans become one argument each, quotes stripped
//! - A bare argument starting with `$` is replaced by that environment variable
//! - `ls` always gets `--color=auto` appended
//!
//! The only escape recognised is a backslash right before the closing quote,
//! and the backslash itself stays in the argument.

use std::ops::Deref;
use colored::Colorize;
use unicode_width::UnicodeWidthChar;

use super::error::ParseError;

/// Extra argument forced onto every `ls` invocation.
pub const LS_COLOR_FLAG: &str = "--color=auto";

/// Parsed command name plus arguments. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgVector {
    args: Vec<String>,
}

impl ArgVector {
    /// Command name (index 0)
    pub fn name(&self) -> &str {
        &self.args[0]
    }

    /// Everything after the command name
    pub fn rest(&self) -> &[String] {
        &self.args[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    pub fn into_vec(self) -> Vec<String> {
        self.args
    }
}

impl Deref for ArgVector {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.args
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside quotes, between or inside bare words
    Argument,
    /// Inside a span opened by the held quote character
    Quote(char),
}

fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

struct Scanner<F> {
    lookup: F,
    state: ScanState,
    args: Vec<String>,
    bare: Option<String>,
    quoted: String,
}

impl<F> Scanner<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn new(lookup: F) -> Self {
        Self {
            lookup,
            state: ScanState::Argument,
            args: Vec::new(),
            bare: None,
            quoted: String::new(),
        }
    }

    fn step(&mut self, ch: char, prev: Option<char>) -> Result<(), ParseError> {
        let state = self.state;
        match state {
            ScanState::Argument if ch.is_whitespace() => self.end_bare()?,
            ScanState::Argument if is_quote(ch) => {
                self.end_bare()?;
                self.state = ScanState::Quote(ch);
            }
            ScanState::Argument => self.bare.get_or_insert_with(String::new).push(ch),
            ScanState::Quote(open) if ch == open && prev != Some('\\') => {
                let text = std::mem::take(&mut self.quoted);
                self.push_arg(text)?;
                self.state = ScanState::Argument;
            }
            ScanState::Quote(_) => self.quoted.push(ch),
        }
        Ok(())
    }

    fn end_bare(&mut self) -> Result<(), ParseError> {
        if let Some(word) = self.bare.take() {
            let word = self.substitute(word);
            self.push_arg(word)?;
        }
        Ok(())
    }

    /// `$NAME` becomes the variable's value; unknown names stay literal.
    fn substitute(&self, word: String) -> String {
        let value = word
            .strip_prefix('$')
            .filter(|name| !name.is_empty())
            .and_then(|name| (self.lookup)(name));
        value.unwrap_or(word)
    }

    fn push_arg(&mut self, arg: String) -> Result<(), ParseError> {
        self.args
            .try_reserve(1)
            .map_err(|_| ParseError::OutOfMemory)?;
        self.args.push(arg);
        Ok(())
    }

    fn finish(mut self, last_offset: usize) -> Result<ArgVector, ParseError> {
        if let ScanState::Quote(_) = self.state {
            return Err(ParseError::UnterminatedQuote { offset: last_offset });
        }
        self.end_bare()?;

        if self.args.is_empty() {
            return Err(ParseError::Empty);
        }
        if self.args[0] == "ls" {
            self.push_arg(LS_COLOR_FLAG.to_string())?;
        }

        Ok(ArgVector { args: self.args })
    }
}

/// Tokenize a line, substituting `$NAME` from the process environment.
pub fn tokenize(line: &str) -> Result<ArgVector, ParseError> {
    tokenize_with(line, |name| std::env::var(name).ok())
}

/// Tokenize a line with an explicit variable lookup.
pub fn tokenize_with<F>(line: &str, lookup: F) -> Result<ArgVector, ParseError>
where
    F: Fn(&str) -> Option<String>,
{
    if line.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut scanner = Scanner::new(lookup);
    let mut prev = None;
    let mut last_offset = 0;
    for (offset, ch) in line.chars().enumerate() {
        scanner.step(ch, prev)?;
        prev = Some(ch);
        last_offset = offset;
    }

    scanner.finish(last_offset)
}

/// Render the unclosed-quote diagnostic with a `~~~^` marker under `offset`.
pub fn render_unterminated(line: &str, offset: usize) -> String {
    let width: usize = line
        .chars()
        .take(offset)
        .map(|c| c.width().unwrap_or(0))
        .sum();
    let marker = format!("{}^", "~".repeat(width));

    format!(
        "{} {}\n   |    {}\n   |    {}",
        "error:".red().bold(),
        "Unclosed quote".bold(),
        line,
        marker.bright_magenta().bold()
    )
}
