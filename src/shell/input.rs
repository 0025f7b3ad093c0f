//! Line sources for the REPL
//!
//! `EditorInput` wraps rustyline for interactive terminals; `PlainInput`
//! reads newline-terminated lines from any reader (pipes, files, tests).

use std::io::{BufRead, Write};
use anyhow::Result;
use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    Line(String),
    Interrupt,
    Eof,
}

/// Something that can show a prompt and hand back one line.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<InputResult>;
}

/// Interactive line editor. History is left off.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        let config = Config::builder().auto_add_history(false).build();
        Ok(Self {
            editor: DefaultEditor::with_config(config)?,
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<InputResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(InputResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(InputResult::Interrupt),
            Err(ReadlineError::Eof) => Ok(InputResult::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompt on `out`, read lines from `reader`.
pub struct PlainInput<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> PlainInput<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }
}

impl<R: BufRead, W: Write> LineSource for PlainInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<InputResult> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(InputResult::Eof);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(InputResult::Line(line))
    }
}
