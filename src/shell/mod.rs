//! Shell core module

pub mod builtin;
pub mod env;
pub mod error;
pub mod executor;
pub mod input;
pub mod parser;
pub mod path;
pub mod repl;

#[cfg(test)]
pub(crate) mod test_support;

use std::io::{self, Write};
use anyhow::Result;

use self::env::ShellEnv;
use self::error::ParseError;

/// Main shell state
#[derive(Debug)]
pub struct Shell {
    /// `PATH`/`HOME` captured at startup
    pub env: ShellEnv,
    /// Status of the last dispatched command
    pub last_status: i32,
    /// Set by `exit`
    pub should_exit: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_env(ShellEnv::capture())
    }

    pub fn with_env(env: ShellEnv) -> Self {
        Self {
            env,
            last_status: 0,
            should_exit: false,
        }
    }

    /// Execute a command line against the process stdout/stderr
    pub fn execute(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout();
        let mut err = io::stderr();
        self.execute_with_io(line, &mut out, &mut err)
    }

    /// Parse and dispatch one line. Blank lines are ignored; parse errors are
    /// reported on `err` and the line is dropped.
    pub fn execute_with_io(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        let argv = match parser::tokenize(line) {
            Ok(argv) => argv,
            Err(ParseError::UnterminatedQuote { offset }) => {
                writeln!(err, "{}", parser::render_unterminated(line, offset))?;
                self.last_status = 1;
                return Ok(());
            }
            Err(e) => {
                writeln!(err, "{}", e)?;
                self.last_status = 1;
                return Ok(());
            }
        };

        self.last_status = executor::dispatch(self, &argv, out, err)?;
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(shell: &mut Shell, line: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        shell.execute_with_io(line, &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_blank_line_is_noop() {
        let mut shell = Shell::with_env(ShellEnv::default());
        shell.last_status = 7;
        let (out, err) = run(&mut shell, " \t ");
        assert!(out.is_empty() && err.is_empty());
        assert_eq!(shell.last_status, 7);
    }

    #[test]
    fn test_echo_line() {
        let mut shell = Shell::with_env(ShellEnv::default());
        let (out, _) = run(&mut shell, "echo a b c");
        assert_eq!(out, "a b c\n");
        assert_eq!(shell.last_status, 0);
    }

    #[test]
    fn test_unclosed_quote_is_reported_not_run() {
        let mut shell = Shell::with_env(ShellEnv::default());
        let (out, err) = run(&mut shell, "echo 'unterminated");
        assert!(out.is_empty());
        assert!(err.contains("Unclosed quote"));
        assert!(err.contains("echo 'unterminated"));
        assert!(err.contains(&format!("{}^", "~".repeat(17))));
        assert_eq!(shell.last_status, 1);
    }

    #[test]
    fn test_exit_line() {
        let mut shell = Shell::with_env(ShellEnv::default());
        run(&mut shell, "exit");
        assert!(shell.should_exit);
    }
}
