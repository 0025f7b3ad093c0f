//! Built-in commands
//!
//! These run inside the shell process and never spawn a child:
//! `echo`, `exit`, `type`, `pwd` and `cd`. Each one writes to the streams it
//! is handed so it can run against in-memory buffers.

use std::env;
use std::io::Write;
use std::path::PathBuf;
use anyhow::{anyhow, Result};
use tracing::debug;

use super::error::{describe_io_error, ShellError};
use super::path;
use super::Shell;

/// The closed set of builtin commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Echo,
    Exit,
    Type,
    Pwd,
    Cd,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Echo,
        Builtin::Exit,
        Builtin::Type,
        Builtin::Pwd,
        Builtin::Cd,
    ];

    /// Exact, case-sensitive name lookup.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "echo" => Some(Builtin::Echo),
            "exit" => Some(Builtin::Exit),
            "type" => Some(Builtin::Type),
            "pwd" => Some(Builtin::Pwd),
            "cd" => Some(Builtin::Cd),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Echo => "echo",
            Builtin::Exit => "exit",
            Builtin::Type => "type",
            Builtin::Pwd => "pwd",
            Builtin::Cd => "cd",
        }
    }

    /// Run with `args` being everything after the command name.
    pub fn run(
        self,
        shell: &mut Shell,
        args: &[String],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<i32> {
        match self {
            Builtin::Echo => builtin_echo(args, out),
            Builtin::Exit => builtin_exit(shell),
            Builtin::Type => builtin_type(shell, args, out, err),
            Builtin::Pwd => builtin_pwd(out),
            Builtin::Cd => builtin_cd(shell, args),
        }
    }
}

pub fn is_builtin(name: &str) -> bool {
    Builtin::lookup(name).is_some()
}

/// echo - print arguments separated by single spaces
fn builtin_echo(args: &[String], out: &mut dyn Write) -> Result<i32> {
    writeln!(out, "{}", args.join(" "))?;
    Ok(0)
}

/// exit - leave the shell with status 0, whatever the arguments
fn builtin_exit(shell: &mut Shell) -> Result<i32> {
    shell.should_exit = true;
    Ok(0)
}

/// type - say whether each name is a builtin or where it lives on PATH
fn builtin_type(
    shell: &Shell,
    args: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let mut all_found = true;

    for name in args {
        if is_builtin(name) {
            writeln!(out, "{} is a shell builtin", name)?;
            continue;
        }

        let outcome = path::search(name, shell.env.search_path());
        for dir in &outcome.inaccessible {
            writeln!(err, "type: {}", dir)?;
        }

        match outcome.found {
            Some(found) => writeln!(out, "{} is {}", name, found.display())?,
            None => {
                all_found = false;
                writeln!(err, "{}: not found", name)?;
            }
        }
    }

    Ok(if all_found { 0 } else { 1 })
}

/// pwd - print working directory
fn builtin_pwd(out: &mut dyn Write) -> Result<i32> {
    let cwd = env::current_dir().map_err(|e| anyhow!("pwd: {}", describe_io_error(&e)))?;
    writeln!(out, "{}", cwd.display())?;
    Ok(0)
}

/// cd - change directory; no argument or `~...` means HOME
fn builtin_cd(shell: &Shell, args: &[String]) -> Result<i32> {
    let target = match args.first() {
        Some(arg) if !arg.starts_with('~') => PathBuf::from(arg),
        _ => shell.env.home_dir().ok_or(ShellError::HomeNotSet)?,
    };

    env::set_current_dir(&target).map_err(|e| ShellError::ChangeDirectory {
        path: target.display().to_string(),
        reason: describe_io_error(&e),
    })?;
    debug!(dir = %target.display(), "changed directory");

    Ok(0)
}
