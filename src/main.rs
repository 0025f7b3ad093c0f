//! caretsh - small interactive shell
//!
//! Usage:
//!   caretsh                  Interactive shell
//!   caretsh -c "command"     Execute a single command line

use std::env;
use std::io::{self, IsTerminal};
use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use caretsh::logging;
use caretsh::shell::input::{EditorInput, PlainInput};
use caretsh::shell::repl;
use caretsh::Shell;

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "-c" => {
                if args.len() < 3 {
                    eprintln!("caretsh: -c requires an argument");
                    std::process::exit(1);
                }
                let cmd = args[2..].join(" ");
                let code = execute_command(&cmd)?;
                std::process::exit(code);
            }
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-v" | "--version" => {
                println!("caretsh v{}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => {
                eprintln!("caretsh: unknown option: {}", other);
                std::process::exit(1);
            }
        }
    }

    let code = run_repl()?;
    std::process::exit(code);
}

fn print_help() {
    println!("{}", "caretsh - small interactive shell".bold());
    println!();
    println!("Usage:");
    println!("  caretsh                  Start interactive shell");
    println!("  caretsh -c \"command\"     Execute a single command line");
    println!("  caretsh -h, --help       Show this help");
    println!("  caretsh -v, --version    Show version");
    println!();
    println!("Builtins: echo, exit, type, pwd, cd");
    println!("Set {}=debug for diagnostics on stderr.", logging::LOG_ENV);
}

fn execute_command(cmd: &str) -> Result<i32> {
    let mut shell = Shell::new();
    match shell.execute(cmd) {
        Ok(()) => Ok(shell.last_status),
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            Ok(1)
        }
    }
}

/// Give children a colour-capable terminal type when none was inherited.
fn ensure_term() {
    if env::var_os("TERM").is_none() {
        env::set_var("TERM", "xterm-256color");
    }
}

fn run_repl() -> Result<i32> {
    ensure_term();

    let mut shell = Shell::new();
    debug!(env = ?shell.env, "starting shell");

    let mut out = io::stdout();
    let mut err = io::stderr();

    if io::stdin().is_terminal() {
        let mut input = EditorInput::new()?;
        repl::run(&mut shell, &mut input, &mut out, &mut err)
    } else {
        let mut input = PlainInput::new(io::stdin().lock(), io::stdout());
        repl::run(&mut shell, &mut input, &mut out, &mut err)
    }
}
