//! Read-parse-dispatch loop

use std::io::Write;
use anyhow::Result;
use colored::Colorize;
use tracing::warn;

use super::input::{InputResult, LineSource};
use super::Shell;

/// The `$ ` prompt, in orange.
pub fn prompt() -> String {
    format!("{} ", "$".truecolor(255, 135, 0))
}

/// Run until `exit` or end of input. Returns the process exit status.
pub fn run<S>(
    shell: &mut Shell,
    input: &mut S,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32>
where
    S: LineSource + ?Sized,
{
    loop {
        let line = match input.read_line(&prompt()) {
            Ok(InputResult::Line(line)) => line,
            Ok(InputResult::Interrupt) => continue,
            Ok(InputResult::Eof) => break,
            Err(e) => {
                warn!(error = %e, "input failed, stopping");
                let _ = writeln!(err, "Input error: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        if let Err(e) = shell.execute_with_io(&line, out, err) {
            let _ = writeln!(err, "{}: {}", "error".red(), e);
        }
        if shell.should_exit {
            break;
        }
    }

    let _ = out.flush();
    Ok(0)
}
