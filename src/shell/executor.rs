//! Command dispatcher - runs builtins in-process, everything else as a child

use std::io::{self, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::builtin::Builtin;
use super::error::ShellError;
use super::parser::ArgVector;
use super::path;
use super::Shell;

/// Run one parsed command line and return its exit status.
///
/// Builtin failures and launch failures are reported on `err` and turned into
/// status 1; only broken output streams surface as `Err`.
pub fn dispatch(
    shell: &mut Shell,
    argv: &ArgVector,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let name = argv.name();

    if let Some(builtin) = Builtin::lookup(name) {
        debug!(command = name, "running builtin");
        return run_builtin(shell, builtin, argv.rest(), out, err);
    }

    // Child output goes straight to the terminal; anything we buffered must land first.
    out.flush()?;
    execute_external(shell, argv, err)
}

fn run_builtin(
    shell: &mut Shell,
    builtin: Builtin,
    args: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    match builtin.run(shell, args, out, err) {
        Ok(code) => {
            let _ = out.flush();
            let _ = err.flush();
            Ok(code)
        }
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            let _ = err.flush();
            Ok(1)
        }
    }
}

fn execute_external(shell: &Shell, argv: &ArgVector, err: &mut dyn Write) -> Result<i32> {
    let name = argv.name();

    let Some(program) = path::locate(name, shell.env.search_path()) else {
        return command_not_found(name, err);
    };

    let mut child = match spawn_external(&program, argv) {
        Ok(child) => child,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(program = %program.display(), error = %e, "failed to launch");
            }
            return command_not_found(name, err);
        }
    };

    debug!(program = %program.display(), pid = child.id(), "waiting for child");
    let status = child
        .wait()
        .with_context(|| format!("{}: failed to wait for child", name))?;
    let code = exit_code(status);
    debug!(command = name, code, "child exited");

    Ok(code)
}

fn spawn_external(program: &Path, argv: &ArgVector) -> io::Result<Child> {
    let mut cmd = Command::new(program);
    cmd.args(argv.rest())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Keep argv[0] as typed rather than the resolved path.
        cmd.arg0(argv.name());
    }

    cmd.spawn()
}

fn command_not_found(name: &str, err: &mut dyn Write) -> Result<i32> {
    let _ = writeln!(err, "{}", ShellError::CommandNotFound(name.to_string()));
    let _ = err.flush();
    Ok(1)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
