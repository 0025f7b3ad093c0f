//! Startup environment snapshot

use std::env;
use std::path::PathBuf;

/// `PATH` and `HOME` as they were when the shell started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellEnv {
    path: Option<String>,
    home: Option<PathBuf>,
}

impl ShellEnv {
    pub fn new(path: Option<String>, home: Option<PathBuf>) -> Self {
        Self { path, home }
    }

    /// Read `PATH` and `HOME` from the process environment.
    pub fn capture() -> Self {
        Self {
            path: env::var("PATH").ok(),
            home: env::var_os("HOME").map(PathBuf::from),
        }
    }

    /// Colon-separated search list, empty when `PATH` was unset
    pub fn search_path(&self) -> &str {
        self.path.as_deref().unwrap_or("")
    }

    /// Home directory for `cd`, falling back to the platform lookup when `HOME` is unset.
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.home
            .clone()
            .filter(|h| !h.as_os_str().is_empty())
            .or_else(dirs::home_dir)
    }
}
