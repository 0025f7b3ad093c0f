//! Error types shared by the parser, resolver and dispatcher

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a line could not be turned into an argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quoted span was still open at end of line. `offset` is the char
    /// index of the last character scanned.
    #[error("Unclosed quote")]
    UnterminatedQuote { offset: usize },
    #[error("empty command line")]
    Empty,
    #[error("out of memory while storing arguments")]
    OutOfMemory,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("cd: {path}: {reason}")]
    ChangeDirectory { path: String, reason: String },

    #[error("cd: HOME not set")]
    HomeNotSet,
}

/// A search-path directory that could not be read.
#[derive(Debug, Error)]
#[error("{}: {}", .dir.display(), describe_io_error(.source))]
pub struct InaccessibleDir {
    pub dir: PathBuf,
    pub source: io::Error,
}

/// Short OS-style description of an I/O error, without the `(os error N)` suffix.
pub fn describe_io_error(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "No such file or directory".to_string(),
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        io::ErrorKind::NotADirectory => "Not a directory".to_string(),
        _ => {
            let text = err.to_string();
            match text.find(" (os error") {
                Some(idx) => text[..idx].to_string(),
                None => text,
            }
        }
    }
}
