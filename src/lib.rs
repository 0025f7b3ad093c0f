//! caretsh - a small interactive shell
//!
//! Features:
//! - Quote-aware tokenizer with `$VAR` substitution
//! - Caret diagnostics for unclosed quotes
//! - Builtins: echo, exit, type, pwd, cd
//! - External commands located through PATH

pub mod logging;
pub mod shell;

pub use shell::Shell;
