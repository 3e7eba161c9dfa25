//! Command handlers for the Hiko compiler CLI.
//!
//! Each submodule implements one CLI command. Error reporting shared by all
//! commands lives here.

use std::error::Error;

use hk_io::LoadError;
use hk_lexer::LexError;

mod lex;

pub use lex::{lex_file, parse_lex_args};

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

/// Print `err` and its chain of causes to stderr.
pub fn report_error(err: &CommandError) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
