//! `hkc lex`: print the token stream of one file.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use hk_io::{load_source, FileReader, LoadOptions, SourceFile};
use hk_ir::{PathTable, Token};
use hk_lexer::{tokenize, TokenDelegate};
use hk_lexer_core::SourceBuffer;
use tracing::warn;

use super::CommandError;

/// Parsed arguments of `hkc lex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexArgs {
    pub path: PathBuf,
    pub load: LoadOptions,
}

/// Parse the arguments following `lex`.
pub fn parse_lex_args(args: &[String]) -> Result<LexArgs, String> {
    let mut path = None;
    let mut load = LoadOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--chunk-size=") {
            let chunk_size: usize = value
                .parse()
                .map_err(|_| format!("invalid chunk size '{value}'"))?;
            if chunk_size == 0 {
                return Err("chunk size must be at least 1".to_string());
            }
            load = load.with_chunk_size(chunk_size);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(LexArgs { path, load })
}

/// Load `args.path`, tokenize it, and write one token per line to `out`.
pub fn lex_file(args: &LexArgs, out: &mut impl Write) -> Result<(), CommandError> {
    let paths = Arc::new(PathTable::new());
    let id = paths.intern(&args.path);
    let file = SourceFile::Disk(FileReader::new(Arc::clone(&paths), id));

    let loaded = load_source(&file, &args.load);
    file.close();
    let buffer = loaded?;

    warn_encoding_issues(&paths, &buffer);

    let mut printer = TokenPrinter { out };
    tokenize(buffer.cursor(), &mut printer)
}

fn warn_encoding_issues(paths: &PathTable, buffer: &SourceBuffer) {
    let path = paths.display_path(buffer.path());
    for issue in buffer.encoding_issues() {
        warn!(
            path = %path.display(),
            kind = ?issue.kind,
            offset = issue.pos,
            len = issue.len,
            "encoding issue in source"
        );
    }
}

/// Writes each token as `line:column Kind "text"`.
struct TokenPrinter<'w, W: Write> {
    out: &'w mut W,
}

impl<'src, W: Write> TokenDelegate<'src> for TokenPrinter<'_, W> {
    type Error = CommandError;

    fn on_token(&mut self, token: Token<'src>) -> Result<(), CommandError> {
        writeln!(
            self.out,
            "{} {:?} {:?}",
            token.location, token.kind, token.text
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
