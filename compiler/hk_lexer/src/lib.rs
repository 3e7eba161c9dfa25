//! Tokenizer for the Hiko compiler.
//!
//! Turns a [`Cursor`] into a stream of [`Token`]s in a single pass with one
//! character of lookahead (two when disambiguating integer prefixes).
//!
//! Two ways to consume the stream:
//! - push: [`tokenize`] hands each token to a [`TokenDelegate`] as soon as
//!   it is scanned, without materializing the stream;
//! - pull: [`Tokenizer`] is an iterator of `Result<Token, LexError>`.
//!
//! Either way the stream ends with exactly one [`TokenKind::End`] token, and
//! nothing follows it or an error.
//!
//! # Tracing
//!
//! - `RUST_LOG=hk_lexer=debug`: scan start/finish, terminator synthesis, errors.
//! - `RUST_LOG=hk_lexer=trace`: every token.

mod lex_error;
mod tokenizer;

pub use hk_ir::{Token, TokenKind};
pub use hk_lexer_core::{Cursor, SourceBuffer};
pub use lex_error::{LexError, LexErrorKind};
pub use tokenizer::Tokenizer;

use tracing::debug;

/// Receiver for tokens produced by [`tokenize`].
///
/// The callback runs inline on the tokenizing thread. Returning an error
/// aborts the scan; no further tokens are delivered.
pub trait TokenDelegate<'src> {
    /// Error type of the callback. Lexical errors are converted into it.
    type Error: From<LexError>;

    fn on_token(&mut self, token: Token<'src>) -> Result<(), Self::Error>;
}

/// Collects every token, in order.
impl<'src> TokenDelegate<'src> for Vec<Token<'src>> {
    type Error = LexError;

    fn on_token(&mut self, token: Token<'src>) -> Result<(), LexError> {
        self.push(token);
        Ok(())
    }
}

/// Tokenize everything under `cursor`, pushing each token to `delegate`.
///
/// Returns after the `End` token has been delivered, or at the first lexical
/// or delegate error.
#[tracing::instrument(level = "debug", skip_all, fields(path = ?cursor.path(), len = cursor.source_len()))]
pub fn tokenize<'src, D>(cursor: Cursor<'src>, delegate: &mut D) -> Result<(), D::Error>
where
    D: TokenDelegate<'src> + ?Sized,
{
    let mut count = 0usize;
    for token in Tokenizer::new(cursor) {
        delegate.on_token(token?)?;
        count += 1;
    }
    debug!(count, "tokenize finished");
    Ok(())
}

/// Tokenize a whole buffer and collect the stream.
pub fn tokenize_buffer(buffer: &SourceBuffer) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    tokenize(buffer.cursor(), &mut tokens)?;
    Ok(tokens)
}
