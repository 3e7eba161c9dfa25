//! Lexer error types.
//!
//! Every error carries the [`Location`] of the offending character or
//! literal so a diagnostic can point straight at it. The tokenizer stops at
//! the first error; there is no recovery and no partial stream after it.

use hk_ir::Location;

/// A lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{location}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Start of the malformed literal, or the unexpected character.
    pub location: Location,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Malformed integer literal: a base prefix with no digits (`0x`), or
    /// digits running into letters or out-of-base digits (`12ab`, `0b012`).
    #[error("invalid integer literal `{text}`")]
    InvalidLiteral { text: String },
    /// A character that cannot start any token.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },
}

impl LexError {
    pub fn invalid_literal(text: impl Into<String>, location: Location) -> Self {
        LexError {
            kind: LexErrorKind::InvalidLiteral { text: text.into() },
            location,
        }
    }

    pub fn unexpected_character(found: char, location: Location) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedCharacter { found },
            location,
        }
    }
}

#[cfg(test)]
mod tests;
